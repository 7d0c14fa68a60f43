use rocket::response::Redirect;
use rocket::*;

use database::Store;

mod database;
mod docs;

fn rocket(store: Store) -> Rocket<Build> {
    rocket::build()
        .mount(
            "/",
            routes![
                index,
                docs::documentation,
                database::requests::add_player,
                database::requests::get_players,
                database::requests::create_custom_game,
                database::requests::create_risk_game,
            ],
        )
        .manage::<Store>(store)
}

#[get("/")]
fn index() -> Redirect {
    Redirect::found(uri!(docs::documentation))
}

#[rocket::main]
async fn main() {
    // Anything that escapes the per-request error handling ends the process.
    if let Err(error) = serve().await {
        eprintln!("fatal: {}", error);
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    // Connect to the document store
    dotenv::dotenv().ok();
    let store_url =
        dotenv::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_owned());
    let store_db = dotenv::var("MONGODB_DB").unwrap_or_else(|_| "acme".to_owned());

    let store = Store::connect(&store_url, &store_db).await?;

    let _server = rocket(store).launch().await?;
    Ok(())
}
