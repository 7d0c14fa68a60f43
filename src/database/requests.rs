use std::str::FromStr;

use rocket::serde::json::Json;
use rocket::*;

use super::*;

/// Registers a player and echoes back the persisted record.
#[utoipa::path(
    request_body = Player,
    responses(
        (status = 200, description = "The persisted player, identity included", body = Player),
        (status = 500, description = "The store rejected the write"),
    )
)]
#[post("/addplayer", format = "json", data = "<player>")]
pub async fn add_player(player: Json<Player>, store: &State<Store>) -> ApiResult<Json<Player>> {
    let player = store.add_player(player.0).await?;
    Ok(Json(player))
}

/// Get list of all players, optionally narrowed to those interested in one
/// of the known games.
#[utoipa::path(
    params(
        ("interest" = Option<Interest>, Query, description = "Keep only players whose interest set contains this value"),
    ),
    responses(
        (status = 200, description = "All matching players, store order", body = [Player]),
        (status = 400, description = "Unknown interest value"),
        (status = 500, description = "The store rejected the read"),
    )
)]
#[get("/players?<interest>")]
pub async fn get_players(
    interest: Option<&str>,
    store: &State<Store>,
) -> ApiResult<Json<Vec<Player>>> {
    // Reject before touching the store
    let interest = interest.map(Interest::from_str).transpose()?;

    let players = store.players(interest).await?;
    Ok(Json(players))
}

/// Creates a game under a caller-chosen name.
#[utoipa::path(
    request_body = CustomGame,
    responses(
        (status = 200, description = "The persisted game, identity included", body = Game),
        (status = 500, description = "The store rejected the write"),
    )
)]
#[post("/new/custom-game", format = "json", data = "<game>")]
pub async fn create_custom_game(
    game: Json<CustomGame>,
    store: &State<Store>,
) -> ApiResult<Json<Game>> {
    let game = store.create_game(game.0.into()).await?;
    Ok(Json(game))
}

/// Creates a game of Risk; the name is fixed, only the player counts come
/// from the caller.
#[utoipa::path(
    request_body = RiskGame,
    responses(
        (status = 200, description = "The persisted game, named \"Risk\"", body = Game),
        (status = 500, description = "The store rejected the write"),
    )
)]
#[post("/new/risk", format = "json", data = "<game>")]
pub async fn create_risk_game(
    game: Json<RiskGame>,
    store: &State<Store>,
) -> ApiResult<Json<Game>> {
    let game = store.create_game(game.0.into()).await?;
    Ok(Json(game))
}
