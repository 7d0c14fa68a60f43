use rocket::get;
use rocket::serde::json::Json;
use utoipa::OpenApi;

use crate::database::{CustomGame, Game, GeoPoint, Interest, Player, PointKind, RiskGame};

/// OpenAPI document assembled from the route metadata in
/// [`crate::database::requests`].
#[derive(OpenApi)]
#[openapi(
    info(title = "Test API Documentation", version = "0.1"),
    paths(
        crate::database::requests::add_player,
        crate::database::requests::get_players,
        crate::database::requests::create_custom_game,
        crate::database::requests::create_risk_game,
    ),
    components(schemas(Player, GeoPoint, PointKind, Interest, Game, CustomGame, RiskGame))
)]
struct ApiDoc;

#[get("/documentation")]
pub fn documentation() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
