use mongodb::bson::oid::ObjectId;
use rocket::serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted game record.
#[derive(Clone, Serialize, Deserialize, ToSchema, PartialEq, Debug)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct Game {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub min_players: i32,
    pub max_players: i32,
}

/// Payload for `POST /new/custom-game`: the caller names the game.
#[derive(Clone, Serialize, Deserialize, ToSchema, Debug)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct CustomGame {
    pub name: String,
    pub min_players: i32,
    pub max_players: i32,
}

/// Payload for `POST /new/risk`: the name is not the caller's to pick.
#[derive(Clone, Copy, Serialize, Deserialize, ToSchema, Debug)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct RiskGame {
    pub min_players: i32,
    pub max_players: i32,
}

impl From<CustomGame> for Game {
    fn from(game: CustomGame) -> Self {
        Self {
            id: None,
            name: game.name,
            min_players: game.min_players,
            max_players: game.max_players,
        }
    }
}

impl From<RiskGame> for Game {
    fn from(game: RiskGame) -> Self {
        Self {
            id: None,
            name: "Risk".to_owned(),
            min_players: game.min_players,
            max_players: game.max_players,
        }
    }
}
