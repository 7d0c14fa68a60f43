use mongodb::bson::oid::ObjectId;
use rocket::serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ApiError, ApiResult};

/// A registered player. Doubles as the `POST /addplayer` payload (identity
/// omitted) and the persisted record (identity assigned by the store).
#[derive(Clone, Serialize, Deserialize, ToSchema, PartialEq, Debug)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct Player {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub id: Option<ObjectId>,
    pub nick_name: String,
    pub location: GeoPoint,
    #[serde(default)]
    pub interest: Vec<String>,
    pub age: i32,
    pub can_host: bool,
}

/// GeoJSON-like point: a constant `"Point"` tag plus a coordinate pair.
#[derive(Clone, Serialize, Deserialize, ToSchema, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: PointKind,
    #[schema(value_type = Vec<f64>)]
    pub coordinates: [f64; 2],
}

#[derive(Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub enum PointKind {
    Point,
}

/// The interests the listing route knows how to filter by. Player records
/// store plain strings; this enumeration is enforced at query time only.
#[derive(Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub enum Interest {
    Risk,
    Chest,
    Catan,
    Others,
}

impl Interest {
    pub fn as_str(self) -> &'static str {
        match self {
            Interest::Risk => "Risk",
            Interest::Chest => "Chest",
            Interest::Catan => "Catan",
            Interest::Others => "Others",
        }
    }
}

impl std::str::FromStr for Interest {
    type Err = ApiError;

    fn from_str(value: &str) -> ApiResult<Self> {
        match value {
            "Risk" => Ok(Interest::Risk),
            "Chest" => Ok(Interest::Chest),
            "Catan" => Ok(Interest::Catan),
            "Others" => Ok(Interest::Others),
            _ => Err(ApiError::UnknownInterest {
                value: value.to_owned(),
            }),
        }
    }
}
