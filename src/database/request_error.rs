use std::io::Cursor;

use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};

#[derive(Debug)]
pub enum ApiError {
    UnknownInterest { value: String },
    Store(mongodb::error::Error),
}

impl std::error::Error for ApiError {}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownInterest { value } => write!(
                f,
                "unknown interest {:?}, expected one of Risk, Chest, Catan, Others",
                value
            ),
            Self::Store(error) => write!(f, "store request failed: {}", error),
        }
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(error: mongodb::error::Error) -> Self {
        Self::Store(error)
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
        let (status, body) = match &self {
            Self::UnknownInterest { .. } => (Status::BadRequest, self.to_string()),
            // The raw driver error goes back to the caller, unsanitized.
            Self::Store(error) => (Status::InternalServerError, format!("{:?}", error)),
        };

        Response::build()
            .status(status)
            .header(ContentType::Text)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

pub type ApiResult<T, E = ApiError> = std::result::Result<T, E>;
