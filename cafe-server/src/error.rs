//! API error responses
//!
//! Every error is rendered as `{"error": {"<label>": "<message>"}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cafe_core::CafeError;
use thiserror::Error;

pub const NO_CAFE_WITH_ID: &str = "Sorry a cafe with that id was not found in the database.";
pub const NO_COFFEE_AT_LOCATION: &str = "Sorry, we dont have coffee at that location.";
pub const NO_CAFES: &str = "Sorry, there are no cafes in the database.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("You are not allowed to change the content of the database.")]
    Forbidden,

    /// Empty search or empty table
    #[error("{0}")]
    NotFound(&'static str),

    /// Lookup of a specific cafe id
    #[error("{}", NO_CAFE_WITH_ID)]
    UnknownId,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) | ApiError::UnknownId => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Key used inside the `error` object
    fn label(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad Request",
            ApiError::Forbidden => "Forbidden",
            ApiError::NotFound(_) => "Not Found",
            // id lookups have always used the lowercase form
            ApiError::UnknownId => "Not found",
            ApiError::Conflict(_) => "Conflict",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }
}

impl From<CafeError> for ApiError {
    fn from(err: CafeError) -> Self {
        match err {
            CafeError::Duplicate(_) => ApiError::Conflict(err.to_string()),
            CafeError::Validation(msg) => ApiError::BadRequest(msg),
            CafeError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ApiError::Internal("Database error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut detail = serde_json::Map::new();
        detail.insert(self.label().to_string(), self.to_string().into());
        (self.status(), Json(serde_json::json!({ "error": detail }))).into_response()
    }
}
