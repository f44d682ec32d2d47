use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Failures surfaced to the HTTP caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Username and id are required")]
    MissingParams,

    #[error("User not found")]
    UserNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParams => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Ways a profile lookup can go wrong before it is collapsed into "not found".
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to profile service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("profile service answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("profile service returned no data")]
    MissingData,
}
