//! JSON error bodies returned by the HTTP API

use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::validation::{MissingFields, REQUIRED_FIELDS};

/// Endpoints advertised by the 404 body
pub const AVAILABLE_ENDPOINTS: [&str; 2] = ["GET /", "POST /api/estimate-budget"];

/// Every failure the API reports to clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required fields absent or unusable
    #[error("{source}")]
    MissingFields {
        source: MissingFields,
        received: Value,
    },
    /// Body could not be read as JSON. `status` is 413 when the body limit
    /// tripped while buffering, 400 otherwise.
    #[error("Invalid JSON body: {details}")]
    InvalidBody { status: StatusCode, details: String },
    /// Anything that went wrong while computing
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("{method} {path} is not available")]
    NotFound { method: Method, path: String },
    #[error("Only POST requests are allowed")]
    MethodNotAllowed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingFields { source, received } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Missing required fields",
                    "required": REQUIRED_FIELDS,
                    "missing": source.missing,
                    "received": received,
                }),
            ),
            ApiError::InvalidBody { status, details } => (
                *status,
                json!({
                    "error": if *status == StatusCode::PAYLOAD_TOO_LARGE {
                        "Request body too large"
                    } else {
                        "Invalid JSON body"
                    },
                    "details": details,
                    "required": REQUIRED_FIELDS,
                }),
            ),
            ApiError::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Something went wrong",
                    "details": details,
                }),
            ),
            ApiError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Endpoint not found",
                    "message": self.to_string(),
                    "availableEndpoints": AVAILABLE_ENDPOINTS,
                }),
            ),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
