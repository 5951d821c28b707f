pub mod error;

use axum::{
    Json, Router,
    extract::{OriginalUri, rejection::JsonRejection},
    http::{Method, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use tracing::{error, info, instrument, warn};

pub use error::ApiError;

use crate::{models::BudgetEstimate, pricing::BudgetEstimator, validation};

pub fn router() -> Router {
    Router::new().route(
        "/estimate-budget",
        post(estimate_budget).fallback(method_not_allowed),
    )
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "message": "Trip Budget API is running!",
        "status": "healthy",
        "version": crate::VERSION,
        "endpoints": ["/api/estimate-budget"],
    }))
}

#[instrument(skip_all)]
pub async fn estimate_budget(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BudgetEstimate>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        let status = match &rejection {
            JsonRejection::BytesRejection(_) => rejection.status(),
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError::InvalidBody {
            status,
            details: rejection.body_text(),
        }
    })?;

    let trip = validation::validate(&payload).map_err(|source| {
        warn!("{}", source);
        ApiError::MissingFields {
            source,
            received: payload.clone(),
        }
    })?;

    let estimate = BudgetEstimator::standard().estimate(&trip).map_err(|e| {
        error!("Budget calculation failed: {}", e);
        ApiError::Internal(e.to_string())
    })?;

    info!(
        "Budget calculated for {} people to {} for {} days",
        trip.people, trip.destination, trip.days
    );

    Ok(Json(estimate))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);
    ApiError::NotFound { method, path }
}
