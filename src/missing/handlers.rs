use axum::{extract::State, routing::post, Json, Router};
use time::OffsetDateTime;
use tracing::{info, instrument};

use super::dto::{MessageResponse, MissingFoodReport};
use crate::{error::ApiError, state::AppState};

pub fn missing_routes() -> Router<AppState> {
    Router::new().route("/foods/missing", post(report_missing))
}

#[instrument(skip(state, payload))]
pub async fn report_missing(
    State(state): State<AppState>,
    Json(payload): Json<MissingFoodReport>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .missing_log
        .append(&payload, OffsetDateTime::now_utc())
        .await
        .map_err(ApiError::WriteFailed)?;

    info!(name = %payload.name, user_id = %payload.user_id, "missing food reported");
    Ok(Json(MessageResponse {
        message: "Logged locally",
    }))
}
