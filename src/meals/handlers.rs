use axum::{extract::State, routing::post, Json, Router};
use tracing::{instrument, warn};

use super::{
    dto::{LogMealRequest, LogMealResponse},
    services::log_meal,
};
use crate::{error::ApiError, state::AppState};

pub fn meal_routes() -> Router<AppState> {
    Router::new().route("/meals", post(create_meal))
}

/// POST /meals { userId, foods: [{ foodId, qty }] }
#[instrument(skip(state, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    Json(payload): Json<LogMealRequest>,
) -> Result<Json<LogMealResponse>, ApiError> {
    if let Err(msg) = payload.validate() {
        warn!(user_id = %payload.user_id, %msg, "rejected meal");
        return Err(ApiError::BadRequest(msg));
    }

    let logged = log_meal(&state, payload).await?;
    Ok(Json(logged))
}
