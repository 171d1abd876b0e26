use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{
    dto::{HistoryQuery, HistoryRecord},
    range::filter_since,
    repo,
};
use crate::{error::ApiError, state::AppState, users::services::require_user};

pub fn history_routes() -> Router<AppState> {
    Router::new().route("/user/:id/history", get(get_history))
}

#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryRecord>>, ApiError> {
    require_user(&state.db, user_id).await?;

    let since = query.range.cutoff(OffsetDateTime::now_utc());
    let records = filter_since(repo::list_for_user(&state.db, user_id).await?, since);
    debug!(%user_id, range = ?query.range, count = records.len(), "history read");
    Ok(Json(records))
}
