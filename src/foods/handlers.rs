use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use super::{
    dto::{SearchQuery, TopQuery},
    repo,
};
use crate::{error::ApiError, nutrition::FoodProfile, state::AppState};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/foods/search", get(search_foods))
        .route("/foods/top", get(top_foods))
}

#[instrument(skip(state))]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<FoodProfile>>, ApiError> {
    let foods = repo::search_by_name(&state.db, &query.q).await?;
    debug!(count = foods.len(), "food search");
    Ok(Json(foods))
}

#[instrument(skip(state))]
pub async fn top_foods(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<Json<Vec<FoodProfile>>, ApiError> {
    let goal = query
        .goal
        .as_deref()
        .filter(|g| !g.is_empty())
        .ok_or_else(|| ApiError::BadRequest("goal is required".into()))?;

    let foods = repo::top_by_category(&state.db, goal).await?;
    debug!(count = foods.len(), "top foods");
    Ok(Json(foods))
}
