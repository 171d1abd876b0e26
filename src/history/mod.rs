use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
mod range;
pub mod repo;
mod repo_types;

pub use dto::HistoryRecord;
pub use range::HistoryRange;

pub fn router() -> Router<AppState> {
    handlers::history_routes()
}
