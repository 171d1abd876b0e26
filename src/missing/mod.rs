use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
mod log;

pub use dto::{MessageResponse, MissingFoodReport};
pub use log::{CsvMissingFoodLog, MissingFoodLog};

pub fn router() -> Router<AppState> {
    handlers::missing_routes()
}
