use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;
pub mod services;

pub use repo_types::User;

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
