//! Nutrition tracking service: a food catalog, meal logging with nutrient
//! totals against daily allowances, and per-user meal history.

pub mod app;
pub mod config;
pub mod error;
pub mod foods;
pub mod history;
pub mod meals;
pub mod missing;
pub mod nutrition;
pub mod seed;
pub mod state;
pub mod telemetry;
pub mod users;
