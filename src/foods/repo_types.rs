use sqlx::{types::Json, FromRow};
use uuid::Uuid;

use crate::nutrition::{FoodProfile, Macros, Micros};

/// Row of the `foods` table.
#[derive(Debug, FromRow)]
pub struct FoodRow {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub micros: Json<Micros>,
    pub category: Vec<String>,
    pub region: String,
}

impl From<FoodRow> for FoodProfile {
    fn from(r: FoodRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            calories: r.calories,
            macros: Macros {
                protein: r.protein,
                carbs: r.carbs,
                fat: r.fat,
            },
            micros: r.micros.0,
            category: r.category,
            region: r.region,
        }
    }
}
