use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::micros::Micros;

/// Energy-contributing nutrients, per 100 units of a food.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Catalog entry for a food. All amounts are per 100 units of the
/// food's natural unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodProfile {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub macros: Macros,
    pub micros: Micros,
    pub category: Vec<String>,
    pub region: String,
}
