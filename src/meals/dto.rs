use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::nutrition::{MealEntry, NutrientTotals, RdaStatus};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMealRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub foods: Vec<MealEntry>,
}

impl LogMealRequest {
    /// Every quantity must be a finite, positive amount.
    pub fn validate(&self) -> Result<(), String> {
        match self
            .foods
            .iter()
            .find(|e| !e.qty.is_finite() || e.qty <= 0.0)
        {
            Some(bad) => Err(format!("qty for food {} must be positive", bad.food_id)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogMealResponse {
    pub message: &'static str,
    pub totals: NutrientTotals,
    pub status: RdaStatus,
    /// Foods that could not be resolved and were left out.
    pub skipped: Vec<Uuid>,
}
