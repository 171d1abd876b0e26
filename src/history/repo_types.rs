use sqlx::{types::Json, FromRow};
use time::OffsetDateTime;

use super::dto::HistoryRecord;
use crate::nutrition::{MealEntry, NutrientTotals, RdaStatus};

#[derive(Debug, FromRow)]
pub struct HistoryRow {
    pub recorded_at: OffsetDateTime,
    pub meals: Json<Vec<MealEntry>>,
    pub totals: Json<NutrientTotals>,
    pub status: Json<RdaStatus>,
}

impl From<HistoryRow> for HistoryRecord {
    fn from(r: HistoryRow) -> Self {
        Self {
            date: r.recorded_at,
            meals: r.meals.0,
            totals: r.totals.0,
            status: r.status.0,
        }
    }
}
