use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::range::HistoryRange;
use crate::nutrition::{MealEntry, NutrientTotals, RdaStatus};

/// One logged meal in a user's history. Never changed once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub meals: Vec<MealEntry>,
    pub totals: NutrientTotals,
    pub status: RdaStatus,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub range: HistoryRange,
}
