use serde::Deserialize;
use time::{Duration, OffsetDateTime};

use super::dto::HistoryRecord;

/// Coarse window over a user's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRange {
    Weekly,
    Monthly,
    /// Everything; also what any unrecognised value selects.
    #[default]
    #[serde(other)]
    All,
}

impl HistoryRange {
    /// Earliest record date (inclusive) that falls inside the range.
    pub fn cutoff(self, now: OffsetDateTime) -> OffsetDateTime {
        match self {
            HistoryRange::Weekly => now - Duration::days(7),
            HistoryRange::Monthly => now - Duration::days(30),
            HistoryRange::All => OffsetDateTime::UNIX_EPOCH,
        }
    }
}

/// Keeps the records dated on or after `cutoff`, in their original order.
pub fn filter_since(records: Vec<HistoryRecord>, cutoff: OffsetDateTime) -> Vec<HistoryRecord> {
    records.into_iter().filter(|r| r.date >= cutoff).collect()
}
