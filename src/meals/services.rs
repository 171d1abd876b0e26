use std::collections::{HashMap, HashSet};

use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::dto::{LogMealRequest, LogMealResponse};
use crate::{
    error::ApiError,
    foods::repo::FoodLookup,
    history::{self, HistoryRecord},
    nutrition::{aggregate, FoodProfile, MealAggregate, MealEntry, RDA},
    state::AppState,
    users::services::require_user,
};

/// Fetch the profile of every distinct food referenced by `entries`.
///
/// Foods that are missing, or whose lookup fails, are simply absent from
/// the result.
pub async fn resolve_foods(
    lookup: &dyn FoodLookup,
    entries: &[MealEntry],
) -> HashMap<Uuid, FoodProfile> {
    let mut found = HashMap::new();
    let mut tried = HashSet::with_capacity(entries.len());

    for entry in entries {
        if !tried.insert(entry.food_id) {
            continue;
        }

        match lookup.find_food(entry.food_id).await {
            Ok(Some(food)) => {
                found.insert(entry.food_id, food);
            }
            Ok(None) => debug!(food_id = %entry.food_id, "food not in catalog"),
            Err(e) => {
                warn!(food_id = %entry.food_id, error = %format!("{e:#}"), "food lookup failed")
            }
        }
    }
    found
}

/// Build the history entry for an aggregated meal. Totals that overflowed
/// are refused so no record is written that could not be read back.
pub fn history_record(
    meals: Vec<MealEntry>,
    outcome: &MealAggregate,
    date: OffsetDateTime,
) -> Result<HistoryRecord, ApiError> {
    if !outcome.is_finite() {
        return Err(ApiError::BadRequest(
            "meal quantities are too large".to_string(),
        ));
    }
    Ok(HistoryRecord {
        date,
        meals,
        totals: outcome.totals,
        status: outcome.status,
    })
}

/// Aggregate a meal, append it to the user's history and report the
/// totals. Nothing is returned as logged unless the append succeeds.
pub async fn log_meal(state: &AppState, req: LogMealRequest) -> Result<LogMealResponse, ApiError> {
    require_user(&state.db, req.user_id).await?;

    let foods = resolve_foods(&state.db, &req.foods).await;
    let outcome = aggregate(&req.foods, |id| foods.get(&id), &RDA);
    if !outcome.skipped.is_empty() {
        warn!(user_id = %req.user_id, skipped = ?outcome.skipped, "meal logged with unresolved foods");
    }

    let record = history_record(req.foods, &outcome, OffsetDateTime::now_utc())?;
    history::repo::append(&state.db, req.user_id, &record).await?;

    info!(
        user_id = %req.user_id,
        entries = record.meals.len(),
        calories = record.totals.calories,
        "meal logged"
    );
    Ok(LogMealResponse {
        message: "Meal added",
        totals: record.totals,
        status: record.status,
        skipped: outcome.skipped,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::nutrition::{Macros, Micros};

    struct FakeCatalog {
        foods: HashMap<Uuid, FoodProfile>,
        broken: Option<Uuid>,
        calls: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl FoodLookup for FakeCatalog {
        async fn find_food(&self, id: Uuid) -> anyhow::Result<Option<FoodProfile>> {
            self.calls.lock().unwrap().push(id);
            if self.broken == Some(id) {
                anyhow::bail!("connection reset");
            }
            Ok(self.foods.get(&id).cloned())
        }
    }

    fn samosa() -> FoodProfile {
        FoodProfile {
            id: Uuid::new_v4(),
            name: "Samosa".into(),
            calories: 300.0,
            macros: Macros {
                protein: 4.0,
                carbs: 30.0,
                fat: 15.0,
            },
            micros: Micros {
                sodium: 500.0,
                iron: 1.0,
                potassium: 150.0,
                ..Micros::default()
            },
            category: vec!["avoid".into()],
            region: "Pan-India".into(),
        }
    }

    #[tokio::test]
    async fn skips_missing_and_failing_lookups() {
        let samosa = samosa();
        let missing = Uuid::new_v4();
        let broken = Uuid::new_v4();
        let catalog = FakeCatalog {
            foods: HashMap::from([(samosa.id, samosa.clone())]),
            broken: Some(broken),
            calls: Mutex::new(vec![]),
        };
        let entries = [
            MealEntry {
                food_id: samosa.id,
                qty: 100.0,
            },
            MealEntry {
                food_id: missing,
                qty: 50.0,
            },
            MealEntry {
                food_id: broken,
                qty: 25.0,
            },
        ];

        let found = resolve_foods(&catalog, &entries).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found.get(&samosa.id), Some(&samosa));

        let outcome = aggregate(&entries, |id| found.get(&id), &RDA);
        assert_eq!(outcome.totals.calories, 300.0);
        assert_eq!(outcome.totals.micros.sodium, 500.0);
        assert_eq!(outcome.skipped, vec![missing, broken]);
    }

    #[tokio::test]
    async fn looks_up_each_food_once() {
        let samosa = samosa();
        let catalog = FakeCatalog {
            foods: HashMap::from([(samosa.id, samosa.clone())]),
            broken: None,
            calls: Mutex::new(vec![]),
        };
        let entry = MealEntry {
            food_id: samosa.id,
            qty: 50.0,
        };

        let found = resolve_foods(&catalog, &[entry, entry, entry]).await;
        assert_eq!(catalog.calls.lock().unwrap().len(), 1);

        let outcome = aggregate(&[entry, entry, entry], |id| found.get(&id), &RDA);
        assert_eq!(outcome.totals.calories, 450.0);
    }

    #[tokio::test]
    async fn huge_quantity_never_becomes_a_record() {
        let samosa = samosa();
        let catalog = FakeCatalog {
            foods: HashMap::from([(samosa.id, samosa.clone())]),
            broken: None,
            calls: Mutex::new(vec![]),
        };
        let meals = vec![MealEntry {
            food_id: samosa.id,
            qty: 1e308,
        }];

        let found = resolve_foods(&catalog, &meals).await;
        let outcome = aggregate(&meals, |id| found.get(&id), &RDA);

        let err = history_record(meals, &outcome, OffsetDateTime::now_utc()).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn ordinary_meal_becomes_a_record() {
        let samosa = samosa();
        let meals = vec![MealEntry {
            food_id: samosa.id,
            qty: 150.0,
        }];
        let outcome = aggregate(&meals, |_| Some(&samosa), &RDA);
        let now = OffsetDateTime::now_utc();

        let record = history_record(meals.clone(), &outcome, now).unwrap();
        assert_eq!(record.date, now);
        assert_eq!(record.meals, meals);
        assert_eq!(record.totals.calories, 450.0);
        assert_eq!(record.status, outcome.status);

        let stored = serde_json::to_string(&record).unwrap();
        let read_back: HistoryRecord = serde_json::from_str(&stored).unwrap();
        assert_eq!(read_back.totals, record.totals);
    }
}
