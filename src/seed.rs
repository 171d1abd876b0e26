//! Built-in food catalog and the loader that writes it.

use anyhow::Context;
use sqlx::PgPool;
use tracing::info;

use crate::foods::repo::{self, NewFood};
use crate::nutrition::{Macros, Micros};

fn food(
    name: &str,
    calories: f64,
    macros: Macros,
    micros: Micros,
    category: &[&str],
    region: &str,
) -> NewFood {
    NewFood {
        name: name.into(),
        calories,
        macros,
        micros,
        category: category.iter().map(|c| c.to_string()).collect(),
        region: region.into(),
    }
}

pub fn default_foods() -> Vec<NewFood> {
    vec![
        food(
            "Chicken Grilled",
            165.0,
            Macros { protein: 31.0, carbs: 0.0, fat: 3.5 },
            Micros {
                sodium: 70.0,
                iron: 1.0,
                magnesium: 25.0,
                potassium: 250.0,
                calcium: 15.0,
                vitamin_b6: 0.5,
                vitamin_b12: 0.3,
                ..Micros::default()
            },
            &["high-protein", "non-veg"],
            "Pan-India",
        ),
        food(
            "Paneer Tikka",
            300.0,
            Macros { protein: 18.0, carbs: 5.0, fat: 20.0 },
            Micros {
                sodium: 400.0,
                calcium: 200.0,
                magnesium: 20.0,
                potassium: 100.0,
                iron: 0.5,
                ..Micros::default()
            },
            &["high-protein", "veg"],
            "North India",
        ),
        food(
            "Pasta Whole Wheat",
            131.0,
            Macros { protein: 5.0, carbs: 25.0, fat: 1.0 },
            Micros {
                magnesium: 40.0,
                iron: 1.5,
                potassium: 100.0,
                vitamin_b1: 0.2,
                ..Micros::default()
            },
            &["high-fiber"],
            "Pan-India",
        ),
        food(
            "Samosa",
            300.0,
            Macros { protein: 4.0, carbs: 30.0, fat: 15.0 },
            Micros {
                sodium: 500.0,
                iron: 1.0,
                potassium: 150.0,
                ..Micros::default()
            },
            &["avoid"],
            "Pan-India",
        ),
    ]
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub removed: u64,
    pub upserted: usize,
}

/// Write `foods` into the catalog in one transaction. Foods are matched
/// by name, so running this twice leaves the same catalog. With `reset`
/// the existing catalog is emptied first.
pub async fn load_foods(db: &PgPool, foods: &[NewFood], reset: bool) -> anyhow::Result<SeedReport> {
    let mut tx = db.begin().await.context("begin tx")?;
    let mut report = SeedReport::default();

    if reset {
        report.removed = repo::delete_all_tx(&mut tx).await?;
        info!(removed = report.removed, "catalog cleared");
    }
    for f in foods {
        let id = repo::upsert_tx(&mut tx, f).await?;
        info!(%id, name = %f.name, "food loaded");
        report.upserted += 1;
    }

    tx.commit().await.context("commit tx")?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_names_are_unique() {
        let foods = default_foods();
        let names: HashSet<_> = foods.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names.len(), foods.len());
    }

    #[test]
    fn chicken_matches_reference_values() {
        let chicken = default_foods()
            .into_iter()
            .find(|f| f.name == "Chicken Grilled")
            .unwrap();
        assert_eq!(chicken.calories, 165.0);
        assert_eq!(chicken.macros.fat, 3.5);
        assert_eq!(chicken.micros.sodium, 70.0);
        assert_eq!(chicken.micros.vitamin_c, 0.0);
        assert_eq!(chicken.category, vec!["high-protein", "non-veg"]);
    }
}
