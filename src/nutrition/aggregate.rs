use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    micros::{MicroKey, Micros},
    profile::FoodProfile,
    rda::{rda_status, RdaStatus, RdaTable},
};

/// A food eaten in some quantity of its natural unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub food_id: Uuid,
    pub qty: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub micros: Micros,
}

impl NutrientTotals {
    fn add_scaled(&mut self, food: &FoodProfile, factor: f64) {
        self.calories += factor * food.calories;
        self.protein += factor * food.macros.protein;
        self.carbs += factor * food.macros.carbs;
        self.fat += factor * food.macros.fat;
        for key in MicroKey::ALL {
            *self.micros.get_mut(key) += factor * *food.micros.get(key);
        }
    }

    pub fn is_finite(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .into_iter()
            .chain(self.micros.iter().map(|(_, v)| *v))
            .all(f64::is_finite)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealAggregate {
    pub totals: NutrientTotals,
    pub status: RdaStatus,
    /// Food ids that did not resolve and were left out of the totals.
    pub skipped: Vec<Uuid>,
}

impl MealAggregate {
    /// False when a quantity overflowed any total or percentage.
    pub fn is_finite(&self) -> bool {
        self.totals.is_finite()
            && self
                .status
                .iter()
                .all(|(_, e)| e.consumed.is_finite() && e.percentage.is_finite())
    }
}

/// Sums the nutrients of `entries`, scaling each food's per-100 values by
/// `qty / 100`, and rates the micronutrient totals against `rda`.
///
/// Entries whose food does not resolve are skipped and reported in
/// [`MealAggregate::skipped`]; they never fail the aggregation.
pub fn aggregate<'a, F>(entries: &[MealEntry], resolve: F, rda: &RdaTable) -> MealAggregate
where
    F: Fn(Uuid) -> Option<&'a FoodProfile>,
{
    let mut totals = NutrientTotals::default();
    let mut skipped = Vec::new();

    for entry in entries {
        match resolve(entry.food_id) {
            Some(food) => totals.add_scaled(food, entry.qty / 100.0),
            None => skipped.push(entry.food_id),
        }
    }

    let status = rda_status(&totals.micros, rda);
    MealAggregate {
        totals,
        status,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::nutrition::{Macros, RDA};

    fn food(name: &str, calories: f64, macros: Macros, micros: Micros) -> FoodProfile {
        FoodProfile {
            id: Uuid::new_v4(),
            name: name.into(),
            calories,
            macros,
            micros,
            category: vec![],
            region: "Pan-India".into(),
        }
    }

    fn chicken() -> FoodProfile {
        food(
            "Chicken Grilled",
            165.0,
            Macros {
                protein: 31.0,
                carbs: 0.0,
                fat: 3.5,
            },
            Micros {
                iron: 1.0,
                sodium: 70.0,
                ..Micros::default()
            },
        )
    }

    fn catalog(foods: &[FoodProfile]) -> HashMap<Uuid, FoodProfile> {
        foods.iter().map(|f| (f.id, f.clone())).collect()
    }

    fn run(entries: &[MealEntry], foods: &HashMap<Uuid, FoodProfile>) -> MealAggregate {
        aggregate(entries, |id| foods.get(&id), &RDA)
    }

    #[test]
    fn empty_meal_is_all_zero() {
        let result = run(&[], &HashMap::new());
        assert_eq!(result.totals, NutrientTotals::default());
        for (_, entry) in result.status.iter() {
            assert_eq!(entry.consumed, 0.0);
            assert_eq!(entry.percentage, 0.0);
        }
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn chicken_at_200_grams() {
        let chicken = chicken();
        let foods = catalog(&[chicken.clone()]);
        let result = run(
            &[MealEntry {
                food_id: chicken.id,
                qty: 200.0,
            }],
            &foods,
        );

        let t = result.totals;
        assert_eq!(t.calories, 330.0);
        assert_eq!(t.protein, 62.0);
        assert_eq!(t.carbs, 0.0);
        assert_eq!(t.fat, 7.0);
        assert_eq!(t.micros.iron, 2.0);
        assert_eq!(t.micros.sodium, 140.0);
        for key in MicroKey::ALL {
            if !matches!(key, MicroKey::Iron | MicroKey::Sodium) {
                assert_eq!(*t.micros.get(key), 0.0, "{key} should be zero");
            }
        }
        assert_eq!(result.status.sodium.percentage, 140.0 / 2000.0 * 100.0);
    }

    #[test]
    fn calories_of_two_entries_add_up() {
        let a = food("A", 100.0, Macros::default(), Micros::default());
        let b = food("B", 200.0, Macros::default(), Micros::default());
        let foods = catalog(&[a.clone(), b.clone()]);
        let result = run(
            &[
                MealEntry {
                    food_id: a.id,
                    qty: 50.0,
                },
                MealEntry {
                    food_id: b.id,
                    qty: 100.0,
                },
            ],
            &foods,
        );
        assert_eq!(result.totals.calories, 250.0);
    }

    #[test]
    fn unresolved_entry_is_same_as_omitted() {
        let chicken = chicken();
        let foods = catalog(&[chicken.clone()]);
        let known = MealEntry {
            food_id: chicken.id,
            qty: 150.0,
        };
        let unknown = MealEntry {
            food_id: Uuid::new_v4(),
            qty: 80.0,
        };

        let with_missing = run(&[unknown, known], &foods);
        let without = run(&[known], &foods);

        assert_eq!(with_missing.totals, without.totals);
        assert_eq!(with_missing.status, without.status);
        assert_eq!(with_missing.skipped, vec![unknown.food_id]);
    }

    #[test]
    fn single_entry_scales_every_field() {
        let paneer = food(
            "Paneer Tikka",
            300.0,
            Macros {
                protein: 18.0,
                carbs: 5.0,
                fat: 20.0,
            },
            Micros {
                sodium: 400.0,
                calcium: 200.0,
                magnesium: 20.0,
                potassium: 100.0,
                iron: 0.5,
                ..Micros::default()
            },
        );
        let foods = catalog(&[paneer.clone()]);
        let qty = 37.0;
        let factor = qty / 100.0;
        let result = run(
            &[MealEntry {
                food_id: paneer.id,
                qty,
            }],
            &foods,
        );

        assert_eq!(result.totals.calories, factor * paneer.calories);
        assert_eq!(result.totals.protein, factor * paneer.macros.protein);
        assert_eq!(result.totals.carbs, factor * paneer.macros.carbs);
        assert_eq!(result.totals.fat, factor * paneer.macros.fat);
        for key in MicroKey::ALL {
            assert_eq!(
                *result.totals.micros.get(key),
                factor * *paneer.micros.get(key)
            );
        }
    }

    #[test]
    fn overflowing_quantity_is_not_finite() {
        let chicken = chicken();
        let foods = catalog(&[chicken.clone()]);
        let normal = run(
            &[MealEntry {
                food_id: chicken.id,
                qty: 250.0,
            }],
            &foods,
        );
        assert!(normal.is_finite());

        let huge = run(
            &[MealEntry {
                food_id: chicken.id,
                qty: f64::MAX,
            }],
            &foods,
        );
        assert!(huge.totals.calories.is_infinite());
        assert!(!huge.totals.is_finite());
        assert!(!huge.is_finite());
    }

    #[test]
    fn aggregation_is_additive() {
        let chicken = chicken();
        let pasta = food(
            "Pasta Whole Wheat",
            131.0,
            Macros {
                protein: 5.0,
                carbs: 25.0,
                fat: 1.0,
            },
            Micros {
                magnesium: 40.0,
                iron: 1.5,
                potassium: 100.0,
                vitamin_b1: 0.2,
                ..Micros::default()
            },
        );
        let foods = catalog(&[chicken.clone(), pasta.clone()]);
        let a = MealEntry {
            food_id: chicken.id,
            qty: 120.0,
        };
        let b = MealEntry {
            food_id: pasta.id,
            qty: 250.0,
        };

        let both = run(&[a, b], &foods).totals;
        let only_a = run(&[a], &foods).totals;
        let only_b = run(&[b], &foods).totals;

        assert_eq!(both.calories, only_a.calories + only_b.calories);
        assert_eq!(both.protein, only_a.protein + only_b.protein);
        assert_eq!(both.carbs, only_a.carbs + only_b.carbs);
        assert_eq!(both.fat, only_a.fat + only_b.fat);
        for key in MicroKey::ALL {
            assert_eq!(
                *both.micros.get(key),
                only_a.micros.get(key) + only_b.micros.get(key)
            );
        }
    }

    #[test]
    fn percentages_above_one_hundred_are_reported() {
        let salty = food(
            "Samosa",
            300.0,
            Macros::default(),
            Micros {
                sodium: 500.0,
                ..Micros::default()
            },
        );
        let foods = catalog(&[salty.clone()]);
        let result = run(
            &[MealEntry {
                food_id: salty.id,
                qty: 1000.0,
            }],
            &foods,
        );
        assert_eq!(result.status.sodium.consumed, 5000.0);
        assert_eq!(result.status.sodium.percentage, 250.0);
    }

    #[test]
    fn totals_serialize_with_micros_block() {
        let json = serde_json::to_value(NutrientTotals::default()).unwrap();
        assert_eq!(json["calories"], 0.0);
        assert_eq!(json["micros"]["vitaminB12"], 0.0);

        let entry: MealEntry =
            serde_json::from_str(&format!(r#"{{"foodId":"{}","qty":50}}"#, Uuid::nil())).unwrap();
        assert_eq!(entry.qty, 50.0);
    }
}
