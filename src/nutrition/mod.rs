//! Nutrient aggregation against the daily allowance table.
//!
//! Nothing in here touches the database: callers pass a food resolver and
//! an [`RdaTable`] in, and get a fresh [`MealAggregate`] back.

mod aggregate;
mod micros;
mod profile;
mod rda;

pub use aggregate::{aggregate, MealAggregate, MealEntry, NutrientTotals};
pub use micros::{MicroKey, Micros};
pub use profile::{FoodProfile, Macros};
pub use rda::{rda_status, RdaEntry, RdaStatus, RdaTable, RDA};
