use serde::{Deserialize, Serialize};

use super::micros::Micros;

/// Daily requirement per micronutrient. Every value is strictly positive.
pub type RdaTable = Micros<f64>;

pub const RDA: RdaTable = Micros {
    sodium: 2000.0,
    iron: 17.0,
    magnesium: 340.0,
    potassium: 3500.0,
    calcium: 1000.0,
    vitamin_a: 900.0,
    vitamin_c: 40.0,
    vitamin_b1: 1.2,
    vitamin_b6: 2.0,
    vitamin_b12: 1.0,
};

/// Coverage of one micronutrient's daily requirement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RdaEntry {
    pub consumed: f64,
    pub required: f64,
    /// `consumed / required * 100`, not clamped.
    pub percentage: f64,
}

pub type RdaStatus = Micros<RdaEntry>;

pub fn rda_status(consumed: &Micros<f64>, rda: &RdaTable) -> RdaStatus {
    Micros::from_fn(|key| {
        let consumed = *consumed.get(key);
        let required = *rda.get(key);
        RdaEntry {
            consumed,
            required,
            percentage: consumed / required * 100.0,
        }
    })
}
