use serde::{Deserialize, Deserializer, Serialize};

/// One of the ten micronutrients tracked against a daily allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MicroKey {
    Sodium,
    Iron,
    Magnesium,
    Potassium,
    Calcium,
    VitaminA,
    VitaminC,
    VitaminB1,
    VitaminB6,
    VitaminB12,
}

impl MicroKey {
    pub const ALL: [MicroKey; 10] = [
        MicroKey::Sodium,
        MicroKey::Iron,
        MicroKey::Magnesium,
        MicroKey::Potassium,
        MicroKey::Calcium,
        MicroKey::VitaminA,
        MicroKey::VitaminC,
        MicroKey::VitaminB1,
        MicroKey::VitaminB6,
        MicroKey::VitaminB12,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MicroKey::Sodium => "sodium",
            MicroKey::Iron => "iron",
            MicroKey::Magnesium => "magnesium",
            MicroKey::Potassium => "potassium",
            MicroKey::Calcium => "calcium",
            MicroKey::VitaminA => "vitaminA",
            MicroKey::VitaminC => "vitaminC",
            MicroKey::VitaminB1 => "vitaminB1",
            MicroKey::VitaminB6 => "vitaminB6",
            MicroKey::VitaminB12 => "vitaminB12",
        }
    }
}

impl std::fmt::Display for MicroKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value for every tracked micronutrient.
///
/// All ten fields are always present. Keys missing from stored JSON
/// and keys stored as `null` both deserialize to `T::default()`, so an
/// absent micro in a food profile reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    default,
    bound(deserialize = "T: Deserialize<'de> + Default")
)]
pub struct Micros<T = f64> {
    #[serde(deserialize_with = "null_as_default")]
    pub sodium: T,
    #[serde(deserialize_with = "null_as_default")]
    pub iron: T,
    #[serde(deserialize_with = "null_as_default")]
    pub magnesium: T,
    #[serde(deserialize_with = "null_as_default")]
    pub potassium: T,
    #[serde(deserialize_with = "null_as_default")]
    pub calcium: T,
    #[serde(deserialize_with = "null_as_default")]
    pub vitamin_a: T,
    #[serde(deserialize_with = "null_as_default")]
    pub vitamin_c: T,
    #[serde(deserialize_with = "null_as_default")]
    pub vitamin_b1: T,
    #[serde(deserialize_with = "null_as_default")]
    pub vitamin_b6: T,
    #[serde(deserialize_with = "null_as_default")]
    pub vitamin_b12: T,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> Micros<T> {
    /// Builds a record by evaluating `f` once per key, in `MicroKey::ALL` order.
    pub fn from_fn(mut f: impl FnMut(MicroKey) -> T) -> Self {
        Self {
            sodium: f(MicroKey::Sodium),
            iron: f(MicroKey::Iron),
            magnesium: f(MicroKey::Magnesium),
            potassium: f(MicroKey::Potassium),
            calcium: f(MicroKey::Calcium),
            vitamin_a: f(MicroKey::VitaminA),
            vitamin_c: f(MicroKey::VitaminC),
            vitamin_b1: f(MicroKey::VitaminB1),
            vitamin_b6: f(MicroKey::VitaminB6),
            vitamin_b12: f(MicroKey::VitaminB12),
        }
    }

    pub fn get(&self, key: MicroKey) -> &T {
        match key {
            MicroKey::Sodium => &self.sodium,
            MicroKey::Iron => &self.iron,
            MicroKey::Magnesium => &self.magnesium,
            MicroKey::Potassium => &self.potassium,
            MicroKey::Calcium => &self.calcium,
            MicroKey::VitaminA => &self.vitamin_a,
            MicroKey::VitaminC => &self.vitamin_c,
            MicroKey::VitaminB1 => &self.vitamin_b1,
            MicroKey::VitaminB6 => &self.vitamin_b6,
            MicroKey::VitaminB12 => &self.vitamin_b12,
        }
    }

    pub fn get_mut(&mut self, key: MicroKey) -> &mut T {
        match key {
            MicroKey::Sodium => &mut self.sodium,
            MicroKey::Iron => &mut self.iron,
            MicroKey::Magnesium => &mut self.magnesium,
            MicroKey::Potassium => &mut self.potassium,
            MicroKey::Calcium => &mut self.calcium,
            MicroKey::VitaminA => &mut self.vitamin_a,
            MicroKey::VitaminC => &mut self.vitamin_c,
            MicroKey::VitaminB1 => &mut self.vitamin_b1,
            MicroKey::VitaminB6 => &mut self.vitamin_b6,
            MicroKey::VitaminB12 => &mut self.vitamin_b12,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MicroKey, &T)> + '_ {
        MicroKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
