use std::fmt;

use serde::{Deserialize, Serialize};

/// The fifteen nutrients carried on a Nutrition Facts panel, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    Calories,
    TotalFat,
    SaturatedFat,
    TransFat,
    Cholesterol,
    Sodium,
    TotalCarbohydrate,
    DietaryFiber,
    TotalSugars,
    AddedSugars,
    Protein,
    VitaminD,
    Calcium,
    Iron,
    Potassium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 15] = [
        Nutrient::Calories,
        Nutrient::TotalFat,
        Nutrient::SaturatedFat,
        Nutrient::TransFat,
        Nutrient::Cholesterol,
        Nutrient::Sodium,
        Nutrient::TotalCarbohydrate,
        Nutrient::DietaryFiber,
        Nutrient::TotalSugars,
        Nutrient::AddedSugars,
        Nutrient::Protein,
        Nutrient::VitaminD,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Potassium,
    ];

    /// Wire key, matching the serialized field names.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::TotalFat => "totalFat",
            Nutrient::SaturatedFat => "saturatedFat",
            Nutrient::TransFat => "transFat",
            Nutrient::Cholesterol => "cholesterol",
            Nutrient::Sodium => "sodium",
            Nutrient::TotalCarbohydrate => "totalCarbohydrate",
            Nutrient::DietaryFiber => "dietaryFiber",
            Nutrient::TotalSugars => "totalSugars",
            Nutrient::AddedSugars => "addedSugars",
            Nutrient::Protein => "protein",
            Nutrient::VitaminD => "vitaminD",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::Potassium => "potassium",
        }
    }

    /// Look up a nutrient by its wire key.
    pub fn from_key(key: &str) -> Option<Nutrient> {
        Nutrient::ALL.into_iter().find(|n| n.key() == key)
    }

    /// Human-readable name as printed on the panel.
    pub fn display_name(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::TotalFat => "Total Fat",
            Nutrient::SaturatedFat => "Saturated Fat",
            Nutrient::TransFat => "Trans Fat",
            Nutrient::Cholesterol => "Cholesterol",
            Nutrient::Sodium => "Sodium",
            Nutrient::TotalCarbohydrate => "Total Carbohydrate",
            Nutrient::DietaryFiber => "Dietary Fiber",
            Nutrient::TotalSugars => "Total Sugars",
            Nutrient::AddedSugars => "Added Sugars",
            Nutrient::Protein => "Protein",
            Nutrient::VitaminD => "Vitamin D",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
            Nutrient::Potassium => "Potassium",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            Nutrient::Cholesterol
            | Nutrient::Sodium
            | Nutrient::Calcium
            | Nutrient::Iron
            | Nutrient::Potassium => "mg",
            Nutrient::VitaminD => "mcg",
            _ => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One value of type `T` per nutrient.
///
/// Ingredient records use `Option<f64>` (unknown values allowed), raw
/// per-serving data uses `f64`, and the rounded panel uses [`DisplayValue`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientValues<T> {
    pub calories: T,
    pub total_fat: T,
    pub saturated_fat: T,
    pub trans_fat: T,
    pub cholesterol: T,
    pub sodium: T,
    pub total_carbohydrate: T,
    pub dietary_fiber: T,
    pub total_sugars: T,
    pub added_sugars: T,
    pub protein: T,
    pub vitamin_d: T,
    pub calcium: T,
    pub iron: T,
    pub potassium: T,
}

impl<T> NutrientValues<T> {
    /// Build a value set by calling `f` once per nutrient.
    pub fn from_fn(mut f: impl FnMut(Nutrient) -> T) -> Self {
        Self {
            calories: f(Nutrient::Calories),
            total_fat: f(Nutrient::TotalFat),
            saturated_fat: f(Nutrient::SaturatedFat),
            trans_fat: f(Nutrient::TransFat),
            cholesterol: f(Nutrient::Cholesterol),
            sodium: f(Nutrient::Sodium),
            total_carbohydrate: f(Nutrient::TotalCarbohydrate),
            dietary_fiber: f(Nutrient::DietaryFiber),
            total_sugars: f(Nutrient::TotalSugars),
            added_sugars: f(Nutrient::AddedSugars),
            protein: f(Nutrient::Protein),
            vitamin_d: f(Nutrient::VitaminD),
            calcium: f(Nutrient::Calcium),
            iron: f(Nutrient::Iron),
            potassium: f(Nutrient::Potassium),
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> &T {
        match nutrient {
            Nutrient::Calories => &self.calories,
            Nutrient::TotalFat => &self.total_fat,
            Nutrient::SaturatedFat => &self.saturated_fat,
            Nutrient::TransFat => &self.trans_fat,
            Nutrient::Cholesterol => &self.cholesterol,
            Nutrient::Sodium => &self.sodium,
            Nutrient::TotalCarbohydrate => &self.total_carbohydrate,
            Nutrient::DietaryFiber => &self.dietary_fiber,
            Nutrient::TotalSugars => &self.total_sugars,
            Nutrient::AddedSugars => &self.added_sugars,
            Nutrient::Protein => &self.protein,
            Nutrient::VitaminD => &self.vitamin_d,
            Nutrient::Calcium => &self.calcium,
            Nutrient::Iron => &self.iron,
            Nutrient::Potassium => &self.potassium,
        }
    }

    pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut T {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::TotalFat => &mut self.total_fat,
            Nutrient::SaturatedFat => &mut self.saturated_fat,
            Nutrient::TransFat => &mut self.trans_fat,
            Nutrient::Cholesterol => &mut self.cholesterol,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::TotalCarbohydrate => &mut self.total_carbohydrate,
            Nutrient::DietaryFiber => &mut self.dietary_fiber,
            Nutrient::TotalSugars => &mut self.total_sugars,
            Nutrient::AddedSugars => &mut self.added_sugars,
            Nutrient::Protein => &mut self.protein,
            Nutrient::VitaminD => &mut self.vitamin_d,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Iron => &mut self.iron,
            Nutrient::Potassium => &mut self.potassium,
        }
    }

    /// Apply `f` to every nutrient, producing a new value set.
    pub fn map<U>(&self, mut f: impl FnMut(Nutrient, &T) -> U) -> NutrientValues<U> {
        NutrientValues::from_fn(|n| f(n, self.get(n)))
    }

    /// Iterate `(nutrient, value)` pairs in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, &T)> {
        Nutrient::ALL.into_iter().map(move |n| (n, self.get(n)))
    }
}

impl NutrientValues<f64> {
    /// Multiply every nutrient by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        self.map(|_, v| v * factor)
    }
}

/// Unrounded nutrient quantities for one serving.
pub type RawNutritionData = NutrientValues<f64>;

/// Panel-ready values after FDA rounding.
pub type RoundedNutritionData = NutrientValues<DisplayValue>;

/// A rounded nutrient as it appears on the label.
///
/// Some ranges must be declared with a regulatory phrase instead of a number,
/// so consumers have to handle both arms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayValue {
    Numeric { value: f64 },
    Threshold { label: String },
}

impl DisplayValue {
    pub fn numeric(value: f64) -> Self {
        DisplayValue::Numeric { value }
    }

    pub fn threshold(label: impl Into<String>) -> Self {
        DisplayValue::Threshold {
            label: label.into(),
        }
    }

    /// The numeric value, if this is not a threshold phrase.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DisplayValue::Numeric { value } => Some(*value),
            DisplayValue::Threshold { .. } => None,
        }
    }

    /// Amount used for % Daily Value: threshold phrases count as zero.
    pub fn amount_for_daily_value(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }

    pub fn is_threshold(&self) -> bool {
        matches!(self, DisplayValue::Threshold { .. })
    }
}

impl Default for DisplayValue {
    fn default() -> Self {
        DisplayValue::numeric(0.0)
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Numeric { value } => write!(f, "{}", value),
            DisplayValue::Threshold { label } => f.write_str(label),
        }
    }
}
