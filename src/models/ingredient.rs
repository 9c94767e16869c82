use serde::{Deserialize, Serialize};

use super::{AllergenFlags, Nutrient, NutrientValues};

/// One ingredient's nutrient profile, stated per `serving_size_g` grams.
///
/// A `None` nutrient means the value is unknown; aggregation treats it as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientNutritionRecord {
    pub name: String,

    pub serving_size_g: f64,

    #[serde(flatten)]
    pub nutrients: NutrientValues<Option<f64>>,

    #[serde(flatten)]
    pub allergens: AllergenFlags,
}

impl IngredientNutritionRecord {
    /// A record with every nutrient unknown and no allergens.
    pub fn new(name: impl Into<String>, serving_size_g: f64) -> Self {
        Self {
            name: name.into(),
            serving_size_g,
            nutrients: NutrientValues::default(),
            allergens: AllergenFlags::none(),
        }
    }

    /// Set one nutrient value, builder style.
    pub fn with_nutrient(mut self, nutrient: Nutrient, value: f64) -> Self {
        *self.nutrients.get_mut(nutrient) = Some(value);
        self
    }

    pub fn with_allergens(mut self, allergens: AllergenFlags) -> Self {
        self.allergens = allergens;
        self
    }

    /// Nutrient value with unknowns read as zero.
    #[inline]
    pub fn nutrient_or_zero(&self, nutrient: Nutrient) -> f64 {
        self.nutrients.get(nutrient).unwrap_or(0.0)
    }

    /// Count of nutrients with no stated value.
    pub fn unknown_count(&self) -> usize {
        self.nutrients.iter().filter(|(_, v)| v.is_none()).count()
    }
}
