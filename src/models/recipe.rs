use serde::{Deserialize, Serialize};

use super::IngredientNutritionRecord;
use crate::error::{LabelError, Result};

/// One ingredient used in a batch, with the grams of it used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientLine {
    pub ingredient: IngredientNutritionRecord,

    pub amount_g: f64,

    /// Input ordering only; the ingredient statement re-sorts by weight.
    #[serde(default)]
    pub sort_order: u32,
}

impl RecipeIngredientLine {
    pub fn new(ingredient: IngredientNutritionRecord, amount_g: f64, sort_order: u32) -> Self {
        Self {
            ingredient,
            amount_g,
            sort_order,
        }
    }

    /// Grams used relative to the ingredient's stated serving.
    #[inline]
    pub fn serving_ratio(&self) -> f64 {
        self.amount_g / self.ingredient.serving_size_g
    }

    pub fn validate(&self) -> Result<()> {
        let name = &self.ingredient.name;
        let serving = self.ingredient.serving_size_g;
        if !(serving.is_finite() && serving > 0.0) {
            return Err(LabelError::InvalidFormulation(format!(
                "ingredient '{}' has non-positive serving size {}",
                name, serving
            )));
        }
        if !(self.amount_g.is_finite() && self.amount_g >= 0.0) {
            return Err(LabelError::InvalidFormulation(format!(
                "ingredient '{}' has invalid amount {} g",
                name, self.amount_g
            )));
        }
        Ok(())
    }
}

/// A batch recipe: ingredient lines plus the declared yield and serving size.
///
/// The declared yield is trusted; it need not equal the sum of line amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFormulation {
    #[serde(default)]
    pub name: Option<String>,

    pub lines: Vec<RecipeIngredientLine>,

    pub recipe_yield_g: f64,

    pub serving_size_g: f64,
}

impl RecipeFormulation {
    pub fn new(lines: Vec<RecipeIngredientLine>, recipe_yield_g: f64, serving_size_g: f64) -> Self {
        Self {
            name: None,
            lines,
            recipe_yield_g,
            serving_size_g,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check every denominator and amount the calculation depends on.
    pub fn validate(&self) -> Result<()> {
        validate_batch(self.recipe_yield_g, self.serving_size_g)?;
        for line in &self.lines {
            line.validate()?;
        }
        Ok(())
    }

    /// Lines in input order (stable by `sort_order`).
    pub fn ordered_lines(&self) -> Vec<RecipeIngredientLine> {
        let mut lines = self.lines.clone();
        lines.sort_by_key(|l| l.sort_order);
        lines
    }

    /// How many servings one batch yields.
    pub fn servings_per_batch(&self) -> f64 {
        self.recipe_yield_g / self.serving_size_g
    }

    /// Sum of the line amounts, which may differ from the declared yield.
    pub fn total_ingredient_weight_g(&self) -> f64 {
        self.lines.iter().map(|l| l.amount_g).sum()
    }
}

/// Reject non-positive or non-finite yield and serving size.
pub fn validate_batch(recipe_yield_g: f64, serving_size_g: f64) -> Result<()> {
    if !(recipe_yield_g.is_finite() && recipe_yield_g > 0.0) {
        return Err(LabelError::InvalidFormulation(format!(
            "recipe yield must be positive, got {} g",
            recipe_yield_g
        )));
    }
    if !(serving_size_g.is_finite() && serving_size_g > 0.0) {
        return Err(LabelError::InvalidFormulation(format!(
            "serving size must be positive, got {} g",
            serving_size_g
        )));
    }
    Ok(())
}
