use tracing::debug;

use crate::error::Result;
use crate::models::{
    validate_batch, Nutrient, RawNutritionData, RecipeFormulation, RecipeIngredientLine,
};

/// Sum the nutrient contribution of every line for the whole batch.
///
/// Each line contributes `value * amount_g / serving_size_g`; unknown values
/// contribute zero.
pub fn recipe_totals(lines: &[RecipeIngredientLine]) -> Result<RawNutritionData> {
    let mut totals = RawNutritionData::default();

    for line in lines {
        line.validate()?;
        let ratio = line.serving_ratio();
        for nutrient in Nutrient::ALL {
            *totals.get_mut(nutrient) += line.ingredient.nutrient_or_zero(nutrient) * ratio;
        }
    }

    Ok(totals)
}

/// Aggregate ingredient lines into raw nutrition for one serving.
///
/// Batch totals are rescaled by `serving_size_g / recipe_yield_g`.
pub fn aggregate(
    lines: &[RecipeIngredientLine],
    recipe_yield_g: f64,
    serving_size_g: f64,
) -> Result<RawNutritionData> {
    validate_batch(recipe_yield_g, serving_size_g)?;

    let totals = recipe_totals(lines)?;
    let serving_ratio = serving_size_g / recipe_yield_g;

    debug!(
        lines = lines.len(),
        batch_calories = totals.calories,
        serving_ratio,
        "aggregated recipe totals"
    );

    Ok(totals.scale(serving_ratio))
}

/// Validate a formulation and aggregate it to one serving.
pub fn aggregate_formulation(formulation: &RecipeFormulation) -> Result<RawNutritionData> {
    formulation.validate()?;
    aggregate(
        &formulation.lines,
        formulation.recipe_yield_g,
        formulation.serving_size_g,
    )
}
