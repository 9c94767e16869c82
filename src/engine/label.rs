use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::aggregation::aggregate;
use crate::engine::allergens::{aggregate_allergens, undeclared_allergens};
use crate::engine::daily_value::DailyValueCalculator;
use crate::engine::rounding::round_all;
use crate::engine::statements::{allergen_statement, ingredient_statement};
use crate::error::Result;
use crate::models::{
    AllergenSummary, Nutrient, RawNutritionData, RecipeFormulation, RoundedNutritionData,
};

/// Everything computed for one formulation's Nutrition Facts panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLabel {
    pub raw: RawNutritionData,
    pub rounded: RoundedNutritionData,
    /// Percent Daily Value per nutrient that has a reference amount.
    pub daily_values: BTreeMap<Nutrient, u32>,
    pub allergens: AllergenSummary,
    pub ingredient_statement: String,
    pub allergen_statement: Option<String>,
    pub servings_per_batch: f64,
}

impl NutritionLabel {
    pub fn daily_value(&self, nutrient: Nutrient) -> Option<u32> {
        self.daily_values.get(&nutrient).copied()
    }
}

/// Percent Daily Values computed from the rounded panel.
///
/// Threshold phrases such as "less than 5" count as zero.
pub fn daily_values_from_rounded<D>(
    rounded: &RoundedNutritionData,
    calculator: &D,
) -> BTreeMap<Nutrient, u32>
where
    D: DailyValueCalculator + ?Sized,
{
    rounded
        .iter()
        .filter_map(|(nutrient, display)| {
            calculator
                .daily_value_percent(nutrient, display.amount_for_daily_value())
                .map(|percent| (nutrient, percent))
        })
        .collect()
}

/// Run the full labeling pipeline for a formulation.
///
/// Aggregates to one serving, rounds for display, derives % DV from the
/// rounded values, then builds the allergen summary and both statements.
pub fn calculate_label<D>(
    formulation: &RecipeFormulation,
    calculator: &D,
) -> Result<NutritionLabel>
where
    D: DailyValueCalculator + ?Sized,
{
    formulation.validate()?;

    let lines = formulation.ordered_lines();
    let raw = aggregate(&lines, formulation.recipe_yield_g, formulation.serving_size_g)?;
    let rounded = round_all(&raw);
    let daily_values = daily_values_from_rounded(&rounded, calculator);

    let allergens = aggregate_allergens(&lines);
    for line in &lines {
        let missing = undeclared_allergens(line);
        if !missing.is_empty() {
            warn!(
                ingredient = %line.ingredient.name,
                allergens = ?missing,
                "ingredient name suggests allergens it does not declare"
            );
        }
    }

    let label = NutritionLabel {
        ingredient_statement: ingredient_statement(&lines),
        allergen_statement: allergen_statement(&allergens),
        servings_per_batch: formulation.servings_per_batch(),
        raw,
        rounded,
        daily_values,
        allergens,
    };

    debug!(
        recipe = formulation.name.as_deref().unwrap_or("<unnamed>"),
        calories = %label.rounded.calories,
        declared_yield_g = formulation.recipe_yield_g,
        ingredient_weight_g = formulation.total_ingredient_weight_g(),
        "calculated nutrition label"
    );

    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::daily_value::ReferenceDailyValues;
    use crate::models::{DisplayValue, IngredientNutritionRecord, RecipeIngredientLine};

    struct FixedPercent(u32);

    impl DailyValueCalculator for FixedPercent {
        fn daily_value_percent(&self, nutrient: Nutrient, amount: f64) -> Option<u32> {
            match nutrient {
                Nutrient::Cholesterol => Some(amount as u32),
                Nutrient::Sodium => Some(self.0),
                _ => None,
            }
        }
    }

    #[test]
    fn test_threshold_value_feeds_zero_into_daily_value() {
        let mut rounded = RoundedNutritionData::default();
        rounded.cholesterol = DisplayValue::threshold("less than 5");
        let dv = daily_values_from_rounded(&rounded, &FixedPercent(7));
        assert_eq!(dv.get(&Nutrient::Cholesterol), Some(&0));
        assert_eq!(dv.get(&Nutrient::Sodium), Some(&7));
        assert_eq!(dv.get(&Nutrient::Calories), None);
    }

    #[test]
    fn test_daily_value_uses_rounded_not_raw() {
        // 0.4 g fat declares as 0 g, so 0% even though 0.4 / 78 would round to 1%.
        let record = IngredientNutritionRecord::new("Oil Blend", 100.0)
            .with_nutrient(Nutrient::TotalFat, 0.4);
        let lines = vec![RecipeIngredientLine::new(record, 100.0, 0)];
        let formulation = RecipeFormulation::new(lines, 100.0, 100.0);

        let label = calculate_label(&formulation, &ReferenceDailyValues::default()).unwrap();
        assert_eq!(label.rounded.total_fat, DisplayValue::numeric(0.0));
        assert_eq!(label.daily_value(Nutrient::TotalFat), Some(0));
    }

    #[test]
    fn test_invalid_formulation_propagates() {
        let formulation = RecipeFormulation::new(vec![], -10.0, 30.0);
        assert!(calculate_label(&formulation, &ReferenceDailyValues::default()).is_err());
    }

    #[test]
    fn test_uses_sort_order_for_ties() {
        let a = RecipeIngredientLine::new(IngredientNutritionRecord::new("Basil", 1.0), 5.0, 2);
        let b = RecipeIngredientLine::new(IngredientNutritionRecord::new("Thyme", 1.0), 5.0, 1);
        let formulation = RecipeFormulation::new(vec![a, b], 10.0, 5.0);

        let label = calculate_label(&formulation, &ReferenceDailyValues::default()).unwrap();
        assert_eq!(label.ingredient_statement, "Thyme, Basil.");
        assert_eq!(label.servings_per_batch, 2.0);
    }
}
