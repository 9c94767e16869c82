pub mod aggregation;
pub mod allergens;
pub mod constants;
pub mod daily_value;
pub mod label;
pub mod rounding;
pub mod statements;

pub use aggregation::{aggregate, aggregate_formulation, recipe_totals};
pub use allergens::{aggregate_allergens, detect_allergens, undeclared_allergens};
pub use constants::*;
pub use daily_value::{DailyValueCalculator, ReferenceDailyValues};
pub use label::{calculate_label, daily_values_from_rounded, NutritionLabel};
pub use rounding::{
    round_all, round_calories, round_carbs, round_cholesterol, round_fat, round_half_up,
    round_mineral, round_nutrient, round_percent_dv, round_potassium, round_sodium,
    round_vitamin_d,
};
pub use statements::{allergen_statement, ingredient_statement};
