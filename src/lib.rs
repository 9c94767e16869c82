pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod persistence;

pub use engine::{calculate_label, DailyValueCalculator, NutritionLabel, ReferenceDailyValues};
pub use error::{LabelError, Result};
pub use models::{
    AllergenSummary, DisplayValue, IngredientNutritionRecord, Nutrient, RawNutritionData,
    RecipeFormulation, RecipeIngredientLine, RoundedNutritionData,
};
