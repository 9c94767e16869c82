mod allergen;
mod ingredient;
mod nutrient;
mod recipe;

pub use allergen::{Allergen, AllergenFlags, AllergenSummary};
pub use ingredient::IngredientNutritionRecord;
pub use nutrient::{DisplayValue, Nutrient, NutrientValues, RawNutritionData, RoundedNutritionData};
pub use recipe::{validate_batch, RecipeFormulation, RecipeIngredientLine};
