use crate::engine::constants::allergen_keywords;
use crate::models::{Allergen, AllergenFlags, AllergenSummary, RecipeIngredientLine};

/// OR-reduce the allergen flags of every ingredient in a recipe.
pub fn aggregate_allergens(lines: &[RecipeIngredientLine]) -> AllergenSummary {
    lines
        .iter()
        .fold(AllergenFlags::none(), |acc, line| acc | line.ingredient.allergens)
}

/// Guess allergens from an ingredient name by whole-word keyword match.
///
/// Only used to audit declared flags; never feeds the allergen summary.
pub fn detect_allergens(text: &str) -> AllergenFlags {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let detected = Allergen::ALL.into_iter().filter(|allergen| {
        allergen_keywords(*allergen)
            .iter()
            .any(|keyword| words.contains(keyword))
    });

    AllergenFlags::from_allergens(detected)
}

/// Allergens suggested by the ingredient's name that its record does not flag.
pub fn undeclared_allergens(line: &RecipeIngredientLine) -> Vec<Allergen> {
    let detected = detect_allergens(&line.ingredient.name);
    detected
        .present()
        .into_iter()
        .filter(|a| !line.ingredient.allergens.contains(*a))
        .collect()
}
