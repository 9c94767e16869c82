use std::cmp::Ordering;

use crate::models::{AllergenSummary, RecipeIngredientLine};

/// Ingredient names in descending order of weight, e.g. `"Sugar, Flour, Salt."`.
///
/// Ties keep their input order, and `-0.0` ties with `0.0`. Names are used
/// verbatim; duplicates are not merged.
///
/// An empty recipe yields an empty string, not a lone `"."`.
pub fn ingredient_statement(lines: &[RecipeIngredientLine]) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let mut by_weight: Vec<&RecipeIngredientLine> = lines.iter().collect();
    by_weight.sort_by(|a, b| {
        b.amount_g
            .partial_cmp(&a.amount_g)
            .unwrap_or(Ordering::Equal)
    });

    let names: Vec<&str> = by_weight
        .iter()
        .map(|l| l.ingredient.name.as_str())
        .collect();

    format!("{}.", names.join(", "))
}

/// The "Contains:" declaration, or `None` when no allergen is present.
pub fn allergen_statement(summary: &AllergenSummary) -> Option<String> {
    let names: Vec<&str> = summary
        .present()
        .into_iter()
        .map(|a| a.display_name())
        .collect();

    if names.is_empty() {
        return None;
    }

    Some(format!("Contains: {}.", names.join(", ")))
}
