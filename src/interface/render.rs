use std::fmt::{self, Write};

use crate::engine::NutritionLabel;
use crate::models::{Allergen, Nutrient, RecipeFormulation};

const PANEL_WIDTH: usize = 40;

fn indent(nutrient: Nutrient) -> &'static str {
    match nutrient {
        Nutrient::SaturatedFat
        | Nutrient::TransFat
        | Nutrient::DietaryFiber
        | Nutrient::TotalSugars => "  ",
        Nutrient::AddedSugars => "    ",
        _ => "",
    }
}

fn write_panel(
    out: &mut impl Write,
    formulation: &RecipeFormulation,
    label: &NutritionLabel,
) -> fmt::Result {
    let rule = "-".repeat(PANEL_WIDTH);
    let value_col = PANEL_WIDTH - 6;

    let title = formulation.name.as_deref().unwrap_or("Recipe");
    writeln!(out, "=== Nutrition Facts: {} ===", title)?;
    writeln!(out)?;
    writeln!(out, "{:.1} servings per batch", label.servings_per_batch)?;
    writeln!(out, "Serving size {} g", formulation.serving_size_g)?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "{:<width$}{:>6}",
        "Calories",
        label.rounded.calories.to_string(),
        width = value_col
    )?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{:>width$}", "% Daily Value*", width = PANEL_WIDTH)?;

    for (nutrient, display) in label.rounded.iter().skip(1) {
        let text = format!(
            "{}{} {}{}",
            indent(nutrient),
            nutrient.display_name(),
            display,
            nutrient.unit()
        );
        let percent = label
            .daily_value(nutrient)
            .map(|p| format!("{}%", p))
            .unwrap_or_default();

        writeln!(out, "{:<width$}{:>6}", text, percent, width = value_col)?;
        if nutrient == Nutrient::Protein {
            writeln!(out, "{}", rule)?;
        }
    }

    writeln!(out, "{}", rule)?;
    writeln!(out)?;

    if !label.ingredient_statement.is_empty() {
        writeln!(out, "Ingredients: {}", label.ingredient_statement)?;
    }
    if let Some(statement) = &label.allergen_statement {
        writeln!(out, "{}", statement)?;
    }

    Ok(())
}

struct Panel<'a> {
    formulation: &'a RecipeFormulation,
    label: &'a NutritionLabel,
}

impl fmt::Display for Panel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_panel(f, self.formulation, self.label)
    }
}

/// Render the label as a plain-text Nutrition Facts panel.
pub fn format_label(formulation: &RecipeFormulation, label: &NutritionLabel) -> String {
    Panel { formulation, label }.to_string()
}

/// Print the Nutrition Facts panel to stdout.
pub fn display_label(formulation: &RecipeFormulation, label: &NutritionLabel) {
    println!();
    print!("{}", format_label(formulation, label));
    println!();
}

/// Print allergen audit findings, one ingredient per line.
pub fn display_allergen_audit(findings: &[(String, Vec<Allergen>)]) {
    if findings.is_empty() {
        println!("No undeclared allergens suggested by ingredient names.");
        return;
    }

    println!();
    println!("=== Allergen Audit ({} ingredients) ===", findings.len());
    println!();

    for (name, allergens) in findings {
        let names: Vec<&str> = allergens.iter().map(|a| a.display_name()).collect();
        println!("  {} - name suggests: {}", name, names.join(", "));
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{calculate_label, ReferenceDailyValues};
    use crate::models::{AllergenFlags, IngredientNutritionRecord, RecipeIngredientLine};

    #[test]
    fn test_format_label_contains_panel_and_statements() {
        let butter = IngredientNutritionRecord::new("Butter", 14.0)
            .with_nutrient(Nutrient::Calories, 102.0)
            .with_nutrient(Nutrient::TotalFat, 11.5)
            .with_nutrient(Nutrient::Cholesterol, 31.0)
            .with_allergens(AllergenFlags::from_allergens([Allergen::Milk]));
        let formulation =
            RecipeFormulation::new(vec![RecipeIngredientLine::new(butter, 14.0, 0)], 14.0, 14.0)
                .with_name("Butter Pat");

        let label = calculate_label(&formulation, &ReferenceDailyValues::default()).unwrap();
        let panel = format_label(&formulation, &label);

        assert!(panel.contains("Nutrition Facts: Butter Pat"));
        assert!(panel.contains("Total Fat 12g"));
        assert!(panel.contains("15%"));
        assert!(panel.contains("Cholesterol 30mg"));
        assert!(panel.contains("Ingredients: Butter."));
        assert!(panel.contains("Contains: milk."));
    }
}
