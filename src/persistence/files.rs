use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::engine::NutritionLabel;
use crate::error::{LabelError, Result};
use crate::models::{Nutrient, RecipeFormulation};

/// Load a recipe formulation from a JSON file.
///
/// The formulation is validated before it is returned.
pub fn load_formulation<P: AsRef<Path>>(path: P) -> Result<RecipeFormulation> {
    let content = fs::read_to_string(path)?;
    let formulation: RecipeFormulation = serde_json::from_str(&content)?;
    formulation.validate()?;
    Ok(formulation)
}

/// Save a calculated label as pretty-printed JSON.
pub fn save_label<P: AsRef<Path>>(path: P, label: &NutritionLabel) -> Result<()> {
    let json = serde_json::to_string_pretty(label)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load Daily Value overrides: a JSON object of nutrient key to reference amount.
pub fn load_daily_values<P: AsRef<Path>>(path: P) -> Result<HashMap<Nutrient, f64>> {
    let content = fs::read_to_string(path)?;
    let entries: HashMap<String, f64> = serde_json::from_str(&content)?;

    let mut references = HashMap::new();
    for (key, amount) in entries {
        let nutrient = Nutrient::from_key(&key)
            .ok_or_else(|| LabelError::InvalidInput(format!("Unknown nutrient key: {}", key)))?;
        if !(amount.is_finite() && amount > 0.0) {
            return Err(LabelError::InvalidInput(format!(
                "Daily value for {} must be positive, got {}",
                key, amount
            )));
        }
        references.insert(nutrient, amount);
    }

    Ok(references)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{calculate_label, ReferenceDailyValues};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FORMULATION: &str = r#"{
        "name": "Pancake Mix",
        "recipeYieldG": 400,
        "servingSizeG": 100,
        "lines": [
            {
                "sortOrder": 1,
                "amountG": 200,
                "ingredient": {
                    "name": "Wheat Flour",
                    "servingSizeG": 100,
                    "calories": 400,
                    "containsWheat": true
                }
            }
        ]
    }"#;

    fn temp_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_formulation() {
        let file = temp_with(FORMULATION);
        let formulation = load_formulation(file.path()).unwrap();
        assert_eq!(formulation.name.as_deref(), Some("Pancake Mix"));
        assert_eq!(formulation.lines.len(), 1);
        assert_eq!(formulation.lines[0].ingredient.nutrients.calories, Some(400.0));
        assert!(formulation.lines[0].ingredient.allergens.contains_wheat);
    }

    #[test]
    fn test_load_rejects_invalid_formulation() {
        let file = temp_with(&FORMULATION.replace("\"recipeYieldG\": 400", "\"recipeYieldG\": 0"));
        let err = load_formulation(file.path()).unwrap_err();
        assert!(matches!(err, LabelError::InvalidFormulation(_)));
    }

    #[test]
    fn test_save_label_writes_json() {
        let formulation = load_formulation(temp_with(FORMULATION).path()).unwrap();
        let label = calculate_label(&formulation, &ReferenceDailyValues::default()).unwrap();

        let out = NamedTempFile::new().unwrap();
        save_label(out.path(), &label).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.path()).unwrap()).unwrap();
        assert_eq!(written["rounded"]["calories"]["kind"], "numeric");
        assert_eq!(written["rounded"]["calories"]["value"], 200.0);
        assert_eq!(written["allergenStatement"], "Contains: wheat.");
    }

    #[test]
    fn test_load_daily_values() {
        let file = temp_with(r#"{"sodium": 2400, "totalFat": 65}"#);
        let references = load_daily_values(file.path()).unwrap();
        assert_eq!(references.get(&Nutrient::Sodium), Some(&2400.0));
        assert_eq!(references.get(&Nutrient::TotalFat), Some(&65.0));
    }

    #[test]
    fn test_load_daily_values_rejects_unknown_key() {
        let file = temp_with(r#"{"vitaminC": 90}"#);
        assert!(matches!(
            load_daily_values(file.path()),
            Err(LabelError::InvalidInput(_))
        ));
    }
}
