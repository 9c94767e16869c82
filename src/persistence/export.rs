use std::io::Write;
use std::path::Path;

use crate::engine::NutritionLabel;
use crate::error::Result;

const HEADER: [&str; 5] = ["nutrient", "unit", "raw", "display", "percent_dv"];

/// One CSV row per nutrient: key, unit, raw amount, declared value, % DV.
///
/// Raw amounts keep four decimals; `percent_dv` is empty when no reference exists.
pub fn label_csv_rows(label: &NutritionLabel) -> Vec<[String; 5]> {
    label
        .raw
        .iter()
        .map(|(nutrient, raw)| {
            [
                nutrient.key().to_string(),
                nutrient.unit().to_string(),
                format!("{:.4}", raw),
                label.rounded.get(nutrient).to_string(),
                label
                    .daily_value(nutrient)
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect()
}

/// Write the label as CSV to any writer.
pub fn write_label_csv_to<W: Write>(label: &NutritionLabel, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(HEADER)?;
    for row in label_csv_rows(label) {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the label as CSV to a file.
pub fn write_label_csv(label: &NutritionLabel, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_label_csv_to(label, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{calculate_label, ReferenceDailyValues};
    use crate::models::{
        IngredientNutritionRecord, Nutrient, RecipeFormulation, RecipeIngredientLine,
    };
    use tempfile::NamedTempFile;

    fn sample_label() -> NutritionLabel {
        let egg = IngredientNutritionRecord::new("Egg", 50.0)
            .with_nutrient(Nutrient::Calories, 72.0)
            .with_nutrient(Nutrient::Cholesterol, 186.0)
            .with_nutrient(Nutrient::Sodium, 71.0);
        let formulation =
            RecipeFormulation::new(vec![RecipeIngredientLine::new(egg, 50.0, 0)], 50.0, 50.0);
        calculate_label(&formulation, &ReferenceDailyValues::default()).unwrap()
    }

    #[test]
    fn test_rows_cover_every_nutrient() {
        let rows = label_csv_rows(&sample_label());
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0][0], "calories");
        assert_eq!(rows[0][3], "70");
        assert_eq!(rows[0][4], "");
        // sodium: 71 mg -> 70 mg -> 70 / 2300 = 3%
        assert_eq!(rows[5], ["sodium", "mg", "71.0000", "70", "3"].map(String::from));
    }

    #[test]
    fn test_write_label_csv() {
        let out = NamedTempFile::new().unwrap();
        write_label_csv(&sample_label(), out.path()).unwrap();

        let mut rdr = csv::Reader::from_path(out.path()).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER.to_vec());
        assert_eq!(rdr.records().count(), 15);
    }
}
