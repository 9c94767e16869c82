use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Allergen, Nutrient};

// ─────────────────────────────────────────────────────────────────────────────
// Rounding thresholds (21 CFR 101.9(c))
// ─────────────────────────────────────────────────────────────────────────────

/// Calories below this are declared as zero.
pub const CALORIES_ZERO_BELOW: f64 = 5.0;

/// Calories up to and including this round to 5, above it to 10.
pub const CALORIES_FINE_MAX: f64 = 50.0;

/// Fat (total, saturated, trans) below this is declared as zero.
pub const FAT_ZERO_BELOW: f64 = 0.5;

/// Fat below this rounds to the nearest 0.5 g, at or above it to 1 g.
pub const FAT_FINE_BELOW: f64 = 5.0;

/// Cholesterol below this is declared as zero.
pub const CHOLESTEROL_ZERO_BELOW: f64 = 2.0;

/// Cholesterol up to and including this is declared with the threshold phrase.
pub const CHOLESTEROL_THRESHOLD_MAX: f64 = 5.0;

/// Phrase declared for cholesterol in the threshold band.
pub const CHOLESTEROL_THRESHOLD_LABEL: &str = "less than 5";

/// Sodium below this is declared as zero.
pub const SODIUM_ZERO_BELOW: f64 = 5.0;

/// Sodium up to and including this rounds to 5 mg, above it to 10 mg.
pub const SODIUM_FINE_MAX: f64 = 140.0;

/// Carbohydrate, fiber, sugars and protein below this are declared as zero.
pub const GRAMS_ZERO_BELOW: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Reference Daily Values (2,000 calorie diet)
// ─────────────────────────────────────────────────────────────────────────────

/// Daily reference amounts in the nutrient's own unit.
///
/// Calories, trans fat and total sugars have no established Daily Value.
pub static REFERENCE_DAILY_VALUES: LazyLock<HashMap<Nutrient, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(Nutrient::TotalFat, 78.0);
    m.insert(Nutrient::SaturatedFat, 20.0);
    m.insert(Nutrient::Cholesterol, 300.0);
    m.insert(Nutrient::Sodium, 2300.0);
    m.insert(Nutrient::TotalCarbohydrate, 275.0);
    m.insert(Nutrient::DietaryFiber, 28.0);
    m.insert(Nutrient::AddedSugars, 50.0);
    m.insert(Nutrient::Protein, 50.0);
    m.insert(Nutrient::VitaminD, 20.0);
    m.insert(Nutrient::Calcium, 1300.0);
    m.insert(Nutrient::Iron, 18.0);
    m.insert(Nutrient::Potassium, 4700.0);
    m
});

// ─────────────────────────────────────────────────────────────────────────────
// Allergen keywords
// ─────────────────────────────────────────────────────────────────────────────

/// Lowercase words that indicate an allergen when found in an ingredient name.
pub static ALLERGEN_KEYWORDS: LazyLock<HashMap<Allergen, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut m: HashMap<Allergen, &'static [&'static str]> = HashMap::new();
        m.insert(
            Allergen::Milk,
            &[
                "milk", "butter", "cream", "cheese", "whey", "casein", "lactose", "yogurt",
                "ghee", "buttermilk",
            ],
        );
        m.insert(Allergen::Eggs, &["egg", "eggs", "albumin", "mayonnaise", "meringue"]);
        m.insert(
            Allergen::Fish,
            &["fish", "anchovy", "anchovies", "cod", "salmon", "tuna", "tilapia", "pollock"],
        );
        m.insert(
            Allergen::Shellfish,
            &["shrimp", "crab", "lobster", "prawn", "prawns", "crayfish", "scallop", "scallops"],
        );
        m.insert(
            Allergen::TreeNuts,
            &[
                "almond", "almonds", "cashew", "cashews", "walnut", "walnuts", "pecan", "pecans",
                "pistachio", "pistachios", "hazelnut", "hazelnuts", "macadamia",
            ],
        );
        m.insert(Allergen::Peanuts, &["peanut", "peanuts"]);
        m.insert(
            Allergen::Wheat,
            &["wheat", "flour", "semolina", "durum", "spelt", "farina", "bulgur"],
        );
        m.insert(
            Allergen::Soybeans,
            &["soy", "soya", "soybean", "soybeans", "tofu", "edamame", "lecithin"],
        );
        m.insert(Allergen::Sesame, &["sesame", "tahini"]);
        m
    });

/// Get the detection keywords for an allergen.
pub fn allergen_keywords(allergen: Allergen) -> &'static [&'static str] {
    ALLERGEN_KEYWORDS.get(&allergen).copied().unwrap_or(&[])
}
