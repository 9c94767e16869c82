use crate::engine::constants::*;
use crate::models::{DisplayValue, Nutrient, RawNutritionData, RoundedNutritionData};

/// Round half up: `floor(x + 0.5)`. Inputs are non-negative nutrient amounts.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to the nearest multiple of `step`, halves rounding up.
#[inline]
pub fn round_to_multiple(value: f64, step: f64) -> f64 {
    round_half_up(value / step) * step
}

/// Calories: `< 5` → 0, `5..=50` → nearest 5, `> 50` → nearest 10.
pub fn round_calories(value: f64) -> DisplayValue {
    if value < CALORIES_ZERO_BELOW {
        DisplayValue::numeric(0.0)
    } else if value <= CALORIES_FINE_MAX {
        DisplayValue::numeric(round_to_multiple(value, 5.0))
    } else {
        DisplayValue::numeric(round_to_multiple(value, 10.0))
    }
}

/// Total, saturated and trans fat: `< 0.5` → 0, `< 5` → nearest 0.5, else nearest 1.
pub fn round_fat(value: f64) -> DisplayValue {
    if value < FAT_ZERO_BELOW {
        DisplayValue::numeric(0.0)
    } else if value < FAT_FINE_BELOW {
        DisplayValue::numeric(round_half_up(value * 2.0) / 2.0)
    } else {
        DisplayValue::numeric(round_half_up(value))
    }
}

/// Cholesterol: `< 2` → 0, `2..=5` → "less than 5", `> 5` → nearest 5.
///
/// Exactly 5 mg is declared as "less than 5"; existing labels depend on it.
pub fn round_cholesterol(value: f64) -> DisplayValue {
    if value < CHOLESTEROL_ZERO_BELOW {
        DisplayValue::numeric(0.0)
    } else if value <= CHOLESTEROL_THRESHOLD_MAX {
        DisplayValue::threshold(CHOLESTEROL_THRESHOLD_LABEL)
    } else {
        DisplayValue::numeric(round_to_multiple(value, 5.0))
    }
}

/// Sodium: `< 5` → 0, `5..=140` → nearest 5, `> 140` → nearest 10.
pub fn round_sodium(value: f64) -> DisplayValue {
    if value < SODIUM_ZERO_BELOW {
        DisplayValue::numeric(0.0)
    } else if value <= SODIUM_FINE_MAX {
        DisplayValue::numeric(round_to_multiple(value, 5.0))
    } else {
        DisplayValue::numeric(round_to_multiple(value, 10.0))
    }
}

/// Carbohydrate, fiber, sugars and protein: `< 0.5` → 0, else nearest gram.
pub fn round_carbs(value: f64) -> DisplayValue {
    if value < GRAMS_ZERO_BELOW {
        DisplayValue::numeric(0.0)
    } else {
        DisplayValue::numeric(round_half_up(value))
    }
}

/// Vitamin D: nearest 0.1 mcg.
pub fn round_vitamin_d(value: f64) -> DisplayValue {
    DisplayValue::numeric(round_half_up(value * 10.0) / 10.0)
}

/// Calcium and iron: nearest mg.
pub fn round_mineral(value: f64) -> DisplayValue {
    DisplayValue::numeric(round_half_up(value))
}

/// Potassium: nearest 5 mg.
pub fn round_potassium(value: f64) -> DisplayValue {
    DisplayValue::numeric(round_to_multiple(value, 5.0))
}

/// Percent Daily Value: nearest whole percent.
pub fn round_percent_dv(percent: f64) -> u32 {
    let rounded = round_half_up(percent);
    if rounded.is_finite() && rounded > 0.0 {
        rounded as u32
    } else {
        0
    }
}

/// Round a single nutrient with its class rule.
pub fn round_nutrient(nutrient: Nutrient, value: f64) -> DisplayValue {
    match nutrient {
        Nutrient::Calories => round_calories(value),
        Nutrient::TotalFat | Nutrient::SaturatedFat | Nutrient::TransFat => round_fat(value),
        Nutrient::Cholesterol => round_cholesterol(value),
        Nutrient::Sodium => round_sodium(value),
        Nutrient::TotalCarbohydrate
        | Nutrient::DietaryFiber
        | Nutrient::TotalSugars
        | Nutrient::AddedSugars
        | Nutrient::Protein => round_carbs(value),
        Nutrient::VitaminD => round_vitamin_d(value),
        Nutrient::Calcium | Nutrient::Iron => round_mineral(value),
        Nutrient::Potassium => round_potassium(value),
    }
}

/// Round every nutrient of a raw per-serving vector for display.
pub fn round_all(raw: &RawNutritionData) -> RoundedNutritionData {
    raw.map(|nutrient, value| round_nutrient(nutrient, *value))
}
