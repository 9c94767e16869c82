use std::collections::HashMap;

use crate::engine::constants::REFERENCE_DAILY_VALUES;
use crate::engine::rounding::round_percent_dv;
use crate::models::Nutrient;

/// Percent of the daily reference intake a serving amount represents.
///
/// Returns `None` for nutrients without an established Daily Value.
pub trait DailyValueCalculator {
    fn daily_value_percent(&self, nutrient: Nutrient, amount: f64) -> Option<u32>;
}

/// Daily Value table keyed by nutrient, in the nutrient's own unit.
#[derive(Debug, Clone)]
pub struct ReferenceDailyValues {
    references: HashMap<Nutrient, f64>,
}

impl ReferenceDailyValues {
    /// Table with custom reference amounts. Non-positive entries are ignored.
    pub fn new(references: HashMap<Nutrient, f64>) -> Self {
        let references = references
            .into_iter()
            .filter(|(_, amount)| amount.is_finite() && *amount > 0.0)
            .collect();
        Self { references }
    }

    /// Replace or add reference amounts on top of this table.
    pub fn with_overrides(mut self, overrides: HashMap<Nutrient, f64>) -> Self {
        for (nutrient, amount) in overrides {
            if amount.is_finite() && amount > 0.0 {
                self.references.insert(nutrient, amount);
            }
        }
        self
    }

    pub fn reference(&self, nutrient: Nutrient) -> Option<f64> {
        self.references.get(&nutrient).copied()
    }
}

impl Default for ReferenceDailyValues {
    /// FDA reference values for adults and children 4+ on a 2,000 calorie diet.
    fn default() -> Self {
        Self::new(REFERENCE_DAILY_VALUES.clone())
    }
}

impl DailyValueCalculator for ReferenceDailyValues {
    fn daily_value_percent(&self, nutrient: Nutrient, amount: f64) -> Option<u32> {
        let reference = self.reference(nutrient)?;
        Some(round_percent_dv(amount / reference * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_percentages() {
        let dv = ReferenceDailyValues::default();
        assert_eq!(dv.daily_value_percent(Nutrient::Sodium, 230.0), Some(10));
        assert_eq!(dv.daily_value_percent(Nutrient::TotalFat, 8.0), Some(10));
        assert_eq!(dv.daily_value_percent(Nutrient::Iron, 1.0), Some(6));
    }

    #[test]
    fn test_no_reference_for_calories_trans_fat_total_sugars() {
        let dv = ReferenceDailyValues::default();
        assert_eq!(dv.daily_value_percent(Nutrient::Calories, 200.0), None);
        assert_eq!(dv.daily_value_percent(Nutrient::TransFat, 1.0), None);
        assert_eq!(dv.daily_value_percent(Nutrient::TotalSugars, 12.0), None);
    }

    #[test]
    fn test_overrides_replace_entries() {
        let mut overrides = HashMap::new();
        overrides.insert(Nutrient::Sodium, 1000.0);
        overrides.insert(Nutrient::Iron, -1.0);
        let dv = ReferenceDailyValues::default().with_overrides(overrides);

        assert_eq!(dv.daily_value_percent(Nutrient::Sodium, 100.0), Some(10));
        assert_eq!(dv.reference(Nutrient::Iron), Some(18.0));
    }
}
