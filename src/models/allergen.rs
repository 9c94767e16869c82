use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// The nine major food allergens, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Allergen {
    Milk,
    Eggs,
    Fish,
    Shellfish,
    TreeNuts,
    Peanuts,
    Wheat,
    Soybeans,
    Sesame,
}

impl Allergen {
    pub const ALL: [Allergen; 9] = [
        Allergen::Milk,
        Allergen::Eggs,
        Allergen::Fish,
        Allergen::Shellfish,
        Allergen::TreeNuts,
        Allergen::Peanuts,
        Allergen::Wheat,
        Allergen::Soybeans,
        Allergen::Sesame,
    ];

    /// Name used in the "Contains:" statement.
    pub fn display_name(self) -> &'static str {
        match self {
            Allergen::Milk => "milk",
            Allergen::Eggs => "eggs",
            Allergen::Fish => "fish",
            Allergen::Shellfish => "shellfish",
            Allergen::TreeNuts => "tree nuts",
            Allergen::Peanuts => "peanuts",
            Allergen::Wheat => "wheat",
            Allergen::Soybeans => "soybeans",
            Allergen::Sesame => "sesame",
        }
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Presence flags for the Big-9 allergens.
///
/// Used both on ingredient records and as the per-recipe summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenFlags {
    #[serde(default)]
    pub contains_milk: bool,
    #[serde(default)]
    pub contains_eggs: bool,
    #[serde(default)]
    pub contains_fish: bool,
    #[serde(default)]
    pub contains_shellfish: bool,
    #[serde(default)]
    pub contains_tree_nuts: bool,
    #[serde(default)]
    pub contains_peanuts: bool,
    #[serde(default)]
    pub contains_wheat: bool,
    #[serde(default)]
    pub contains_soybeans: bool,
    #[serde(default)]
    pub contains_sesame: bool,
}

/// Recipe-level allergen presence, derived by OR-reduction.
pub type AllergenSummary = AllergenFlags;

impl AllergenFlags {
    pub fn none() -> Self {
        Self::default()
    }

    /// Flags with exactly the given allergens set.
    pub fn from_allergens(allergens: impl IntoIterator<Item = Allergen>) -> Self {
        let mut flags = Self::default();
        for allergen in allergens {
            flags.set(allergen, true);
        }
        flags
    }

    pub fn contains(&self, allergen: Allergen) -> bool {
        match allergen {
            Allergen::Milk => self.contains_milk,
            Allergen::Eggs => self.contains_eggs,
            Allergen::Fish => self.contains_fish,
            Allergen::Shellfish => self.contains_shellfish,
            Allergen::TreeNuts => self.contains_tree_nuts,
            Allergen::Peanuts => self.contains_peanuts,
            Allergen::Wheat => self.contains_wheat,
            Allergen::Soybeans => self.contains_soybeans,
            Allergen::Sesame => self.contains_sesame,
        }
    }

    pub fn set(&mut self, allergen: Allergen, present: bool) {
        let flag = match allergen {
            Allergen::Milk => &mut self.contains_milk,
            Allergen::Eggs => &mut self.contains_eggs,
            Allergen::Fish => &mut self.contains_fish,
            Allergen::Shellfish => &mut self.contains_shellfish,
            Allergen::TreeNuts => &mut self.contains_tree_nuts,
            Allergen::Peanuts => &mut self.contains_peanuts,
            Allergen::Wheat => &mut self.contains_wheat,
            Allergen::Soybeans => &mut self.contains_soybeans,
            Allergen::Sesame => &mut self.contains_sesame,
        };
        *flag = present;
    }

    /// Allergens that are set, in declaration order.
    pub fn present(&self) -> Vec<Allergen> {
        Allergen::ALL
            .into_iter()
            .filter(|a| self.contains(*a))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        Allergen::ALL.into_iter().all(|a| !self.contains(a))
    }
}

impl BitOr for AllergenFlags {
    type Output = AllergenFlags;

    fn bitor(self, other: AllergenFlags) -> AllergenFlags {
        let mut merged = self;
        for allergen in Allergen::ALL {
            if other.contains(allergen) {
                merged.set(allergen, true);
            }
        }
        merged
    }
}
