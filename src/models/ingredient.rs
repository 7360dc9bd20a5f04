//! Ingredient model
//!
//! Reference data for a single food, supplied by an ingredient catalog.

use serde::{Deserialize, Serialize};

use super::NutrientDensity;

/// Food group an ingredient belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    #[serde(alias = "veg")]
    Vegetable,
    Fruit,
    Snack,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Protein => "protein",
            Category::Vegetable => "vegetable",
            Category::Fruit => "fruit",
            Category::Snack => "snack",
        }
    }

    /// Parse from string, accepting the short "veg" spelling
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "protein" => Some(Category::Protein),
            "vegetable" | "veg" => Some(Category::Vegetable),
            "fruit" => Some(Category::Fruit),
            "snack" => Some(Category::Snack),
            _ => None,
        }
    }
}

/// How safe an ingredient is for a dog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Safe,
    /// Allowed in limited quantities; see the ingredient warning
    Caution,
    /// Never allowed in a meal
    Toxic,
}

impl SafetyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "safe",
            SafetyLevel::Caution => "caution",
            SafetyLevel::Toxic => "toxic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "safe" => Some(SafetyLevel::Safe),
            "caution" => Some(SafetyLevel::Caution),
            "toxic" => Some(SafetyLevel::Toxic),
            _ => None,
        }
    }
}

/// A catalog ingredient with per-100g nutrient densities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub safety: SafetyLevel,
    pub density: NutrientDensity,
    pub description: Option<String>,
    pub warning: Option<String>,
}

impl Ingredient {
    pub fn is_toxic(&self) -> bool {
        self.safety == SafetyLevel::Toxic
    }

    pub fn is_protein(&self) -> bool {
        self.category == Category::Protein
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!(Category::from_str("protein"), Some(Category::Protein));
        assert_eq!(Category::from_str("veg"), Some(Category::Vegetable));
        assert_eq!(Category::from_str(" Vegetable "), Some(Category::Vegetable));
        assert_eq!(Category::from_str("grain"), None);
    }

    #[test]
    fn test_category_serde_accepts_veg() {
        let parsed: Category = serde_json::from_str("\"veg\"").unwrap();
        assert_eq!(parsed, Category::Vegetable);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"vegetable\"");
    }

    #[test]
    fn test_safety_round_trip_strings() {
        for level in [SafetyLevel::Safe, SafetyLevel::Caution, SafetyLevel::Toxic] {
            assert_eq!(SafetyLevel::from_str(level.as_str()), Some(level));
        }
        assert_eq!(SafetyLevel::from_str("deadly"), None);
    }
}
