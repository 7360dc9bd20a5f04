//! Built-in ingredient reference data
//!
//! Common home-cooking ingredients for dogs, with nutrients per 100 g and
//! safety information.

use super::IngredientCatalog;
use crate::models::{Category, Ingredient, NutrientDensity, SafetyLevel};

/// Catalog backed by a fixed in-memory list
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    ingredients: Vec<Ingredient>,
}

struct Entry {
    id: i64,
    name: &'static str,
    category: Category,
    safety: SafetyLevel,
    // calories, protein, fat, calcium, phosphorus
    density: (f64, f64, f64, f64, f64),
    description: &'static str,
    warning: Option<&'static str>,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        name: "Chicken breast",
        category: Category::Protein,
        safety: SafetyLevel::Safe,
        density: (105.0, 23.0, 1.0, 5.0, 200.0),
        description: "Lean, high quality protein. A good base for fresh meals.",
        warning: None,
    },
    Entry {
        id: 2,
        name: "Chicken thigh",
        category: Category::Protein,
        safety: SafetyLevel::Safe,
        density: (150.0, 18.0, 8.0, 8.0, 180.0),
        description: "Very palatable, slightly higher in fat.",
        warning: None,
    },
    Entry {
        id: 3,
        name: "Pumpkin",
        category: Category::Vegetable,
        safety: SafetyLevel::Safe,
        density: (26.0, 1.0, 0.1, 21.0, 44.0),
        description: "Rich in fiber and gentle on the stomach. Serve cooked.",
        warning: None,
    },
    Entry {
        id: 4,
        name: "Carrot",
        category: Category::Vegetable,
        safety: SafetyLevel::Safe,
        density: (41.0, 0.9, 0.2, 33.0, 35.0),
        description: "Rich in vitamin A, better absorbed when cooked with a little oil.",
        warning: None,
    },
    Entry {
        id: 5,
        name: "Sweet potato",
        category: Category::Vegetable,
        safety: SafetyLevel::Safe,
        density: (86.0, 1.6, 0.1, 30.0, 47.0),
        description: "Good carbohydrate source, but calorie dense.",
        warning: None,
    },
    Entry {
        id: 6,
        name: "Salmon",
        category: Category::Protein,
        safety: SafetyLevel::Safe,
        density: (208.0, 20.0, 13.0, 9.0, 200.0),
        description: "Rich in omega-3. Remove all bones and cook thoroughly.",
        warning: None,
    },
    Entry {
        id: 7,
        name: "Broccoli",
        category: Category::Vegetable,
        safety: SafetyLevel::Caution,
        density: (34.0, 2.8, 0.4, 47.0, 66.0),
        description: "Good source of vitamins C and K.",
        warning: Some("Keep under 10% of the daily food amount and serve cooked."),
    },
    Entry {
        id: 8,
        name: "Chocolate",
        category: Category::Snack,
        safety: SafetyLevel::Toxic,
        density: (546.0, 5.0, 30.0, 0.0, 0.0),
        description: "Contains theobromine, which dogs cannot metabolize.",
        warning: Some("Potentially fatal: heart failure."),
    },
    Entry {
        id: 9,
        name: "Grapes",
        category: Category::Fruit,
        safety: SafetyLevel::Toxic,
        density: (67.0, 0.6, 0.4, 0.0, 0.0),
        description: "Even small amounts can be dangerous.",
        warning: Some("Potentially fatal: acute kidney failure."),
    },
    Entry {
        id: 10,
        name: "Onion",
        category: Category::Vegetable,
        safety: SafetyLevel::Toxic,
        density: (40.0, 1.1, 0.1, 0.0, 0.0),
        description: "Toxic raw, cooked or powdered.",
        warning: Some("Potentially fatal: hemolytic anemia."),
    },
];

impl BuiltinCatalog {
    pub fn new() -> Self {
        let ingredients = ENTRIES
            .iter()
            .map(|entry| {
                let (calories, protein, fat, calcium, phosphorus) = entry.density;
                Ingredient {
                    id: entry.id,
                    name: entry.name.to_string(),
                    category: entry.category,
                    safety: entry.safety,
                    density: NutrientDensity {
                        calories,
                        protein,
                        fat,
                        calcium,
                        phosphorus,
                    },
                    description: Some(entry.description.to_string()),
                    warning: entry.warning.map(str::to_string),
                }
            })
            .collect();

        Self { ingredients }
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientCatalog for BuiltinCatalog {
    fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let catalog = BuiltinCatalog::new();
        let ids: HashSet<i64> = catalog.ingredients().iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), catalog.ingredients().len());
    }

    #[test]
    fn test_selectable_items_have_positive_calories() {
        let catalog = BuiltinCatalog::new();
        assert!(catalog.selectable().iter().all(|i| i.density.calories > 0.0));
    }

    #[test]
    fn test_toxic_items_carry_a_warning() {
        let catalog = BuiltinCatalog::new();
        for ingredient in catalog.ingredients().iter().filter(|i| i.is_toxic()) {
            assert!(ingredient.warning.is_some(), "{} has no warning", ingredient.name);
        }
    }
}
