//! Ingredient catalog
//!
//! Read-only reference data the engine allocates from.

mod builtin;

pub use builtin::BuiltinCatalog;

use crate::models::{Category, Ingredient};

/// Source of ingredient reference data
pub trait IngredientCatalog: Send + Sync {
    /// Every ingredient, in catalog order
    fn ingredients(&self) -> &[Ingredient];

    fn get(&self, id: i64) -> Option<&Ingredient> {
        self.ingredients().iter().find(|ingredient| ingredient.id == id)
    }

    /// Case-insensitive substring match on the name; an empty query matches everything
    fn search(&self, query: &str) -> Vec<&Ingredient> {
        let needle = query.trim().to_lowercase();
        self.ingredients()
            .iter()
            .filter(|ingredient| needle.is_empty() || ingredient.name.to_lowercase().contains(&needle))
            .collect()
    }

    fn by_category(&self, category: Category) -> Vec<&Ingredient> {
        self.ingredients()
            .iter()
            .filter(|ingredient| ingredient.category == category)
            .collect()
    }

    /// Ingredients that may go into a meal
    fn selectable(&self) -> Vec<&Ingredient> {
        self.ingredients()
            .iter()
            .filter(|ingredient| !ingredient.is_toxic())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SafetyLevel;

    #[test]
    fn test_get_by_id() {
        let catalog = BuiltinCatalog::new();
        assert_eq!(catalog.get(1).map(|i| i.name.as_str()), Some("Chicken breast"));
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = BuiltinCatalog::new();
        let names: Vec<&str> = catalog.search("CHICKEN").iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken breast", "Chicken thigh"]);
        assert_eq!(catalog.search("  ").len(), catalog.ingredients().len());
        assert!(catalog.search("kale").is_empty());
    }

    #[test]
    fn test_selectable_excludes_toxic() {
        let catalog = BuiltinCatalog::new();
        let selectable = catalog.selectable();
        assert_eq!(selectable.len(), 7);
        assert!(selectable.iter().all(|i| i.safety != SafetyLevel::Toxic));
    }

    #[test]
    fn test_by_category() {
        let catalog = BuiltinCatalog::new();
        let proteins: Vec<i64> = catalog.by_category(Category::Protein).iter().map(|i| i.id).collect();
        assert_eq!(proteins, vec![1, 2, 6]);
        assert_eq!(catalog.by_category(Category::Fruit).len(), 1);
    }
}
