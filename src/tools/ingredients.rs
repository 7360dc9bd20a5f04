//! Ingredient MCP Tools
//!
//! Read-only lookups against the ingredient catalog.

use serde::Serialize;

use crate::catalog::IngredientCatalog;
use crate::models::{Category, Ingredient, SafetyLevel};

/// Summary of an ingredient for search results
#[derive(Debug, Serialize)]
pub struct IngredientSummary {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub safety: SafetyLevel,
    pub calories_per_100g: f64,
    pub warning: Option<String>,
}

impl From<&Ingredient> for IngredientSummary {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name.clone(),
            category: ingredient.category,
            safety: ingredient.safety,
            calories_per_100g: ingredient.density.calories,
            warning: ingredient.warning.clone(),
        }
    }
}

/// Response for search_ingredients
#[derive(Debug, Serialize)]
pub struct SearchIngredientsResponse {
    pub items: Vec<IngredientSummary>,
    pub total: usize,
}

/// Search the catalog by name, optionally narrowed to one category
pub fn search_ingredients(
    catalog: &dyn IngredientCatalog,
    query: &str,
    category: Option<&str>,
    include_toxic: bool,
) -> Result<SearchIngredientsResponse, String> {
    let category = match category {
        Some(s) => Some(Category::from_str(s).ok_or_else(|| {
            format!("Invalid category '{}': expected protein, vegetable, fruit or snack", s)
        })?),
        None => None,
    };

    let matches = catalog.search(query);
    let candidates = match category {
        Some(category) => catalog.by_category(category),
        None => catalog.ingredients().iter().collect(),
    };

    let items: Vec<IngredientSummary> = candidates
        .into_iter()
        .filter(|ingredient| matches.iter().any(|m| m.id == ingredient.id))
        .filter(|ingredient| include_toxic || !ingredient.is_toxic())
        .map(IngredientSummary::from)
        .collect();

    Ok(SearchIngredientsResponse {
        total: items.len(),
        items,
    })
}

/// Full ingredient record
pub fn get_ingredient(catalog: &dyn IngredientCatalog, id: i64) -> Option<Ingredient> {
    catalog.get(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinCatalog;

    #[test]
    fn test_search_hides_toxic_by_default() {
        let catalog = BuiltinCatalog::new();
        let safe_only = search_ingredients(&catalog, "", None, false).unwrap();
        assert_eq!(safe_only.total, 7);

        let everything = search_ingredients(&catalog, "", None, true).unwrap();
        assert_eq!(everything.total, 10);
    }

    #[test]
    fn test_search_by_category() {
        let catalog = BuiltinCatalog::new();
        let response = search_ingredients(&catalog, "", Some("veg"), true).unwrap();
        let names: Vec<&str> = response.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Pumpkin", "Carrot", "Sweet potato", "Broccoli", "Onion"]);

        assert!(search_ingredients(&catalog, "", Some("grain"), true).is_err());
    }

    #[test]
    fn test_search_by_name_within_category() {
        let catalog = BuiltinCatalog::new();
        let response = search_ingredients(&catalog, "chicken", Some("protein"), false).unwrap();
        let ids: Vec<i64> = response.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(search_ingredients(&catalog, "chicken", Some("fruit"), true).unwrap().total, 0);
    }

    #[test]
    fn test_search_by_name() {
        let catalog = BuiltinCatalog::new();
        let response = search_ingredients(&catalog, "grape", None, true).unwrap();
        assert_eq!(response.total, 1);
        assert_eq!(response.items[0].safety, SafetyLevel::Toxic);
    }

    #[test]
    fn test_get_ingredient() {
        let catalog = BuiltinCatalog::new();
        let broccoli = get_ingredient(&catalog, 7).unwrap();
        assert_eq!(broccoli.safety, SafetyLevel::Caution);
        assert!(broccoli.warning.is_some());
        assert!(get_ingredient(&catalog, 42).is_none());
    }
}
