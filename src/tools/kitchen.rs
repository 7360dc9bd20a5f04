//! Kitchen MCP Tools
//!
//! Ingredient selection and meal planning. Allocation itself is done by
//! the nutrition engine; these tools resolve ids, load the stored profile
//! and selection, and shape the responses.

use serde::Serialize;

use crate::catalog::IngredientCatalog;
use crate::db::Database;
use crate::models::{Ingredient, KitchenSelection, PetProfile};
use crate::nutrition::{
    self, MealPlan, MineralAnalysis, RecipeReport, SupplementRecommendation,
};

/// Response for toggle_ingredient
#[derive(Debug, Serialize)]
pub struct ToggleIngredientResponse {
    pub ingredient_id: i64,
    pub name: String,
    pub selected: bool,
    pub selection: Vec<i64>,
}

/// Response for get_selection
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub ingredients: Vec<Ingredient>,
    pub count: usize,
}

/// Response for clear_selection
#[derive(Debug, Serialize)]
pub struct ClearSelectionResponse {
    pub success: bool,
}

/// Response for recommend_supplements
#[derive(Debug, Serialize)]
pub struct SupplementsResponse {
    pub analysis: MineralAnalysis,
    pub supplements: Vec<SupplementRecommendation>,
}

/// Look up every id in the catalog, keeping the given order
pub fn resolve_ingredients(catalog: &dyn IngredientCatalog, ids: &[i64]) -> Result<Vec<Ingredient>, String> {
    ids.iter()
        .map(|id| {
            catalog
                .get(*id)
                .cloned()
                .ok_or_else(|| format!("Ingredient not found: {}", id))
        })
        .collect()
}

/// Select an ingredient, or deselect it if already selected
pub fn toggle_ingredient(
    db: &Database,
    catalog: &dyn IngredientCatalog,
    id: i64,
) -> Result<ToggleIngredientResponse, String> {
    let ingredient = catalog
        .get(id)
        .ok_or_else(|| format!("Ingredient not found: {}", id))?;

    let currently_selected = db
        .with_conn(KitchenSelection::load)
        .map_err(|e| format!("Database error: {}", e))?
        .contains(&id);

    // Deselecting is always allowed so stale toxic ids can be removed
    if ingredient.is_toxic() && !currently_selected {
        return Err(format!(
            "{} is toxic and cannot be added to a meal: {}",
            ingredient.name,
            ingredient.warning.as_deref().unwrap_or("unsafe for dogs")
        ));
    }

    let (selected, selection) = db
        .with_conn_mut(|conn| {
            let selected = KitchenSelection::toggle(conn, id)?;
            Ok((selected, KitchenSelection::load(conn)?))
        })
        .map_err(|e| format!("Failed to update selection: {}", e))?;

    Ok(ToggleIngredientResponse {
        ingredient_id: id,
        name: ingredient.name.clone(),
        selected,
        selection,
    })
}

/// Stored selection, skipping ids the catalog no longer knows
fn load_selection(db: &Database, catalog: &dyn IngredientCatalog) -> Result<Vec<Ingredient>, String> {
    let ids = db
        .with_conn(KitchenSelection::load)
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(ids
        .into_iter()
        .filter_map(|id| match catalog.get(id) {
            Some(ingredient) => Some(ingredient.clone()),
            None => {
                tracing::warn!(ingredient_id = id, "Skipping stored ingredient missing from catalog");
                None
            }
        })
        .collect())
}

pub fn get_selection(db: &Database, catalog: &dyn IngredientCatalog) -> Result<SelectionResponse, String> {
    let ingredients = load_selection(db, catalog)?;
    Ok(SelectionResponse {
        count: ingredients.len(),
        ingredients,
    })
}

pub fn clear_selection(db: &Database) -> Result<ClearSelectionResponse, String> {
    db.with_conn(KitchenSelection::clear)
        .map_err(|e| format!("Failed to clear selection: {}", e))?;
    Ok(ClearSelectionResponse { success: true })
}

/// Allocate an explicit calorie target across explicit ingredients
pub fn generate_recipe(
    catalog: &dyn IngredientCatalog,
    ids: &[i64],
    target_calories: f64,
) -> Result<RecipeReport, String> {
    let ingredients = resolve_ingredients(catalog, ids)?;
    nutrition::generate_recipe(&ingredients, target_calories).map_err(|e| e.to_string())
}

/// Plan a meal for the stored profile
///
/// Uses `ids` when given, otherwise the stored selection.
pub fn plan_meal(
    db: &Database,
    catalog: &dyn IngredientCatalog,
    ids: Option<&[i64]>,
) -> Result<MealPlan, String> {
    let ingredients = match ids {
        Some(ids) => resolve_ingredients(catalog, ids)?,
        None => load_selection(db, catalog)?,
    };

    let profile = db
        .with_conn(PetProfile::get_or_default)
        .map_err(|e| format!("Database error: {}", e))?;

    nutrition::plan_meal(&profile, &ingredients).map_err(|e| e.to_string())
}

/// Response for analyze_minerals
#[derive(Debug, Serialize)]
pub struct MineralsResponse {
    #[serde(flatten)]
    pub analysis: MineralAnalysis,
    /// Ratio with two decimals, e.g. "0.15"
    pub ratio_display: String,
}

fn validate_mineral_totals(total_calcium_mg: f64, total_phosphorus_mg: f64) -> Result<(), String> {
    for (label, value) in [("calcium", total_calcium_mg), ("phosphorus", total_phosphorus_mg)] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!(
                "Invalid total {}: {} (must be a finite number >= 0 mg)",
                label, value
            ));
        }
    }
    Ok(())
}

pub fn analyze_minerals(total_calcium_mg: f64, total_phosphorus_mg: f64) -> Result<MineralsResponse, String> {
    validate_mineral_totals(total_calcium_mg, total_phosphorus_mg)?;
    let analysis = nutrition::analyze(total_calcium_mg, total_phosphorus_mg);
    Ok(MineralsResponse {
        ratio_display: analysis.ratio_display(),
        analysis,
    })
}

pub fn recommend_supplements(total_calcium_mg: f64, total_phosphorus_mg: f64) -> Result<SupplementsResponse, String> {
    validate_mineral_totals(total_calcium_mg, total_phosphorus_mg)?;
    let analysis = nutrition::analyze(total_calcium_mg, total_phosphorus_mg);
    let supplements = nutrition::recommend(&analysis, total_calcium_mg, total_phosphorus_mg);
    Ok(SupplementsResponse {
        analysis,
        supplements,
    })
}
