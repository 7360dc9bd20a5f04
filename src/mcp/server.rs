//! FurLogic MCP Server Implementation
//!
//! Implements the MCP server with all FurLogic tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::IngredientCatalog;
use crate::db::Database;
use crate::models::PetProfileUpdate;
use crate::tools::energy;
use crate::tools::ingredients;
use crate::tools::kitchen;
use crate::tools::profile;
use crate::tools::status::StatusTracker;

/// FurLogic MCP Service
#[derive(Clone)]
pub struct FurLogicService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    database: Database,
    catalog: Arc<dyn IngredientCatalog>,
    tool_router: ToolRouter<FurLogicService>,
}

impl FurLogicService {
    pub fn new(database_path: PathBuf, database: Database, catalog: Arc<dyn IngredientCatalog>) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path))),
            database,
            catalog,
            tool_router: Self::tool_router(),
        }
    }
}

/// Serialize a tool response as pretty JSON text
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Profile Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdatePetProfileParams {
    /// Pet name (optional)
    pub name: Option<String>,
    /// Body weight in kilograms, must be > 0 (optional)
    pub weight_kg: Option<f64>,
    /// Whether the pet is neutered (optional)
    pub neutered: Option<bool>,
    /// Activity level: low, normal or high (optional)
    pub activity_level: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ImportDataParams {
    /// Bundle previously returned by export_data: {"version": ..., "data": {...}}
    pub bundle: serde_json::Value,
}

// ============================================================================
// Energy Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComputeEnergyParams {
    /// Body weight in kilograms, must be > 0
    pub weight_kg: f64,
    /// Whether the pet is neutered (default true)
    #[serde(default = "default_neutered")]
    pub neutered: bool,
    /// Activity level: low, normal or high (default normal)
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
}

fn default_neutered() -> bool { true }
fn default_activity_level() -> String { "normal".to_string() }

// ============================================================================
// Ingredient Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchIngredientsParams {
    /// Text to match against ingredient names (empty matches everything)
    #[serde(default)]
    pub query: String,
    /// Category filter: protein, vegetable, fruit or snack (optional)
    pub category: Option<String>,
    /// Include toxic ingredients in the results (default false)
    #[serde(default)]
    pub include_toxic: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetIngredientParams {
    /// Ingredient ID
    pub id: i64,
}

// ============================================================================
// Kitchen Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToggleIngredientParams {
    /// Ingredient ID to select or deselect
    pub id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateRecipeParams {
    /// Ingredient IDs in display order
    pub ingredient_ids: Vec<i64>,
    /// Calorie budget for the recipe in kcal, must be > 0
    pub target_calories: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PlanMealParams {
    /// Ingredient IDs to use instead of the stored selection (optional)
    pub ingredient_ids: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MineralParams {
    /// Total calcium in milligrams
    pub total_calcium_mg: f64,
    /// Total phosphorus in milligrams
    pub total_phosphorus_mg: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FurLogicService {
    // --- Status ---

    #[tool(description = "Get the current status of the FurLogic service including build info, database status, and process information")]
    async fn furlogic_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(self.catalog.ingredients().len());
        json_result(&status)
    }

    #[tool(description = "Get step-by-step instructions for planning a meal. Call this when starting a session or when unsure how to use the kitchen tools.")]
    fn kitchen_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::KITCHEN_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(KITCHEN_INSTRUCTIONS)]))
    }

    // --- Profile ---

    #[tool(description = "Get the stored pet profile (or the default one) with its energy requirement")]
    fn get_pet_profile(&self) -> Result<CallToolResult, McpError> {
        let result = profile::get_pet_profile(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Update the stored pet profile. Only the given fields change.")]
    fn update_pet_profile(&self, Parameters(p): Parameters<UpdatePetProfileParams>) -> Result<CallToolResult, McpError> {
        let activity_level = p
            .activity_level
            .as_deref()
            .map(energy::parse_activity_level)
            .transpose()
            .map_err(|e| McpError::invalid_params(e, None))?;
        let data = PetProfileUpdate {
            name: p.name,
            weight_kg: p.weight_kg,
            neutered: p.neutered,
            activity_level,
        };
        let result = profile::update_pet_profile(&self.database, data).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Export the stored pet profile and ingredient selection as a JSON bundle")]
    fn export_data(&self) -> Result<CallToolResult, McpError> {
        let result = profile::export_data(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Import a bundle produced by export_data. Sections missing from the bundle are left unchanged.")]
    fn import_data(&self, Parameters(p): Parameters<ImportDataParams>) -> Result<CallToolResult, McpError> {
        let result = profile::import_data(&self.database, self.catalog.as_ref(), &p.bundle).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Forget the stored pet profile and ingredient selection")]
    fn reset_to_defaults(&self) -> Result<CallToolResult, McpError> {
        let result = profile::reset_to_defaults(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Energy ---

    #[tool(description = "Get RER, DER, meal calories and water need for the stored pet profile")]
    fn get_energy(&self) -> Result<CallToolResult, McpError> {
        let result = energy::profile_energy(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Compute RER, DER, meal calories and water need for explicit inputs without changing the stored profile")]
    fn compute_energy(&self, Parameters(p): Parameters<ComputeEnergyParams>) -> Result<CallToolResult, McpError> {
        let result = energy::compute_energy(p.weight_kg, p.neutered, &p.activity_level)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Ingredients ---

    #[tool(description = "Search the ingredient catalog by name, optionally filtered by category. Toxic items are hidden unless include_toxic is true.")]
    fn search_ingredients(&self, Parameters(p): Parameters<SearchIngredientsParams>) -> Result<CallToolResult, McpError> {
        let result = ingredients::search_ingredients(self.catalog.as_ref(), &p.query, p.category.as_deref(), p.include_toxic)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get full details for an ingredient including nutrients per 100g and safety warnings")]
    fn get_ingredient(&self, Parameters(p): Parameters<GetIngredientParams>) -> Result<CallToolResult, McpError> {
        match ingredients::get_ingredient(self.catalog.as_ref(), p.id) {
            Some(ingredient) => json_result(&ingredient),
            None => Ok(CallToolResult::success(vec![Content::text(format!(
                r#"{{"error": "Ingredient not found", "id": {}}}"#,
                p.id
            ))])),
        }
    }

    // --- Kitchen ---

    #[tool(description = "Add an ingredient to the meal selection, or remove it if already selected. Toxic ingredients are refused.")]
    fn toggle_ingredient(&self, Parameters(p): Parameters<ToggleIngredientParams>) -> Result<CallToolResult, McpError> {
        let result = kitchen::toggle_ingredient(&self.database, self.catalog.as_ref(), p.id)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the currently selected ingredients in selection order")]
    fn get_selection(&self) -> Result<CallToolResult, McpError> {
        let result = kitchen::get_selection(&self.database, self.catalog.as_ref())
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Clear the ingredient selection")]
    fn clear_selection(&self) -> Result<CallToolResult, McpError> {
        let result = kitchen::clear_selection(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Plan one meal (half the daily energy) for the stored profile from the selected ingredients, or from ingredient_ids when given. Returns gram amounts, macros, Ca:P analysis and supplements.")]
    fn plan_meal(&self, Parameters(p): Parameters<PlanMealParams>) -> Result<CallToolResult, McpError> {
        let result = kitchen::plan_meal(&self.database, self.catalog.as_ref(), p.ingredient_ids.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Allocate an explicit calorie target across explicit ingredient IDs. Returns gram amounts, macros, Ca:P analysis and supplements.")]
    fn generate_recipe(&self, Parameters(p): Parameters<GenerateRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = kitchen::generate_recipe(self.catalog.as_ref(), &p.ingredient_ids, p.target_calories)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Classify a calcium:phosphorus ratio as low, good (1:1 to 2:1), high, or unknown (no phosphorus)")]
    fn analyze_minerals(&self, Parameters(p): Parameters<MineralParams>) -> Result<CallToolResult, McpError> {
        let result = kitchen::analyze_minerals(p.total_calcium_mg, p.total_phosphorus_mg)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Recommend supplements for given calcium and phosphorus totals: eggshell powder when calcium is low, plus fish oil")]
    fn recommend_supplements(&self, Parameters(p): Parameters<MineralParams>) -> Result<CallToolResult, McpError> {
        let result = kitchen::recommend_supplements(p.total_calcium_mg, p.total_phosphorus_mg)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FurLogicService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "furlogic".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FurLogic".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FurLogic - energy needs and home-cooked meal planning for dogs. \
                 IMPORTANT: Call kitchen_instructions before planning meals. \
                 Profile: get/update_pet_profile, export_data, import_data, reset_to_defaults. \
                 Energy: get_energy (stored profile), compute_energy (explicit inputs). \
                 Ingredients: search_ingredients, get_ingredient. \
                 Kitchen: toggle_ingredient, get_selection, clear_selection, plan_meal, generate_recipe. \
                 Minerals: analyze_minerals, recommend_supplements."
                    .into(),
            ),
        }
    }
}
