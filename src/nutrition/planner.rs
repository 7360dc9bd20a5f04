//! Meal planning pipeline
//!
//! profile -> energy -> calorie target -> allocation -> Ca:P analysis -> supplements

use serde::{Deserialize, Serialize};

use super::allocator::{allocate, MacroSummary, RecipeAllocation};
use super::energy::{meal_calories, EnergyRequirement};
use super::error::NutritionResult;
use super::minerals::{analyze, MineralAnalysis};
use super::supplements::{recommend, SupplementRecommendation};
use crate::models::{Ingredient, PetProfile};

/// An allocated recipe with everything derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeReport {
    pub allocation: RecipeAllocation,
    /// Weight of the whole meal, g
    pub total_grams: u32,
    pub macros: MacroSummary,
    pub analysis: MineralAnalysis,
    pub supplements: Vec<SupplementRecommendation>,
}

/// A single meal planned from a pet profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub profile: PetProfile,
    pub energy: EnergyRequirement,
    pub meal_calories: u32,
    pub recipe: RecipeReport,
}

/// Allocate `target_calories` across `selected` and analyze the result
pub fn generate_recipe(selected: &[Ingredient], target_calories: f64) -> NutritionResult<RecipeReport> {
    let allocation = allocate(selected, target_calories)?;
    let total_grams = allocation.total_grams();
    let macros = allocation.macro_summary();
    let totals = allocation.totals;
    let analysis = analyze(totals.calcium, totals.phosphorus);
    let supplements = recommend(&analysis, totals.calcium, totals.phosphorus);

    Ok(RecipeReport {
        allocation,
        total_grams,
        macros,
        analysis,
        supplements,
    })
}

/// Plan one of the day's meals for `profile`
pub fn plan_meal(profile: &PetProfile, selected: &[Ingredient]) -> NutritionResult<MealPlan> {
    let energy = profile.energy_requirement()?;
    let meal_calories = meal_calories(energy.daily_energy);
    let recipe = generate_recipe(selected, f64::from(meal_calories))?;

    tracing::info!(
        pet = %profile.name,
        daily_energy = energy.daily_energy,
        meal_calories,
        status = recipe.analysis.status.as_str(),
        "Planned meal"
    );

    Ok(MealPlan {
        profile: profile.clone(),
        energy,
        meal_calories,
        recipe,
    })
}
