//! Nutrition engine
//!
//! Energy requirements, recipe allocation, Ca:P analysis and supplement
//! dosing. Every function here is pure and deterministic.

pub mod allocator;
pub mod energy;
pub mod error;
pub mod minerals;
pub mod planner;
pub mod supplements;

pub use allocator::{allocate, AllocationItem, MacroSummary, RecipeAllocation};
pub use energy::{
    activity_factor, compute_energy, daily_energy, meal_calories, resting_energy, water_need,
    EnergyRequirement,
};
pub use error::{NutritionError, NutritionResult};
pub use minerals::{analyze, MineralAnalysis, MineralStatus};
pub use planner::{generate_recipe, plan_meal, MealPlan, RecipeReport};
pub use supplements::{recommend, SupplementRecommendation};
