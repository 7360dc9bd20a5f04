//! Energy MCP Tools
//!
//! Daily energy and water targets, from explicit inputs or the stored profile.

use serde::Serialize;

use crate::db::Database;
use crate::models::{ActivityLevel, PetProfile};
use crate::nutrition::{self, meal_calories};

/// Response for compute_energy and profile_energy
#[derive(Debug, Serialize)]
pub struct EnergyResponse {
    pub weight_kg: f64,
    pub neutered: bool,
    pub activity_level: ActivityLevel,
    pub activity_factor: f64,
    pub resting_energy_kcal: u32,
    pub daily_energy_kcal: u32,
    pub meal_calories_kcal: u32,
    pub water_ml: u32,
}

/// Parse an activity level, naming the accepted values on failure
pub fn parse_activity_level(s: &str) -> Result<ActivityLevel, String> {
    ActivityLevel::from_str(s)
        .ok_or_else(|| format!("Invalid activity level '{}': expected low, normal or high", s))
}

fn energy_response(
    weight_kg: f64,
    neutered: bool,
    activity_level: ActivityLevel,
) -> Result<EnergyResponse, String> {
    let energy = nutrition::compute_energy(weight_kg, neutered, activity_level)
        .map_err(|e| e.to_string())?;
    let factor = nutrition::activity_factor(neutered, activity_level);

    Ok(EnergyResponse {
        weight_kg,
        neutered,
        activity_level,
        activity_factor: (factor * 100.0).round() / 100.0,
        resting_energy_kcal: energy.resting_energy,
        daily_energy_kcal: energy.daily_energy,
        meal_calories_kcal: meal_calories(energy.daily_energy),
        water_ml: energy.water_ml,
    })
}

/// Compute energy needs from explicit inputs
pub fn compute_energy(
    weight_kg: f64,
    neutered: bool,
    activity_level: &str,
) -> Result<EnergyResponse, String> {
    let activity_level = parse_activity_level(activity_level)?;
    energy_response(weight_kg, neutered, activity_level)
}

/// Compute energy needs for the stored profile (or the default one)
pub fn profile_energy(db: &Database) -> Result<EnergyResponse, String> {
    let profile = db
        .with_conn(PetProfile::get_or_default)
        .map_err(|e| format!("Database error: {}", e))?;

    energy_response(profile.weight_kg, profile.neutered, profile.activity_level)
}
