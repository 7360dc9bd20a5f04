//! Energy and water requirements
//!
//! Converts a weight-based profile into resting energy (RER), daily energy
//! (DER) and water need. Each quantity is rounded on its own.

use serde::{Deserialize, Serialize};

use super::error::{NutritionError, NutritionResult};
use crate::models::{ActivityLevel, PetProfile};

/// Coefficient of the RER formula `70 * weight^0.75`
pub const RER_COEFFICIENT: f64 = 70.0;
/// Exponent of the RER formula
pub const RER_EXPONENT: f64 = 0.75;
/// Milliliters of water per kilogram of body weight per day
pub const WATER_ML_PER_KG: f64 = 60.0;
/// Meals the daily energy is split across
pub const MEALS_PER_DAY: u32 = 2;

/// Energy and water targets for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyRequirement {
    /// Resting energy requirement, kcal
    pub resting_energy: u32,
    /// Daily energy requirement, kcal
    pub daily_energy: u32,
    /// Water need, ml
    pub water_ml: u32,
}

fn validate_weight(weight_kg: f64) -> NutritionResult<f64> {
    if weight_kg.is_finite() && weight_kg > 0.0 {
        Ok(weight_kg)
    } else {
        Err(NutritionError::InvalidProfile { weight_kg })
    }
}

/// `round(70 * weight^0.75)`
pub fn resting_energy(weight_kg: f64) -> NutritionResult<u32> {
    let weight = validate_weight(weight_kg)?;
    Ok((RER_COEFFICIENT * weight.powf(RER_EXPONENT)).round() as u32)
}

/// Multiplier applied to RER
///
/// 1.6 neutered or 1.8 intact, minus 0.2 for low activity, plus 0.4 for high.
pub fn activity_factor(neutered: bool, activity: ActivityLevel) -> f64 {
    let base = if neutered { 1.6 } else { 1.8 };
    match activity {
        ActivityLevel::Low => base - 0.2,
        ActivityLevel::Normal => base,
        ActivityLevel::High => base + 0.4,
    }
}

/// `round(rer * factor)`
pub fn daily_energy(resting_energy: u32, factor: f64) -> u32 {
    (f64::from(resting_energy) * factor).round() as u32
}

/// `round(weight * 60)` milliliters
pub fn water_need(weight_kg: f64) -> NutritionResult<u32> {
    let weight = validate_weight(weight_kg)?;
    Ok((weight * WATER_ML_PER_KG).round() as u32)
}

/// Calorie target for a single meal: `round(DER / 2)`
pub fn meal_calories(daily_energy: u32) -> u32 {
    (f64::from(daily_energy) / f64::from(MEALS_PER_DAY)).round() as u32
}

/// Compute energy and water targets from the profile fields
pub fn compute_energy(
    weight_kg: f64,
    neutered: bool,
    activity: ActivityLevel,
) -> NutritionResult<EnergyRequirement> {
    let rer = resting_energy(weight_kg)?;
    let factor = activity_factor(neutered, activity);
    let der = daily_energy(rer, factor);
    let water_ml = water_need(weight_kg)?;

    tracing::debug!(
        weight_kg,
        neutered,
        activity = activity.as_str(),
        rer,
        der,
        water_ml,
        "Computed energy requirement"
    );

    Ok(EnergyRequirement {
        resting_energy: rer,
        daily_energy: der,
        water_ml,
    })
}

impl PetProfile {
    pub fn energy_requirement(&self) -> NutritionResult<EnergyRequirement> {
        compute_energy(self.weight_kg, self.neutered, self.activity_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [ActivityLevel; 3] =
        [ActivityLevel::Low, ActivityLevel::Normal, ActivityLevel::High];

    #[test]
    fn test_reference_profile() {
        let energy = compute_energy(12.0, true, ActivityLevel::Normal).unwrap();
        assert_eq!(energy.resting_energy, 451);
        assert_eq!(energy.daily_energy, 722);
        assert_eq!(energy.water_ml, 720);
    }

    #[test]
    fn test_default_profile_matches_reference() {
        let energy = PetProfile::default().energy_requirement().unwrap();
        assert_eq!(energy.daily_energy, 722);
        assert_eq!(meal_calories(energy.daily_energy), 361);
    }

    #[test]
    fn test_activity_factors() {
        let expected = [
            (true, ActivityLevel::Low, 1.4),
            (true, ActivityLevel::Normal, 1.6),
            (true, ActivityLevel::High, 2.0),
            (false, ActivityLevel::Low, 1.6),
            (false, ActivityLevel::Normal, 1.8),
            (false, ActivityLevel::High, 2.2),
        ];
        for (neutered, level, factor) in expected {
            assert!((activity_factor(neutered, level) - factor).abs() < 1e-9);
        }
    }

    #[test]
    fn test_daily_energy_is_rounded_product() {
        for weight in [0.5, 3.2, 12.0, 27.8, 45.0] {
            let rer = resting_energy(weight).unwrap();
            for neutered in [true, false] {
                for level in LEVELS {
                    let energy = compute_energy(weight, neutered, level).unwrap();
                    let factor = activity_factor(neutered, level);
                    assert_eq!(energy.resting_energy, rer);
                    assert_eq!(energy.daily_energy, (f64::from(rer) * factor).round() as u32);
                }
            }
        }
    }

    #[test]
    fn test_rer_strictly_increasing() {
        let mut previous = 0;
        for step in 1..=80u32 {
            let rer = resting_energy(f64::from(step) * 0.5).unwrap();
            assert!(rer > previous, "RER did not increase at {} kg", f64::from(step) * 0.5);
            previous = rer;
        }
    }

    #[test]
    fn test_water_need() {
        assert_eq!(water_need(12.0).unwrap(), 720);
        assert_eq!(water_need(4.33).unwrap(), 260);
        assert_eq!(water_need(0.1).unwrap(), 6);
    }

    #[test]
    fn test_non_positive_weight_is_rejected() {
        for weight in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = compute_energy(weight, true, ActivityLevel::Normal).unwrap_err();
            assert!(matches!(err, NutritionError::InvalidProfile { .. }));
        }
    }

    #[test]
    fn test_meal_calories_halves_daily_energy() {
        assert_eq!(meal_calories(722), 361);
        assert_eq!(meal_calories(723), 362);
    }
}
