//! Engine error types
//!
//! Every variant is a precondition failure the caller can fix by changing
//! its input. Nothing here is transient, so nothing is retried.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    #[error("Invalid pet profile: weight must be a positive number of kilograms, got {weight_kg}")]
    InvalidProfile { weight_kg: f64 },

    #[error("Invalid ingredient selection: {0}")]
    InvalidIngredientSet(String),

    #[error("Invalid data for ingredient '{name}': calories per 100g must be positive, got {calories}")]
    InvalidIngredientData { name: String, calories: f64 },

    #[error("Invalid calorie target: must be a positive number of kcal, got {0}")]
    InvalidTarget(f64),
}

pub type NutritionResult<T> = Result<T, NutritionError>;
