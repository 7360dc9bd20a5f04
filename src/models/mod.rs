//! Data models
//!
//! Ingredients, nutrient values, the pet profile and the kitchen selection.

mod ingredient;
mod kitchen_selection;
mod nutrition;
mod pet_profile;

pub use ingredient::{Category, Ingredient, SafetyLevel};
pub use kitchen_selection::KitchenSelection;
pub use nutrition::{NutrientDensity, NutrientTotals};
pub use pet_profile::{ActivityLevel, PetProfile, PetProfileUpdate};
