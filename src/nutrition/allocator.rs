//! Recipe allocation
//!
//! Splits a calorie target across the selected ingredients and turns each
//! share into grams. Proteins take 70% of the calories when present, the
//! other ingredients share the rest, and every member of a group gets an
//! equal share regardless of its calorie density.

use serde::{Deserialize, Serialize};

use super::error::{NutritionError, NutritionResult};
use crate::models::{Ingredient, NutrientTotals};

/// Share of the calorie target given to proteins when any are selected
pub const PROTEIN_BUDGET_SHARE: f64 = 0.7;
/// Share given to every other ingredient when proteins are selected
pub const OTHER_BUDGET_SHARE: f64 = 0.3;

/// kcal per gram of protein (Atwater)
const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of fat (Atwater)
const KCAL_PER_G_FAT: f64 = 9.0;
/// kcal per gram of carbohydrate (Atwater)
const KCAL_PER_G_CARB: f64 = 4.0;

/// One ingredient of an allocated recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationItem {
    pub ingredient: Ingredient,
    pub amount_grams: u32,
}

/// Gram amounts for each selected ingredient plus the aggregated totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeAllocation {
    /// In the caller's selection order
    pub items: Vec<AllocationItem>,
    pub totals: NutrientTotals,
    pub target_calories: f64,
}

/// Rounded macro summary of an allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSummary {
    pub protein_grams: i64,
    pub fat_grams: i64,
    /// Atwater estimate; negative when protein and fat alone exceed the target
    pub carb_grams: i64,
}

/// Round to nearest, ties toward positive infinity
///
/// Differs from `f64::round` only on negative ties, which the carbohydrate
/// estimate can produce.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl RecipeAllocation {
    pub fn macro_summary(&self) -> MacroSummary {
        let protein = self.totals.protein;
        let fat = self.totals.fat;
        let carb_calories =
            self.target_calories - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT;

        MacroSummary {
            protein_grams: protein.round() as i64,
            fat_grams: fat.round() as i64,
            carb_grams: round_half_up(carb_calories / KCAL_PER_G_CARB),
        }
    }

    /// Total grams of food in the recipe
    pub fn total_grams(&self) -> u32 {
        self.items.iter().map(|item| item.amount_grams).sum()
    }
}

/// Allocate `target_calories` across `selected`
///
/// Toxic ingredients are dropped before allocation. Fails when the target
/// is not positive, when no usable ingredient remains, or when a remaining
/// ingredient has no positive calorie density.
pub fn allocate(selected: &[Ingredient], target_calories: f64) -> NutritionResult<RecipeAllocation> {
    if !(target_calories.is_finite() && target_calories > 0.0) {
        return Err(NutritionError::InvalidTarget(target_calories));
    }

    if selected.is_empty() {
        return Err(NutritionError::InvalidIngredientSet(
            "no ingredients selected".to_string(),
        ));
    }

    let usable: Vec<&Ingredient> = selected
        .iter()
        .filter(|ingredient| {
            if ingredient.is_toxic() {
                tracing::warn!(ingredient = %ingredient.name, "Dropping toxic ingredient from allocation");
                false
            } else {
                true
            }
        })
        .collect();

    if usable.is_empty() {
        return Err(NutritionError::InvalidIngredientSet(
            "every selected ingredient is toxic".to_string(),
        ));
    }

    if let Some(bad) = usable
        .iter()
        .find(|ingredient| !(ingredient.density.calories.is_finite() && ingredient.density.calories > 0.0))
    {
        return Err(NutritionError::InvalidIngredientData {
            name: bad.name.clone(),
            calories: bad.density.calories,
        });
    }

    let protein_count = usable.iter().filter(|ingredient| ingredient.is_protein()).count();
    let other_count = usable.len() - protein_count;

    let (protein_budget, other_budget) = if protein_count > 0 {
        (target_calories * PROTEIN_BUDGET_SHARE, target_calories * OTHER_BUDGET_SHARE)
    } else {
        (0.0, target_calories)
    };

    let items: Vec<AllocationItem> = usable
        .into_iter()
        .map(|ingredient| {
            // Both counts are non-zero for whichever group the ingredient is in
            let share_calories = if ingredient.is_protein() {
                protein_budget / protein_count as f64
            } else {
                other_budget / other_count as f64
            };
            let amount_grams = ((share_calories / ingredient.density.calories) * 100.0).round() as u32;

            AllocationItem {
                ingredient: ingredient.clone(),
                amount_grams,
            }
        })
        .collect();

    let totals: NutrientTotals = items
        .iter()
        .map(|item| item.ingredient.density.for_amount(item.amount_grams))
        .sum();

    tracing::debug!(
        target_calories,
        items = items.len(),
        calcium_mg = totals.calcium,
        phosphorus_mg = totals.phosphorus,
        "Allocated recipe"
    );

    Ok(RecipeAllocation {
        items,
        totals,
        target_calories,
    })
}
