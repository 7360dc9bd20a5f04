//! Nutrient densities and aggregated totals
//!
//! Ingredients carry densities per 100 grams; recipes carry totals for the
//! amounts actually allocated.

use serde::{Deserialize, Serialize};

/// Nutrient content of 100 grams of an ingredient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientDensity {
    pub calories: f64,   // kcal
    pub protein: f64,    // grams
    pub fat: f64,        // grams
    pub calcium: f64,    // milligrams
    pub phosphorus: f64, // milligrams
}

impl NutrientDensity {
    /// Nutrients supplied by `grams` of the ingredient
    ///
    /// Each field is `density * grams / 100`, evaluated in that order.
    pub fn for_amount(&self, grams: u32) -> NutrientTotals {
        let grams = f64::from(grams);
        NutrientTotals {
            protein: self.protein * grams / 100.0,
            fat: self.fat * grams / 100.0,
            calcium: self.calcium * grams / 100.0,
            phosphorus: self.phosphorus * grams / 100.0,
        }
    }
}

/// Aggregated nutrients of an allocated recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub protein: f64,    // grams
    pub fat: f64,        // grams
    pub calcium: f64,    // milligrams
    pub phosphorus: f64, // milligrams
}

impl NutrientTotals {
    fn zero() -> Self {
        Self::default()
    }
}

impl std::ops::Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals {
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            calcium: self.calcium + other.calcium,
            phosphorus: self.phosphorus + other.phosphorus,
        }
    }
}

impl std::iter::Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_amount_scales_per_100g() {
        let chicken = NutrientDensity {
            calories: 105.0,
            protein: 23.0,
            fat: 1.0,
            calcium: 5.0,
            phosphorus: 200.0,
        };
        let totals = chicken.for_amount(233);
        assert!((totals.calcium - 11.65).abs() < 1e-9);
        assert!((totals.phosphorus - 466.0).abs() < 1e-9);
        assert!((totals.protein - 53.59).abs() < 1e-9);
        assert!((totals.fat - 2.33).abs() < 1e-9);
    }

    #[test]
    fn test_zero_grams_supply_nothing() {
        let density = NutrientDensity {
            calories: 26.0,
            protein: 1.0,
            fat: 0.1,
            calcium: 21.0,
            phosphorus: 44.0,
        };
        assert_eq!(density.for_amount(0), NutrientTotals::zero());
    }

    #[test]
    fn test_sum_totals() {
        let a = NutrientTotals { protein: 1.0, fat: 2.0, calcium: 3.0, phosphorus: 4.0 };
        let b = NutrientTotals { protein: 0.5, fat: 0.5, calcium: 0.5, phosphorus: 0.5 };
        let total: NutrientTotals = vec![a, b].into_iter().sum();
        assert_eq!(
            total,
            NutrientTotals { protein: 1.5, fat: 2.5, calcium: 3.5, phosphorus: 4.5 }
        );
    }
}
