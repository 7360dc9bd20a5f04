//! Supplement recommendations
//!
//! Sizes eggshell powder for calcium-deficient recipes and always adds a
//! fish oil entry last.

use serde::{Deserialize, Serialize};

use super::minerals::{format_tenths, MineralAnalysis, MineralStatus};

/// Ca:P ratio the eggshell dose aims for
pub const TARGET_CALCIUM_RATIO: f64 = 1.2;
/// Elemental calcium in one gram of eggshell powder, mg
pub const EGGSHELL_CALCIUM_MG_PER_G: f64 = 350.0;

pub const EGGSHELL_POWDER: &str = "Eggshell powder";
pub const FISH_OIL: &str = "Fish oil";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementRecommendation {
    pub name: String,
    /// Formatted quantity, e.g. "1.9g"
    pub amount: String,
    pub rationale: String,
}

/// Grams of eggshell powder that lift calcium to 1.2x phosphorus
pub fn eggshell_powder_grams(total_calcium_mg: f64, total_phosphorus_mg: f64) -> f64 {
    let target_calcium = total_phosphorus_mg * TARGET_CALCIUM_RATIO;
    let missing_calcium = target_calcium - total_calcium_mg;
    missing_calcium / EGGSHELL_CALCIUM_MG_PER_G
}

/// Supplements for a recipe, in display order
pub fn recommend(
    analysis: &MineralAnalysis,
    total_calcium_mg: f64,
    total_phosphorus_mg: f64,
) -> Vec<SupplementRecommendation> {
    let mut supplements = Vec::with_capacity(2);

    if analysis.status == MineralStatus::Low {
        let grams = eggshell_powder_grams(total_calcium_mg, total_phosphorus_mg);
        supplements.push(SupplementRecommendation {
            name: EGGSHELL_POWDER.to_string(),
            amount: format!("{}g", format_tenths(grams)),
            rationale: "balances Ca:P ratio".to_string(),
        });
    }

    supplements.push(SupplementRecommendation {
        name: FISH_OIL.to_string(),
        amount: "1 unit".to_string(),
        rationale: "supplies omega-3".to_string(),
    });

    supplements
}
