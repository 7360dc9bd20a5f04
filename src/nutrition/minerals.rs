//! Calcium to phosphorus balance
//!
//! Classifies the Ca:P ratio of a recipe. A ratio between 1:1 and 2:1
//! (inclusive) is balanced. Zero phosphorus yields `Unknown`, which is a
//! normal outcome rather than an error.

use serde::{Deserialize, Serialize};

/// Lowest balanced Ca:P ratio
pub const MIN_BALANCED_RATIO: f64 = 1.0;
/// Highest balanced Ca:P ratio
pub const MAX_BALANCED_RATIO: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MineralStatus {
    /// Calcium deficient
    Low,
    Good,
    /// Calcium excess
    High,
    /// No phosphorus, so no ratio
    Unknown,
}

impl MineralStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MineralStatus::Low => "low",
            MineralStatus::Good => "good",
            MineralStatus::High => "high",
            MineralStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineralAnalysis {
    /// Ca:P ratio rounded to two decimals, 0 when unknown
    pub ratio: f64,
    pub status: MineralStatus,
    pub advice: String,
}

impl MineralAnalysis {
    /// Ratio formatted for display, e.g. "0.15"
    pub fn ratio_display(&self) -> String {
        format!("{:.2}", self.ratio)
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One decimal with ties rounded up, so 0.25 reads as 0.3
pub(crate) fn format_tenths(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// Classify the Ca:P ratio of the given totals
pub fn analyze(total_calcium_mg: f64, total_phosphorus_mg: f64) -> MineralAnalysis {
    if total_phosphorus_mg == 0.0 {
        return MineralAnalysis {
            ratio: 0.0,
            status: MineralStatus::Unknown,
            advice: "Cannot compute the Ca:P ratio: the recipe contains no phosphorus.".to_string(),
        };
    }

    let ratio = total_calcium_mg / total_phosphorus_mg;

    let (status, advice) = if total_calcium_mg == 0.0 {
        (
            MineralStatus::Low,
            "Calcium deficient: the recipe contains no calcium. \
             Add calcium powder or eggshell powder to balance it."
                .to_string(),
        )
    } else if ratio < MIN_BALANCED_RATIO {
        (
            MineralStatus::Low,
            format!(
                "Calcium deficient, ratio is 1:{}. Meat is rich in phosphorus; \
                 add calcium powder or eggshell powder to balance it.",
                format_tenths(1.0 / ratio)
            ),
        )
    } else if ratio > MAX_BALANCED_RATIO {
        (
            MineralStatus::High,
            format!(
                "Calcium too high, ratio is {}:1. Reduce bones or calcium powder.",
                format_tenths(ratio)
            ),
        )
    } else {
        (MineralStatus::Good, "Ca:P ratio is well balanced.".to_string())
    };

    tracing::debug!(ratio, status = status.as_str(), "Analyzed Ca:P ratio");

    MineralAnalysis {
        ratio: round_to_hundredths(ratio),
        status,
        advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(analyze(100.0, 100.0).status, MineralStatus::Good);
        assert_eq!(analyze(200.0, 100.0).status, MineralStatus::Good);
        assert_eq!(analyze(99.0, 100.0).status, MineralStatus::Low);
        assert_eq!(analyze(201.0, 100.0).status, MineralStatus::High);
        assert_eq!(analyze(50.0, 0.0).status, MineralStatus::Unknown);
    }

    #[test]
    fn test_classification_uses_unrounded_ratio() {
        // 2.004 displays as 2.00 but is above the range
        let analysis = analyze(200.4, 100.0);
        assert_eq!(analysis.status, MineralStatus::High);
        assert_eq!(analysis.ratio_display(), "2.00");

        // 0.996 displays as 1.00 but is below the range
        let analysis = analyze(99.6, 100.0);
        assert_eq!(analysis.status, MineralStatus::Low);
        assert_eq!(analysis.ratio, 1.0);
    }

    #[test]
    fn test_low_ratio_reports_inverse() {
        let analysis = analyze(100.0, 150.0);
        assert_eq!(analysis.status, MineralStatus::Low);
        assert_eq!(analysis.ratio, 0.67);
        assert!(analysis.advice.contains("1:1.5"), "{}", analysis.advice);
    }

    #[test]
    fn test_high_ratio_reports_ratio() {
        let analysis = analyze(300.0, 100.0);
        assert_eq!(analysis.status, MineralStatus::High);
        assert_eq!(analysis.ratio, 3.0);
        assert!(analysis.advice.contains("3.0:1"), "{}", analysis.advice);
    }

    #[test]
    fn test_advice_rounds_ties_up() {
        // 1 / 0.8 = 1.25 and 225 / 100 = 2.25 sit exactly on a tie
        assert!(analyze(80.0, 100.0).advice.contains("1:1.3"));
        assert!(analyze(225.0, 100.0).advice.contains("2.3:1"));
        assert_eq!(format_tenths(0.25), "0.3");
        assert_eq!(format_tenths(0.24), "0.2");
    }

    #[test]
    fn test_zero_phosphorus_is_unknown() {
        let analysis = analyze(0.0, 0.0);
        assert_eq!(analysis.status, MineralStatus::Unknown);
        assert_eq!(analysis.ratio, 0.0);
        assert!(!analysis.advice.is_empty());
    }

    #[test]
    fn test_zero_calcium_is_low() {
        let analysis = analyze(0.0, 120.0);
        assert_eq!(analysis.status, MineralStatus::Low);
        assert_eq!(analysis.ratio, 0.0);
        assert!(!analysis.advice.contains("inf"), "{}", analysis.advice);
        assert!(analysis.advice.contains("no calcium"));
    }

    #[test]
    fn test_small_calcium_reports_inverse_ratio() {
        let analysis = analyze(10.0, 100.0);
        assert_eq!(analysis.status, MineralStatus::Low);
        assert!(analysis.advice.contains("1:10.0"), "{}", analysis.advice);
        assert!(!analysis.advice.contains("no calcium"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MineralStatus::Unknown).unwrap(), "\"unknown\"");
    }
}
