//! FurLogic Status Tool
//!
//! Runtime status of the service, and usage instructions for assistants.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Meal planning instructions for AI assistants
pub const KITCHEN_INSTRUCTIONS: &str = r#"
# FurLogic Meal Planning Instructions

FurLogic estimates a dog's daily energy and water needs and turns one meal's
calorie budget into gram amounts of home-cooked ingredients.

## 1. Set up the pet profile

Call `update_pet_profile` with:
- `weight_kg` - body weight in kilograms (must be > 0)
- `neutered` - true or false
- `activity_level` - "low", "normal" or "high"

Until a profile is stored, the default profile (Mochi, 12 kg, neutered, normal) is used.

## 2. Check energy needs

`get_energy` returns, for the stored profile:
- RER: `round(70 * weight^0.75)` kcal
- DER: `round(RER * factor)` kcal, where factor is 1.6 (neutered) or 1.8 (intact),
  minus 0.2 for low activity, plus 0.4 for high activity
- meal calories: `round(DER / 2)` (two meals a day)
- water: `round(weight * 60)` ml

Use `compute_energy` for what-if numbers without touching the stored profile.

## 3. Pick ingredients

- `search_ingredients` to browse the catalog. Toxic items are hidden unless
  `include_toxic` is true.
- `toggle_ingredient` to add or remove an ingredient. Toxic items are refused.
- `get_selection` / `clear_selection` to review or reset.

## 4. Plan the meal

`plan_meal` allocates the meal calories:
- proteins share 70% of the calories equally, everything else shares 30%
- with no protein selected, everything else shares 100%
- each share becomes grams: `round(share / kcal_per_100g * 100)`

The response includes the Ca:P ratio (balanced between 1:1 and 2:1) and
supplements: eggshell powder when calcium is low, and always one fish oil.

Use `generate_recipe` to allocate an explicit calorie target for explicit
ingredient ids.
"#;

/// Status information for the FurLogic service
#[derive(Debug, Clone, Serialize)]
pub struct FurLogicStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub catalog_size: usize,
}

/// Tracks service status
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
        }
    }

    pub fn get_status(&self, catalog_size: usize) -> FurLogicStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FurLogicStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            catalog_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_missing_database_file() {
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/furlogic.db"));
        let status = tracker.get_status(10);
        assert_eq!(status.database_size_bytes, None);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.catalog_size, 10);
    }
}
