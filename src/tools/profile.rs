//! Pet Profile MCP Tools
//!
//! Reading and updating the stored profile, plus export, import and reset
//! of everything the server remembers.

use serde::{Deserialize, Serialize};

use crate::build_info;
use crate::catalog::IngredientCatalog;
use crate::db::Database;
use crate::models::{KitchenSelection, PetProfile, PetProfileUpdate};
use crate::nutrition::EnergyRequirement;

/// Response for get_pet_profile and update_pet_profile
#[derive(Debug, Serialize)]
pub struct PetProfileResponse {
    pub profile: PetProfile,
    /// True when nothing has been stored yet
    pub is_default: bool,
    pub energy: EnergyRequirement,
}

/// Everything the server persists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    #[serde(default)]
    pub pet_profile: Option<PetProfile>,
    #[serde(default)]
    pub kitchen_ingredients: Option<Vec<i64>>,
}

/// Export file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub version: String,
    pub timestamp: String,
    pub data: ExportData,
}

/// Response for import_data
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub imported_profile: bool,
    /// Ingredients in the stored selection after the import
    pub imported_ingredients: usize,
    /// Unknown or toxic ids left out of the selection
    pub skipped_ingredients: Vec<i64>,
}

/// Response for reset_to_defaults
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub profile: PetProfile,
}

fn validate_profile(profile: &PetProfile) -> Result<EnergyRequirement, String> {
    if profile.name.trim().is_empty() {
        return Err("Pet name cannot be empty".to_string());
    }
    profile.energy_requirement().map_err(|e| e.to_string())
}

/// Get the stored profile with its energy needs
pub fn get_pet_profile(db: &Database) -> Result<PetProfileResponse, String> {
    let stored = db
        .with_conn(PetProfile::get)
        .map_err(|e| format!("Database error: {}", e))?;

    let is_default = stored.is_none();
    let profile = stored.unwrap_or_default();
    let energy = profile.energy_requirement().map_err(|e| e.to_string())?;

    Ok(PetProfileResponse {
        profile,
        is_default,
        energy,
    })
}

/// Update the stored profile; unset fields keep their current value
pub fn update_pet_profile(db: &Database, data: PetProfileUpdate) -> Result<PetProfileResponse, String> {
    let current = db
        .with_conn(PetProfile::get_or_default)
        .map_err(|e| format!("Database error: {}", e))?;

    let merged = current.merged(&data);
    let energy = validate_profile(&merged)?;

    let profile = db
        .with_conn(|conn| PetProfile::save(conn, &merged))
        .map_err(|e| format!("Failed to save pet profile: {}", e))?;

    tracing::info!(pet = %profile.name, weight_kg = profile.weight_kg, "Updated pet profile");

    Ok(PetProfileResponse {
        profile,
        is_default: false,
        energy,
    })
}

/// Export the stored profile and kitchen selection
pub fn export_data(db: &Database) -> Result<ExportBundle, String> {
    let (pet_profile, kitchen_ingredients) = db
        .with_conn(|conn| {
            let profile = PetProfile::get_or_default(conn)?;
            let ids = KitchenSelection::load(conn)?;
            Ok((profile, ids))
        })
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(ExportBundle {
        version: build_info::VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        data: ExportData {
            pet_profile: Some(pet_profile),
            kitchen_ingredients: Some(kitchen_ingredients),
        },
    })
}

/// Import a previously exported bundle
///
/// Sections missing from the bundle leave the stored values untouched.
/// Selection ids the catalog does not offer for meals are skipped.
pub fn import_data(
    db: &Database,
    catalog: &dyn IngredientCatalog,
    bundle: &serde_json::Value,
) -> Result<ImportResponse, String> {
    let version = bundle.get("version").filter(|v| !v.is_null());
    let data = bundle.get("data").filter(|v| !v.is_null());
    let (Some(version), Some(data)) = (version, data) else {
        return Err("Invalid data format: bundle needs both 'version' and 'data'".to_string());
    };

    let data: ExportData = serde_json::from_value(data.clone())
        .map_err(|e| format!("Invalid data format: {}", e))?;

    if let Some(profile) = &data.pet_profile {
        validate_profile(profile)?;
    }

    let selectable = catalog.selectable();
    let (kept, skipped): (Vec<i64>, Vec<i64>) = data
        .kitchen_ingredients
        .as_deref()
        .unwrap_or_default()
        .iter()
        .copied()
        .partition(|id| selectable.iter().any(|ingredient| ingredient.id == *id));

    if !skipped.is_empty() {
        tracing::warn!(?skipped, "Skipping unknown or toxic ingredients in import");
    }

    let stored_ids = db
        .with_conn_mut(|conn| {
            if let Some(profile) = &data.pet_profile {
                PetProfile::save(conn, profile)?;
            }
            if data.kitchen_ingredients.is_some() {
                KitchenSelection::save(conn, &kept)?;
            }
            KitchenSelection::load(conn)
        })
        .map_err(|e| format!("Failed to import data: {}", e))?;

    tracing::info!(version = %version, "Imported data bundle");

    Ok(ImportResponse {
        success: true,
        imported_profile: data.pet_profile.is_some(),
        imported_ingredients: if data.kitchen_ingredients.is_some() { stored_ids.len() } else { 0 },
        skipped_ingredients: skipped,
    })
}

/// Forget the stored profile and selection
pub fn reset_to_defaults(db: &Database) -> Result<ResetResponse, String> {
    db.with_conn(|conn| {
        PetProfile::clear(conn)?;
        KitchenSelection::clear(conn)
    })
    .map_err(|e| format!("Failed to reset: {}", e))?;

    tracing::info!("Reset stored data to defaults");

    Ok(ResetResponse {
        success: true,
        profile: PetProfile::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinCatalog;
    use crate::models::ActivityLevel;

    #[test]
    fn test_get_profile_defaults() {
        let db = Database::in_memory().unwrap();
        let response = get_pet_profile(&db).unwrap();
        assert!(response.is_default);
        assert_eq!(response.profile, PetProfile::default());
        assert_eq!(response.energy.resting_energy, 451);
    }

    #[test]
    fn test_update_profile() {
        let db = Database::in_memory().unwrap();
        let update = PetProfileUpdate {
            weight_kg: Some(20.0),
            activity_level: Some(ActivityLevel::High),
            ..Default::default()
        };
        let response = update_pet_profile(&db, update).unwrap();
        assert!(!response.is_default);
        assert_eq!(response.profile.name, "Mochi");
        assert_eq!(response.profile.weight_kg, 20.0);

        let stored = get_pet_profile(&db).unwrap();
        assert!(!stored.is_default);
        assert_eq!(stored.profile.activity_level, ActivityLevel::High);
    }

    #[test]
    fn test_update_rejects_bad_weight() {
        let db = Database::in_memory().unwrap();
        let update = PetProfileUpdate {
            weight_kg: Some(-1.0),
            ..Default::default()
        };
        assert!(update_pet_profile(&db, update).unwrap_err().contains("weight"));
        assert!(get_pet_profile(&db).unwrap().is_default);
    }

    #[test]
    fn test_export_import_round_trip() {
        let source = Database::in_memory().unwrap();
        update_pet_profile(
            &source,
            PetProfileUpdate {
                name: Some("Biscuit".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        source
            .with_conn_mut(|conn| KitchenSelection::save(conn, &[6, 4]))
            .unwrap();

        let bundle = export_data(&source).unwrap();
        let json = serde_json::to_value(&bundle).unwrap();

        let target = Database::in_memory().unwrap();
        let response = import_data(&target, &BuiltinCatalog::new(), &json).unwrap();
        assert!(response.imported_profile);
        assert_eq!(response.imported_ingredients, 2);

        assert_eq!(export_data(&target).unwrap().data, bundle.data);
    }

    #[test]
    fn test_import_requires_version_and_data() {
        let db = Database::in_memory().unwrap();
        let missing_version = serde_json::json!({ "data": {} });
        let missing_data = serde_json::json!({ "version": "1.0.1" });
        assert!(import_data(&db, &BuiltinCatalog::new(), &missing_version).is_err());
        assert!(import_data(&db, &BuiltinCatalog::new(), &missing_data).is_err());
    }

    #[test]
    fn test_import_partial_bundle() {
        let db = Database::in_memory().unwrap();
        let bundle = serde_json::json!({
            "version": "1.0.1",
            "data": { "kitchen_ingredients": [1, 3] }
        });
        let response = import_data(&db, &BuiltinCatalog::new(), &bundle).unwrap();
        assert!(!response.imported_profile);
        assert!(get_pet_profile(&db).unwrap().is_default);
    }

    #[test]
    fn test_import_counts_stored_ingredients() {
        let db = Database::in_memory().unwrap();
        // 3 twice, 8 is toxic, 77 is not in the catalog
        let bundle = serde_json::json!({
            "version": "1.0.1",
            "data": { "kitchen_ingredients": [1, 3, 3, 8, 77] }
        });
        let response = import_data(&db, &BuiltinCatalog::new(), &bundle).unwrap();
        assert_eq!(response.imported_ingredients, 2);
        assert_eq!(response.skipped_ingredients, vec![8, 77]);

        let stored = db.with_conn(KitchenSelection::load).unwrap();
        assert_eq!(stored, vec![1, 3]);
    }

    #[test]
    fn test_reset() {
        let db = Database::in_memory().unwrap();
        update_pet_profile(
            &db,
            PetProfileUpdate {
                weight_kg: Some(5.0),
                ..Default::default()
            },
        )
        .unwrap();
        reset_to_defaults(&db).unwrap();
        assert!(get_pet_profile(&db).unwrap().is_default);
    }
}
