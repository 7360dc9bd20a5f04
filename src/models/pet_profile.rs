//! Pet profile model
//!
//! The weight-based profile energy needs are derived from. Stored as a
//! single row so the server remembers the last profile entered.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};

/// Daily activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    #[default]
    Normal,
    High,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Normal => "normal",
            ActivityLevel::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(ActivityLevel::Low),
            "normal" => Some(ActivityLevel::Normal),
            "high" => Some(ActivityLevel::High),
            _ => None,
        }
    }
}

/// A pet's weight-based profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetProfile {
    pub name: String,
    pub weight_kg: f64,
    pub neutered: bool,
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl Default for PetProfile {
    fn default() -> Self {
        Self {
            name: "Mochi".to_string(),
            weight_kg: 12.0,
            neutered: true,
            activity_level: ActivityLevel::Normal,
        }
    }
}

/// Data for updating the stored profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PetProfileUpdate {
    pub name: Option<String>,
    pub weight_kg: Option<f64>,
    pub neutered: Option<bool>,
    pub activity_level: Option<ActivityLevel>,
}

impl PetProfile {
    /// Apply a partial update, returning the merged profile
    pub fn merged(&self, update: &PetProfileUpdate) -> Self {
        Self {
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            weight_kg: update.weight_kg.unwrap_or(self.weight_kg),
            neutered: update.neutered.unwrap_or(self.neutered),
            activity_level: update.activity_level.unwrap_or(self.activity_level),
        }
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let activity: String = row.get("activity_level")?;
        Ok(Self {
            name: row.get("name")?,
            weight_kg: row.get("weight_kg")?,
            neutered: row.get("neutered")?,
            // The CHECK constraint keeps this column to known values
            activity_level: ActivityLevel::from_str(&activity).unwrap_or_default(),
        })
    }

    /// Get the stored profile (single row table)
    pub fn get(conn: &Connection) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT name, weight_kg, neutered, activity_level FROM pet_profile WHERE id = 1",
        )?;

        match stmt.query_row([], Self::from_row) {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get the stored profile, falling back to the default one
    pub fn get_or_default(conn: &Connection) -> DbResult<Self> {
        Ok(Self::get(conn)?.unwrap_or_default())
    }

    /// Store the profile (upsert)
    pub fn save(conn: &Connection, profile: &PetProfile) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO pet_profile (id, name, weight_kg, neutered, activity_level)
            VALUES (1, ?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                weight_kg = excluded.weight_kg,
                neutered = excluded.neutered,
                activity_level = excluded.activity_level,
                updated_at = datetime('now')
            "#,
            params![
                profile.name,
                profile.weight_kg,
                profile.neutered,
                profile.activity_level.as_str(),
            ],
        )?;

        Self::get(conn)?.ok_or(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    /// Remove the stored profile so the default applies again
    pub fn clear(conn: &Connection) -> DbResult<()> {
        conn.execute("DELETE FROM pet_profile", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_default_profile() {
        let profile = PetProfile::default();
        assert_eq!(profile.name, "Mochi");
        assert_eq!(profile.weight_kg, 12.0);
        assert!(profile.neutered);
        assert_eq!(profile.activity_level, ActivityLevel::Normal);
    }

    #[test]
    fn test_get_without_row_returns_none() {
        let conn = conn();
        assert_eq!(PetProfile::get(&conn).unwrap(), None);
        assert_eq!(PetProfile::get_or_default(&conn).unwrap(), PetProfile::default());
    }

    #[test]
    fn test_save_and_overwrite() {
        let conn = conn();
        let profile = PetProfile {
            name: "Biscuit".to_string(),
            weight_kg: 7.5,
            neutered: false,
            activity_level: ActivityLevel::High,
        };
        assert_eq!(PetProfile::save(&conn, &profile).unwrap(), profile);

        let lighter = PetProfile { weight_kg: 7.0, ..profile };
        PetProfile::save(&conn, &lighter).unwrap();
        assert_eq!(PetProfile::get(&conn).unwrap(), Some(lighter));

        PetProfile::clear(&conn).unwrap();
        assert_eq!(PetProfile::get(&conn).unwrap(), None);
    }

    #[test]
    fn test_merged_keeps_unset_fields() {
        let update = PetProfileUpdate {
            weight_kg: Some(20.0),
            activity_level: Some(ActivityLevel::Low),
            ..Default::default()
        };
        let merged = PetProfile::default().merged(&update);
        assert_eq!(merged.name, "Mochi");
        assert_eq!(merged.weight_kg, 20.0);
        assert!(merged.neutered);
        assert_eq!(merged.activity_level, ActivityLevel::Low);
    }

    #[test]
    fn test_activity_level_parsing() {
        assert_eq!(ActivityLevel::from_str("HIGH"), Some(ActivityLevel::High));
        assert_eq!(ActivityLevel::from_str("lazy"), None);
    }
}
