//! Kitchen selection model
//!
//! The ordered list of ingredient ids picked for the next meal. Order is
//! the order of selection and is preserved through allocation.

use rusqlite::{params, Connection};

use crate::db::DbResult;

pub struct KitchenSelection;

impl KitchenSelection {
    /// Load the selected ingredient ids in selection order
    pub fn load(conn: &Connection) -> DbResult<Vec<i64>> {
        let mut stmt =
            conn.prepare("SELECT ingredient_id FROM kitchen_selection ORDER BY position ASC")?;

        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i64>, _>>()?;

        Ok(ids)
    }

    /// Replace the whole selection
    pub fn save(conn: &mut Connection, ids: &[i64]) -> DbResult<()> {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM kitchen_selection", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO kitchen_selection (position, ingredient_id) VALUES (?1, ?2)",
            )?;
            for (position, id) in ids.iter().enumerate() {
                stmt.execute(params![position as i64, id])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Add the id at the end of the selection, or remove it if already present.
    /// Returns whether the id is selected afterwards.
    pub fn toggle(conn: &mut Connection, id: i64) -> DbResult<bool> {
        let mut ids = Self::load(conn)?;
        let selected = if let Some(index) = ids.iter().position(|&existing| existing == id) {
            ids.remove(index);
            false
        } else {
            ids.push(id);
            true
        };
        Self::save(conn, &ids)?;
        Ok(selected)
    }

    pub fn clear(conn: &Connection) -> DbResult<()> {
        conn.execute("DELETE FROM kitchen_selection", [])?;
        Ok(())
    }
}
