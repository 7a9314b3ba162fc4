//! Plan storage
//!
//! Plans are listed per travel in date order; the list view model relies on
//! that order to build its sections.

use rusqlite::params;
use tracing::{debug, info};
use uuid::Uuid;

use super::database::Database;
use super::{format_date_time, parse_date_time, parse_uuid};
use crate::error::{StorageError, StorageResult};
use crate::model::{Plan, PlanDto};

/// Raw plan columns as stored
struct PlanRow {
    id: String,
    travel_id: String,
    name: String,
    date: Option<String>,
    content: Option<String>,
    location: Option<String>,
    is_complete: bool,
}

/// Plan store
pub struct PlanStore<'a> {
    db: &'a Database,
}

impl<'a> PlanStore<'a> {
    /// Create a new plan store with database reference
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Save a new plan
    pub fn add_plan(&self, dto: &PlanDto) -> StorageResult<Plan> {
        self.db.conn().execute(
            "INSERT INTO plans (id, travel_id, name, date, content, location, is_complete)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0)",
            params![
                dto.id.to_string(),
                dto.travel_id.to_string(),
                dto.name,
                dto.date.map(format_date_time),
                dto.content,
                dto.location
            ],
        )?;

        debug!("Saved plan {} for travel {}", dto.id, dto.travel_id);
        Ok(dto.clone().into_plan())
    }

    /// Load all plans of a travel
    ///
    /// Ordered by date ascending, undated plans last, then insertion order.
    pub fn list_plans(&self, travel_id: Uuid) -> StorageResult<Vec<Plan>> {
        let mut stmt = self.db.conn().prepare(
            "SELECT id, travel_id, name, date, content, location, is_complete
             FROM plans
             WHERE travel_id = ?1
             ORDER BY date IS NULL, date ASC, rowid ASC",
        )?;

        let rows = stmt
            .query_map([travel_id.to_string()], |row| {
                Ok(PlanRow {
                    id: row.get(0)?,
                    travel_id: row.get(1)?,
                    name: row.get(2)?,
                    date: row.get(3)?,
                    content: row.get(4)?,
                    location: row.get(5)?,
                    is_complete: row.get::<_, i32>(6)? != 0,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded {} plans for travel {}", rows.len(), travel_id);
        rows.into_iter().map(Self::decode_row).collect()
    }

    /// Delete a plan
    pub fn delete_plan(&self, id: Uuid) -> StorageResult<()> {
        let deleted = self
            .db
            .conn()
            .execute("DELETE FROM plans WHERE id = ?1", [id.to_string()])?;

        if deleted == 0 {
            return Err(StorageError::NotFound(format!("plan {}", id)));
        }
        info!("Deleted plan {}", id);
        Ok(())
    }

    /// Mark a plan complete or pending
    pub fn set_complete(&self, id: Uuid, is_complete: bool) -> StorageResult<()> {
        let updated = self.db.conn().execute(
            "UPDATE plans SET is_complete = ?1 WHERE id = ?2",
            params![is_complete as i32, id.to_string()],
        )?;

        if updated == 0 {
            return Err(StorageError::NotFound(format!("plan {}", id)));
        }
        Ok(())
    }

    fn decode_row(row: PlanRow) -> StorageResult<Plan> {
        Ok(Plan {
            id: parse_uuid(&row.id)?,
            travel_id: parse_uuid(&row.travel_id)?,
            name: row.name,
            date: row.date.as_deref().map(parse_date_time).transpose()?,
            content: row.content,
            location: row.location,
            is_complete: row.is_complete,
        })
    }
}
