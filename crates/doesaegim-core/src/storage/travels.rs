//! Travel storage
//!
//! Travels are created in a single insert-and-commit step and never updated.

use rusqlite::{params, OptionalExtension};
use tracing::{debug, info};
use uuid::Uuid;

use super::database::Database;
use super::{format_date, parse_date, parse_uuid};
use crate::error::StorageResult;
use crate::model::{Travel, TravelDto};

/// Raw travel columns as stored
type TravelRow = (String, String, String, String);

/// Travel store
pub struct TravelStore<'a> {
    db: &'a Database,
}

impl<'a> TravelStore<'a> {
    /// Create a new travel store with database reference
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a travel and commit it
    ///
    /// Nothing is left behind if the insert or the commit fails.
    pub fn add_and_save(&self, dto: &TravelDto) -> StorageResult<Travel> {
        let tx = self.db.conn().unchecked_transaction()?;
        tx.execute(
            "INSERT INTO travels (id, name, start_date, end_date)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                dto.id.to_string(),
                dto.name,
                format_date(dto.start_date),
                format_date(dto.end_date)
            ],
        )?;
        tx.commit()?;

        info!("Saved travel {} ({})", dto.id, dto.name);
        Ok(Travel {
            id: dto.id,
            name: dto.name.clone(),
            start_date: dto.start_date,
            end_date: dto.end_date,
        })
    }

    /// List all travels, earliest start first
    pub fn list_travels(&self) -> StorageResult<Vec<Travel>> {
        let mut stmt = self.db.conn().prepare(
            "SELECT id, name, start_date, end_date
             FROM travels
             ORDER BY start_date ASC, name ASC",
        )?;

        let rows = stmt
            .query_map([], Self::read_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded {} travels", rows.len());
        rows.into_iter().map(Self::decode_row).collect()
    }

    /// Get a travel by id
    pub fn find_travel(&self, id: Uuid) -> StorageResult<Option<Travel>> {
        let row = self
            .db
            .conn()
            .query_row(
                "SELECT id, name, start_date, end_date FROM travels WHERE id = ?1",
                [id.to_string()],
                Self::read_row,
            )
            .optional()?;

        row.map(Self::decode_row).transpose()
    }

    fn read_row(row: &rusqlite::Row) -> rusqlite::Result<TravelRow> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
    }

    fn decode_row((id, name, start_date, end_date): TravelRow) -> StorageResult<Travel> {
        Ok(Travel {
            id: parse_uuid(&id)?,
            name,
            start_date: parse_date(&start_date)?,
            end_date: parse_date(&end_date)?,
        })
    }
}
