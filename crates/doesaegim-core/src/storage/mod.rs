//! Persistence layer
//!
//! SQLite-based storage for:
//! - Travel records
//! - Plans linked to their travel
//!
//! `SqliteRepository` exposes both through the repository traits.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::constants::storage::{DATE_FORMAT, DATE_TIME_FORMAT};
use crate::error::{StorageError, StorageResult};

mod database;
mod plans;
mod sqlite;
mod travels;

#[cfg(test)]
mod database_tests;

pub use database::Database;
pub use plans::PlanStore;
pub use sqlite::SqliteRepository;
pub use travels::TravelStore;

/// Decode a stored id column
pub(crate) fn parse_uuid(value: &str) -> StorageResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| StorageError::CorruptRecord(format!("invalid id '{}': {}", value, e)))
}

/// Decode a stored travel date
pub(crate) fn parse_date(value: &str) -> StorageResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| StorageError::CorruptRecord(format!("invalid date '{}': {}", value, e)))
}

/// Decode a stored plan timestamp
pub(crate) fn parse_date_time(value: &str) -> StorageResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .map_err(|e| StorageError::CorruptRecord(format!("invalid timestamp '{}': {}", value, e)))
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn format_date_time(date: NaiveDateTime) -> String {
    date.format(DATE_TIME_FORMAT).to_string()
}
