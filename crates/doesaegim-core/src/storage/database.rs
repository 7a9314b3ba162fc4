//! SQLite database wrapper with versioned migrations

use rusqlite::Connection;
use std::path::Path;
use tracing::info;

use crate::constants::storage::BUSY_TIMEOUT;
use crate::error::StorageResult;

/// Current schema version
const SCHEMA_VERSION: i32 = 2;

/// SQLite database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path
    pub fn new(path: &Path) -> StorageResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        // Plans are removed together with their travel
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.busy_timeout(BUSY_TIMEOUT)?;

        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    /// Get the underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Get the current schema version from database
    pub(crate) fn get_schema_version(&self) -> StorageResult<i32> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        let version = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )?;
        Ok(version)
    }

    /// Record a migration as applied
    fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
        Ok(())
    }

    /// Whether `table` already has `column`
    fn has_column(conn: &Connection, table: &str, column: &str) -> StorageResult<bool> {
        let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(columns.iter().any(|name| name == column))
    }

    /// Apply one migration and record its version in a single transaction
    fn apply_migration(
        &self,
        version: i32,
        migrate: impl FnOnce(&Connection) -> StorageResult<()>,
    ) -> StorageResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        migrate(&tx)?;
        Self::set_schema_version(&tx, version)?;
        tx.commit()?;
        Ok(())
    }

    /// Run database migrations incrementally
    pub(crate) fn run_migrations(&self) -> StorageResult<()> {
        let current_version = self.get_schema_version()?;
        info!(
            "Database schema version: {} (target: {})",
            current_version, SCHEMA_VERSION
        );

        if current_version >= SCHEMA_VERSION {
            return Ok(());
        }

        // Migration 1: Initial schema
        if current_version < 1 {
            info!("Running migration 1: Initial schema");
            self.apply_migration(1, |conn| {
                conn.execute_batch(
                    r#"
                    -- Travels table
                    CREATE TABLE IF NOT EXISTS travels (
                        id TEXT PRIMARY KEY,
                        name TEXT NOT NULL,
                        start_date TEXT NOT NULL,
                        end_date TEXT NOT NULL
                    );

                    -- Plans table, one travel to many plans
                    CREATE TABLE IF NOT EXISTS plans (
                        id TEXT PRIMARY KEY,
                        travel_id TEXT NOT NULL,
                        name TEXT NOT NULL,
                        date TEXT,
                        content TEXT,
                        FOREIGN KEY (travel_id) REFERENCES travels(id) ON DELETE CASCADE
                    );

                    -- Index for travel listing
                    CREATE INDEX IF NOT EXISTS idx_travels_start
                        ON travels(start_date);
                    "#,
                )?;
                Ok(())
            })?;
        }

        // Migration 2: Plan location and completion
        if current_version < 2 {
            info!("Running migration 2: Plan location and completion");
            self.apply_migration(2, |conn| {
                // Columns may already exist in files touched by older builds
                if !Self::has_column(conn, "plans", "location")? {
                    conn.execute_batch("ALTER TABLE plans ADD COLUMN location TEXT;")?;
                }
                if !Self::has_column(conn, "plans", "is_complete")? {
                    conn.execute_batch(
                        "ALTER TABLE plans ADD COLUMN is_complete INTEGER NOT NULL DEFAULT 0;",
                    )?;
                }

                // Plans are always listed per travel in date order
                conn.execute_batch(
                    "CREATE INDEX IF NOT EXISTS idx_plans_travel_date ON plans(travel_id, date);",
                )?;
                Ok(())
            })?;
        }

        info!("Migrations complete");
        Ok(())
    }
}
