//! Tests for database migrations
//!
//! These tests verify that:
//! - All migrations apply successfully
//! - Schema version is tracked correctly
//! - Connection pragmas are applied
//! - Data survives through migrations

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rusqlite::Connection;
    use tempfile::TempDir;

    use crate::storage::database::Database;

    /// Helper to create a temporary database for testing
    fn create_test_db() -> (Database, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db = Database::new(&db_path).expect("Failed to create database");
        (db, temp_dir)
    }

    fn table_columns(db: &Database, table: &str) -> Vec<String> {
        let mut stmt = db
            .conn()
            .prepare(&format!("PRAGMA table_info({})", table))
            .expect("Failed to prepare PRAGMA");

        stmt.query_map([], |row| row.get::<_, String>(1))
            .expect("Failed to get columns")
            .filter_map(Result::ok)
            .collect()
    }

    #[test]
    fn test_database_creation() {
        let (db, _temp) = create_test_db();

        let version = db.get_schema_version().expect("Failed to read version");
        assert_eq!(version, 2, "Expected current schema version to be 2");
    }

    #[test]
    fn test_travels_table_exists() {
        let (db, _temp) = create_test_db();

        let columns = table_columns(&db, "travels");

        assert!(columns.contains(&"id".to_string()));
        assert!(columns.contains(&"name".to_string()));
        assert!(columns.contains(&"start_date".to_string()));
        assert!(columns.contains(&"end_date".to_string()));
    }

    #[test]
    fn test_plans_table_exists() {
        let (db, _temp) = create_test_db();

        let ddl: String = db
            .conn()
            .query_row(
                "SELECT sql FROM sqlite_master WHERE type='table' AND name='plans'",
                [],
                |row| row.get(0),
            )
            .expect("Plans table should exist");

        assert!(ddl.contains("FOREIGN KEY"));
        assert!(ddl.contains("ON DELETE CASCADE"));
    }

    #[test]
    fn test_plan_columns_migration() {
        let (db, _temp) = create_test_db();

        // Added by migration 2
        let columns = table_columns(&db, "plans");
        assert!(columns.contains(&"location".to_string()));
        assert!(columns.contains(&"is_complete".to_string()));
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let (db, _temp) = create_test_db();

        let fk_enabled: i32 = db
            .conn()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .expect("Failed to get foreign_keys setting");

        assert_eq!(fk_enabled, 1, "Foreign keys should be enabled");
    }

    #[test]
    fn test_wal_mode_enabled() {
        let (db, _temp) = create_test_db();

        let journal_mode: String = db
            .conn()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .expect("Failed to get journal_mode");

        assert_eq!(
            journal_mode.to_lowercase(),
            "wal",
            "WAL mode should be enabled"
        );
    }

    #[test]
    fn test_migration_idempotency() {
        let (db, _temp) = create_test_db();

        let version1 = db.get_schema_version().unwrap();
        db.run_migrations().expect("Re-running migrations failed");
        let version2 = db.get_schema_version().unwrap();

        assert_eq!(version1, version2, "Schema version should not change");
    }

    #[test]
    fn test_reopen_keeps_schema() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("nested").join("test.db");

        drop(Database::new(&db_path).expect("Failed to create database"));
        let db = Database::new(&db_path).expect("Failed to reopen database");

        assert_eq!(db.get_schema_version().unwrap(), 2);
    }

    /// Write a version 1 file by hand, as the first release left it
    fn create_v1_db(path: &Path, extra_plan_columns: &str) {
        let conn = Connection::open(path).expect("Failed to open raw connection");
        conn.execute_batch(&format!(
            r#"
            CREATE TABLE schema_version (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            );
            INSERT INTO schema_version (version) VALUES (1);

            CREATE TABLE travels (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL
            );
            CREATE TABLE plans (
                id TEXT PRIMARY KEY,
                travel_id TEXT NOT NULL,
                name TEXT NOT NULL,
                date TEXT,
                content TEXT,{}
                FOREIGN KEY (travel_id) REFERENCES travels(id) ON DELETE CASCADE
            );

            INSERT INTO travels (id, name, start_date, end_date)
                VALUES ('{}', 'Jeju', '2022-11-16', '2022-11-18');
            INSERT INTO plans (id, travel_id, name, date, content)
                VALUES ('{}', '{}', 'Lunch', '2022-11-16T12:00:00', 'Black pork');
            "#,
            extra_plan_columns, TRAVEL_ID, PLAN_ID, TRAVEL_ID
        ))
        .expect("Failed to write v1 schema");
    }

    const TRAVEL_ID: &str = "6f1c1b9e-3c1a-4a55-9f0e-2d9a8f3b7c10";
    const PLAN_ID: &str = "0b7d6c55-8e2f-4f4b-a2b1-5c3e9d1f6a22";

    #[test]
    fn test_v1_upgrade_keeps_rows() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("v1.db");
        create_v1_db(&db_path, "");

        let db = Database::new(&db_path).expect("Failed to upgrade database");
        assert_eq!(db.get_schema_version().unwrap(), 2);

        let travel_name: String = db
            .conn()
            .query_row("SELECT name FROM travels WHERE id = ?1", [TRAVEL_ID], |row| {
                row.get(0)
            })
            .expect("Travel should survive the upgrade");
        assert_eq!(travel_name, "Jeju");

        let (name, content, location, is_complete): (String, String, Option<String>, i32) = db
            .conn()
            .query_row(
                "SELECT name, content, location, is_complete FROM plans WHERE id = ?1",
                [PLAN_ID],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .expect("Plan should survive the upgrade");
        assert_eq!(name, "Lunch");
        assert_eq!(content, "Black pork");
        assert_eq!(location, None);
        assert_eq!(is_complete, 0, "is_complete should default to 0");
    }

    #[test]
    fn test_upgrade_tolerates_existing_column() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("partial.db");
        // A version 1 file that already has one of the version 2 columns
        create_v1_db(&db_path, "\n                location TEXT,");

        let db = Database::new(&db_path).expect("Upgrade should skip existing columns");
        assert_eq!(db.get_schema_version().unwrap(), 2);

        let columns = table_columns(&db, "plans");
        assert_eq!(columns.iter().filter(|c| *c == "location").count(), 1);
        assert!(columns.contains(&"is_complete".to_string()));
    }

    #[test]
    fn test_failed_migration_rolls_back() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("broken.db");
        create_v1_db(&db_path, "");
        // Occupy the index name so the last step of migration 2 fails
        Connection::open(&db_path)
            .and_then(|conn| {
                conn.execute_batch(
                    "CREATE TABLE idx_plans_travel_date (id INTEGER);",
                )
            })
            .expect("Failed to occupy index name");

        assert!(Database::new(&db_path).is_err());

        let conn = Connection::open(&db_path).expect("Failed to reopen raw connection");
        let version: i32 = conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, 1, "Version must not advance on failure");

        let mut stmt = conn.prepare("PRAGMA table_info(plans)").unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get(1))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(
            !columns.contains(&"location".to_string()),
            "Column added before the failure must be rolled back"
        );
    }
}
