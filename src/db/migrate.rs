use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn create_inventory_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id            TEXT PRIMARY KEY,
            name          TEXT NOT NULL DEFAULT '',
            position      INTEGER NOT NULL DEFAULT 0,
            desired_hours REAL
        );

        CREATE TABLE IF NOT EXISTS rows (
            id                   TEXT PRIMARY KEY,
            profile_id           TEXT NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
            name                 TEXT NOT NULL DEFAULT '',
            position             INTEGER NOT NULL DEFAULT 0,
            consumption_per_hour REAL,
            inventory_at_update  REAL,
            updated_at_ms        INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_rows_profile ON rows(profile_id, position);

        CREATE TABLE IF NOT EXISTS settings (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() every time a database is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let version = "20250901_0001_create_inventory_tables";
    if !migration_applied(conn, version)? {
        create_inventory_tables(conn)?;
        mark_applied(conn, version, "Created inventory tables")?;
        success("Created inventory tables (profiles, rows, settings).");
    }

    Ok(())
}
