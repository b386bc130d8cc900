use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step applied once and recorded in `log` as `migration_applied`.
struct Migration {
    version: &'static str,
    message: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250310_0001_base_schema",
        message: "Created companies, projects, equipment, assets, certificates and tickets tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS companies (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS projects (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id  INTEGER NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
            name        TEXT NOT NULL,
            location    TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS equipment (
            id                          INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id                  INTEGER NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
            name                        TEXT NOT NULL,
            kind                        TEXT NOT NULL CHECK(kind IN ('plant','vehicles','lifting','electrical','cat-genny','other')),
            serial_number               TEXT,
            thorough_examination_date   TEXT,
            has_7_day_reminder          INTEGER NOT NULL DEFAULT 0,
            has_30_day_reminder         INTEGER NOT NULL DEFAULT 0,
            mot_date                    TEXT,
            has_mot_7_day_reminder      INTEGER NOT NULL DEFAULT 0,
            has_mot_30_day_reminder     INTEGER NOT NULL DEFAULT 0,
            created_at                  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS assets (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id  INTEGER NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
            name        TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS certificates (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            asset_id             INTEGER NOT NULL REFERENCES assets(id) ON DELETE CASCADE,
            name                 TEXT NOT NULL,
            expiry_date          TEXT,
            has_7_day_reminder   INTEGER NOT NULL DEFAULT 0,
            has_30_day_reminder  INTEGER NOT NULL DEFAULT 0,
            created_at           TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tickets (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id          INTEGER NOT NULL,
            ticket_type          TEXT NOT NULL,
            title                TEXT NOT NULL,
            expiry_date          TEXT,
            has_7_day_reminder   INTEGER NOT NULL DEFAULT 1,
            has_30_day_reminder  INTEGER NOT NULL DEFAULT 1,
            created_at           TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250402_0002_lookup_indexes",
        message: "Added owner lookup indexes",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_projects_company ON projects(company_id);
        CREATE INDEX IF NOT EXISTS idx_equipment_company ON equipment(company_id);
        CREATE INDEX IF NOT EXISTS idx_assets_company ON assets(company_id);
        CREATE INDEX IF NOT EXISTS idx_certificates_asset ON certificates(asset_id);
        CREATE INDEX IF NOT EXISTS idx_tickets_employee ON tickets(employee_id);
        "#,
    },
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
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

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.message],
    )?;

    success(format!("Migration applied: {} → {}", m.version, m.message));
    Ok(())
}

/// Public entry point: run all pending migrations, in order.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
