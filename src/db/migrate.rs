use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, identified by a sortable version string.
struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250310_0001_create_eventos",
        description: "Created eventos table",
        apply: create_eventos_table,
    },
    Migration {
        version: "20250402_0002_index_eventos_date_start",
        description: "Added (date, start_time) index to eventos",
        apply: index_eventos_by_date_start,
    },
];

/// Ensure that the `log` table exists. Migration markers live in it.
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

fn create_eventos_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS eventos (
            id                     INTEGER PRIMARY KEY AUTOINCREMENT,
            is_presidential_agenda INTEGER NOT NULL DEFAULT 0,
            title                  TEXT NOT NULL,
            date                   TEXT NOT NULL,
            start_time             TEXT NOT NULL,
            end_time               TEXT NOT NULL,
            location               TEXT NOT NULL DEFAULT '',
            address                TEXT NOT NULL DEFAULT '',
            coverage               TEXT NOT NULL DEFAULT '',
            responsible_parties    TEXT NOT NULL DEFAULT '',
            equipment              TEXT NOT NULL DEFAULT '',
            notes                  TEXT NOT NULL DEFAULT '',
            needs_driver           INTEGER NOT NULL DEFAULT 0,
            driver_name            TEXT NOT NULL DEFAULT '',
            driver_phone           TEXT NOT NULL DEFAULT '',
            status                 TEXT NOT NULL DEFAULT 'ACTIVE'
                                   CHECK(status IN ('ACTIVE','CANCELLED'))
        );
        "#,
    )?;
    Ok(())
}

fn index_eventos_by_date_start(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_eventos_date_start ON eventos(date, start_time);",
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

/// Versions already recorded in the log, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY target ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations.
///
/// Each step and its log marker commit together; a failing step leaves the
/// schema as it was.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch("BEGIN;")?;
        let step = (m.apply)(conn).and_then(|_| {
            conn.execute(
                "INSERT INTO log (date, operation, target, message)
                 VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
                [m.version, m.description],
            )
            .map(|_| ())
        });

        match step {
            Ok(()) => conn.execute_batch("COMMIT;")?,
            Err(e) => {
                conn.execute_batch("ROLLBACK;")?;
                return Err(e);
            }
        }

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}
