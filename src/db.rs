// ==========================================
// ADA Management - SQLite connection setup
// ==========================================
// Goals:
// - one place for Connection::open PRAGMA behavior, so every
//   module gets foreign keys and busy_timeout consistently
// - schema creation for the four reconciled entities
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds).
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the uniform PRAGMA set to a connection.
///
/// foreign_keys and busy_timeout are per-connection settings and
/// must be applied on every open.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the uniform configuration.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create the schema if it does not exist yet.
///
/// Natural-key uniqueness is enforced with partial unique indexes
/// scoped to non-deleted rows, so a soft-deleted entity does not
/// block re-creation under the same key.
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS course (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            code        INTEGER NOT NULL,
            name        TEXT NOT NULL DEFAULT '',
            coordinator TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            deleted_at  TEXT
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_course_code
            ON course(code) WHERE deleted_at IS NULL;

        CREATE TABLE IF NOT EXISTS semester (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            code        TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            deleted_at  TEXT
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_semester_code
            ON semester(code) WHERE deleted_at IS NULL;

        CREATE TABLE IF NOT EXISTS student (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            registration TEXT NOT NULL,
            name         TEXT NOT NULL DEFAULT '',
            entry_year   INTEGER NOT NULL DEFAULT 0,
            entry_period TEXT NOT NULL DEFAULT '',
            quota_type   TEXT NOT NULL DEFAULT '',
            course_id    INTEGER NOT NULL REFERENCES course(id),
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL,
            deleted_at   TEXT
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_student_registration
            ON student(registration) WHERE deleted_at IS NULL;

        CREATE TABLE IF NOT EXISTS academic_record (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id         INTEGER NOT NULL REFERENCES student(id),
            semester_id        INTEGER NOT NULL REFERENCES semester(id),
            status             TEXT NOT NULL DEFAULT '',
            status_detail      TEXT NOT NULL DEFAULT '',
            integralized_hours INTEGER NOT NULL DEFAULT 0,
            total_hours        INTEGER NOT NULL DEFAULT 0,
            pending_obligatory INTEGER NOT NULL DEFAULT 0,
            semesters_no_hours INTEGER NOT NULL DEFAULT 0,
            locks              INTEGER NOT NULL DEFAULT 0,
            created_at         TEXT NOT NULL,
            updated_at         TEXT NOT NULL,
            deleted_at         TEXT
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_record_student_semester
            ON academic_record(student_id, semester_id) WHERE deleted_at IS NULL;
        "#,
    )
}
