use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `workouts` table if it is missing.
/// Idempotent: existing rows are never touched.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workouts (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            date          TEXT NOT NULL,
            workout_type  TEXT NOT NULL,
            duration      INTEGER NOT NULL,
            calories      INTEGER NOT NULL
        );
        "#,
    )?;
    Ok(())
}
