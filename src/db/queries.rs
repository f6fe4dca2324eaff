use crate::errors::AppResult;
use crate::models::input::WorkoutInput;
use crate::models::workout::Workout;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Workout> {
    Ok(Workout {
        id: row.get("id")?,
        date: row.get("date")?,
        workout_type: row.get("workout_type")?,
        duration: row.get("duration")?,
        calories: row.get("calories")?,
    })
}

/// Insert a workout stamped with `date`; returns the assigned id.
pub fn insert_workout(conn: &Connection, date: &str, input: &WorkoutInput) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO workouts (date, workout_type, duration, calories)
         VALUES (?1, ?2, ?3, ?4)",
        params![date, input.workout_type, input.duration, input.calories],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Most recent first. Rows stamped within the same second keep insertion
/// order reversed through the id tiebreak.
pub fn load_workouts(conn: &Connection) -> AppResult<Vec<Workout>> {
    collect(
        conn,
        "SELECT id, date, workout_type, duration, calories
         FROM workouts
         ORDER BY date DESC, id DESC",
    )
}

/// Oldest first, used to build consecutive training pairs.
pub fn load_history(conn: &Connection) -> AppResult<Vec<Workout>> {
    collect(
        conn,
        "SELECT id, date, workout_type, duration, calories
         FROM workouts
         ORDER BY date ASC, id ASC",
    )
}

fn collect(conn: &Connection, sql: &str) -> AppResult<Vec<Workout>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_workout(conn: &Connection, id: i64) -> AppResult<Option<Workout>> {
    let ws = conn
        .query_row(
            "SELECT id, date, workout_type, duration, calories FROM workouts WHERE id = ?1",
            [id],
            map_row,
        )
        .optional()?;
    Ok(ws)
}

/// Update type, duration and calories. `date` is never rewritten.
/// Returns the number of affected rows.
pub fn update_workout(conn: &Connection, id: i64, input: &WorkoutInput) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE workouts
         SET workout_type = ?1, duration = ?2, calories = ?3
         WHERE id = ?4",
        params![input.workout_type, input.duration, input.calories, id],
    )?;
    Ok(n)
}

pub fn delete_workout(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM workouts WHERE id = ?1", [id])?;
    Ok(n)
}
