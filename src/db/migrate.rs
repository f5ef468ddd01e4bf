use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension};

const ADD_PERSON_NAME: &str = "20250301_0001_add_person_name_to_meals";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
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

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column named `column`.
pub fn has_column(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `meals` table in its current layout. `person_name` stays the
/// last column, where older databases get it through `ALTER TABLE`.
fn create_meals_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS meals (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            meal_date     TEXT,
            mode          TEXT,
            lunch         INTEGER,
            dinner        INTEGER,
            total_meals   INTEGER,
            meal_price    REAL,
            total_amount  REAL,
            person_name   TEXT
        );
        "#,
    )?;
    Ok(())
}

fn create_feedback_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS feedback (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            person_name  TEXT,
            message      TEXT NOT NULL,
            rating       INTEGER NOT NULL CHECK(rating BETWEEN 1 AND 5),
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_feedback_created ON feedback(created_at);
        "#,
    )?;
    Ok(())
}

/// Add `person_name` to databases created before multi-person support.
/// Existing rows keep a NULL name.
fn migrate_add_person_name(conn: &Connection) -> AppResult<bool> {
    if has_column(conn, "meals", "person_name")? {
        return Ok(false);
    }

    conn.execute("ALTER TABLE meals ADD COLUMN person_name TEXT", [])
        .map_err(|e| AppError::Migration(format!("Failed to add 'person_name' column: {}", e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added person_name to meals')",
        [ADD_PERSON_NAME],
    )?;

    Ok(true)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() on every open.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Internal log first: migrations record themselves there
    ensure_log_table(conn)?;

    // 2) Meals
    if !table_exists(conn, "meals")? {
        create_meals_table(conn)?;
        success("Created meals table.");
    } else if migrate_add_person_name(conn)? {
        warning("Legacy meals table detected: added 'person_name' column.");
        success(format!("Migration applied: {}", ADD_PERSON_NAME));
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_meals_person_date ON meals(person_name, meal_date);",
    )?;

    // 3) Feedback
    if !table_exists(conn, "feedback")? {
        create_feedback_table(conn)?;
        success("Created feedback table.");
    }

    Ok(())
}
