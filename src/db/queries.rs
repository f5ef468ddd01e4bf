use crate::core::calculator;
use crate::errors::{AppError, AppResult};
use crate::models::feedback::{FeedbackRecord, MAX_RATING, MIN_RATING};
use crate::models::meal::{MealRecord, NewMeal};
use crate::models::meal_mode::MealMode;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const MEAL_COLUMNS: &str =
    "id, meal_date, mode, lunch, dinner, total_meals, meal_price, total_amount, person_name";

pub fn map_meal_row(row: &Row) -> Result<MealRecord> {
    let date_str: String = row.get("meal_date")?;
    let meal_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let mode_str: Option<String> = row.get("mode")?;

    Ok(MealRecord {
        id: row.get("id")?,
        person_name: row.get("person_name")?,
        meal_date,
        mode: MealMode::from_db_str(mode_str.as_deref().unwrap_or("")),
        lunch: row.get("lunch")?,
        dinner: row.get("dinner")?,
        total_meals: row.get::<_, Option<u32>>("total_meals")?.unwrap_or(0),
        meal_price: row.get::<_, Option<f64>>("meal_price")?.unwrap_or(0.0),
        total_amount: row.get::<_, Option<f64>>("total_amount")?.unwrap_or(0.0),
    })
}

/// Insert a new meal row and return its id.
/// Duplicate (person, date) rows are allowed.
pub fn insert_meal(conn: &Connection, meal: &NewMeal) -> AppResult<i64> {
    let totals = meal.totals();
    let (lunch, dinner) = meal.stored_split();

    conn.execute(
        "INSERT INTO meals (meal_date, mode, lunch, dinner, total_meals, meal_price, total_amount, person_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            meal.meal_date.format("%Y-%m-%d").to_string(),
            meal.mode.to_db_str(),
            lunch,
            dinner,
            totals.total_meals,
            meal.meal_price,
            totals.total_amount,
            meal.person_name.trim(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// All rows of one person, by date ascending.
pub fn list_meals_by_person(conn: &Connection, name: &str) -> AppResult<Vec<MealRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {MEAL_COLUMNS} FROM meals
         WHERE person_name = ?1
         ORDER BY meal_date ASC, id ASC"
    ))?;

    let rows = stmt.query_map([name.trim()], map_meal_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_meal(conn: &Connection, id: i64) -> AppResult<Option<MealRecord>> {
    let mut stmt = conn.prepare(&format!("SELECT {MEAL_COLUMNS} FROM meals WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_meal_row).optional()?)
}

/// Overwrite lunch, dinner, price and the derived totals.
/// Returns the number of rows touched (0 when the id is gone).
pub fn update_meal(conn: &Connection, id: i64, lunch: u32, dinner: u32, price: f64) -> AppResult<usize> {
    let totals = calculator::calculate_split(lunch, dinner, price);

    let n = conn.execute(
        "UPDATE meals
         SET lunch = ?1, dinner = ?2, total_meals = ?3, meal_price = ?4, total_amount = ?5
         WHERE id = ?6",
        params![
            lunch,
            dinner,
            totals.total_meals,
            price,
            totals.total_amount,
            id
        ],
    )?;
    Ok(n)
}

/// Returns the number of rows removed (0 when the id is gone).
pub fn delete_meal(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM meals WHERE id = ?1", [id])?)
}

/// Distinct non-empty person names, alphabetically.
pub fn list_people(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT person_name FROM meals
         WHERE person_name IS NOT NULL AND person_name <> ''
         ORDER BY person_name ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Feedback
// ---------------------------

fn map_feedback_row(row: &Row) -> Result<FeedbackRecord> {
    Ok(FeedbackRecord {
        id: row.get("id")?,
        person_name: row.get::<_, Option<String>>("person_name")?.unwrap_or_default(),
        message: row.get("message")?,
        rating: row.get("rating")?,
        created_at: row.get("created_at")?,
    })
}

/// Parse an RFC 3339 timestamp and rewrite it as UTC with millisecond
/// precision, so text order in SQLite equals time order.
pub fn normalize_timestamp(ts: &str) -> AppResult<String> {
    let parsed = DateTime::parse_from_rfc3339(ts.trim())
        .map_err(|_| AppError::InvalidDate(ts.to_string()))?;
    Ok(parsed
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Persist one feedback entry. The caller has already checked that the
/// message is not blank. `created_at` is stored as UTC.
pub fn insert_feedback(
    conn: &Connection,
    name: &str,
    message: &str,
    rating: u8,
    created_at: &str,
) -> AppResult<i64> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::InvalidRating(i64::from(rating)));
    }
    let created_at = normalize_timestamp(created_at)?;

    conn.execute(
        "INSERT INTO feedback (person_name, message, rating, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![name.trim(), message.trim(), rating, created_at],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Newest first.
pub fn list_feedback(conn: &Connection) -> AppResult<Vec<FeedbackRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, person_name, message, rating, created_at FROM feedback
         ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt.query_map([], map_feedback_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_feedback(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM feedback WHERE id = ?1", [id])?)
}
