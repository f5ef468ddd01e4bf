use crate::db::pool::DbPool;
use crate::db::queries::list_people;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let meals: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM meals", [], |row| row.get(0))?;
    let people = list_people(&pool.conn)?.len();
    let feedback: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM feedback", [], |row| row.get(0))?;

    println!("{}• Meal records:{} {}{}{}", CYAN, RESET, GREEN, meals, RESET);
    println!("{}• People:{} {}{}{}", CYAN, RESET, GREEN, people, RESET);
    println!("{}• Feedback:{} {}{}{}", CYAN, RESET, GREEN, feedback, RESET);

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(meal_date), MAX(meal_date) FROM meals",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
