mod common;
use common::{open_pool, setup_test_db};

use chrono::NaiveDate;
use mealtally::db::initialize::init_db;
use mealtally::db::migrate::has_column;
use mealtally::db::pool::DbPool;
use mealtally::db::queries::{
    delete_meal, get_meal, insert_meal, list_meals_by_person, list_people, update_meal,
};
use mealtally::models::{MealMode, NewMeal};
use rusqlite::Connection;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn auto_meal(name: &str, date: &str, lunch: u32, dinner: u32, price: f64) -> NewMeal {
    NewMeal {
        person_name: name.to_string(),
        meal_date: day(date),
        mode: MealMode::Auto,
        lunch,
        dinner,
        manual_total: 0,
        meal_price: price,
    }
}

#[test]
fn test_insert_then_list_contains_the_row() {
    let pool = open_pool("store_insert_list");

    let id = insert_meal(&pool.conn, &auto_meal("alice", "2024-03-02", 1, 2, 40.0)).unwrap();
    let rows = list_meals_by_person(&pool.conn, "alice").unwrap();

    assert_eq!(rows.len(), 1);
    let r = &rows[0];
    assert_eq!(r.id, id);
    assert_eq!(r.person_name.as_deref(), Some("alice"));
    assert_eq!(r.meal_date, day("2024-03-02"));
    assert_eq!(r.mode, MealMode::Auto);
    assert_eq!(r.lunch, Some(1));
    assert_eq!(r.dinner, Some(2));
    assert_eq!(r.total_meals, 3);
    assert_eq!(r.meal_price, 40.0);
    assert_eq!(r.total_amount, 120.0);
}

#[test]
fn test_manual_rows_store_no_split() {
    let pool = open_pool("store_manual");

    let meal = NewMeal {
        mode: MealMode::Manual,
        manual_total: 4,
        ..auto_meal("bob", "2024-03-02", 3, 3, 10.0)
    };
    let id = insert_meal(&pool.conn, &meal).unwrap();
    let r = get_meal(&pool.conn, id).unwrap().expect("row");

    assert_eq!(r.mode, MealMode::Manual);
    assert_eq!(r.lunch, None);
    assert_eq!(r.dinner, None);
    assert_eq!(r.total_meals, 4);
    assert_eq!(r.total_amount, 40.0);
}

#[test]
fn test_list_is_per_person_trimmed_case_sensitive_and_date_ordered() {
    let pool = open_pool("store_list_filter");

    insert_meal(&pool.conn, &auto_meal("alice", "2024-02-10", 1, 0, 1.0)).unwrap();
    insert_meal(&pool.conn, &auto_meal("  alice ", "2024-01-10", 1, 0, 1.0)).unwrap();
    insert_meal(&pool.conn, &auto_meal("Alice", "2024-01-01", 1, 0, 1.0)).unwrap();
    insert_meal(&pool.conn, &auto_meal("bob", "2024-01-01", 1, 0, 1.0)).unwrap();

    let rows = list_meals_by_person(&pool.conn, " alice").unwrap();
    let dates: Vec<String> = rows.iter().map(|r| r.meal_date.to_string()).collect();
    assert_eq!(dates, vec!["2024-01-10", "2024-02-10"]);

    assert_eq!(
        list_people(&pool.conn).unwrap(),
        vec!["Alice".to_string(), "alice".to_string(), "bob".to_string()]
    );
}

#[test]
fn test_duplicate_dates_accumulate() {
    let pool = open_pool("store_duplicates");

    insert_meal(&pool.conn, &auto_meal("carol", "2024-05-05", 1, 1, 10.0)).unwrap();
    insert_meal(&pool.conn, &auto_meal("carol", "2024-05-05", 1, 1, 10.0)).unwrap();

    assert_eq!(list_meals_by_person(&pool.conn, "carol").unwrap().len(), 2);
}

#[test]
fn test_update_recomputes_totals_and_keeps_identity() {
    let pool = open_pool("store_update");

    let meal = NewMeal {
        mode: MealMode::Manual,
        manual_total: 9,
        ..auto_meal("dave", "2024-04-01", 0, 0, 5.0)
    };
    let id = insert_meal(&pool.conn, &meal).unwrap();

    assert_eq!(update_meal(&pool.conn, id, 2, 3, 12.5).unwrap(), 1);

    let r = get_meal(&pool.conn, id).unwrap().expect("row");
    assert_eq!(r.lunch, Some(2));
    assert_eq!(r.dinner, Some(3));
    assert_eq!(r.total_meals, 5);
    assert_eq!(r.meal_price, 12.5);
    assert_eq!(r.total_amount, 62.5);
    assert_eq!(r.person_name.as_deref(), Some("dave"));
    assert_eq!(r.meal_date, day("2024-04-01"));
    assert_eq!(r.mode, MealMode::Manual);
}

#[test]
fn test_update_and_delete_of_missing_id_are_noops() {
    let pool = open_pool("store_missing_id");

    assert_eq!(update_meal(&pool.conn, 404, 1, 1, 1.0).unwrap(), 0);
    assert_eq!(delete_meal(&pool.conn, 404).unwrap(), 0);
}

#[test]
fn test_delete_removes_row() {
    let pool = open_pool("store_delete");

    let id = insert_meal(&pool.conn, &auto_meal("erin", "2024-04-01", 1, 1, 1.0)).unwrap();
    assert_eq!(delete_meal(&pool.conn, id).unwrap(), 1);
    assert!(get_meal(&pool.conn, id).unwrap().is_none());
}

#[test]
fn test_schema_ensure_is_idempotent() {
    let pool = open_pool("store_idempotent");
    insert_meal(&pool.conn, &auto_meal("frank", "2024-01-01", 1, 1, 1.0)).unwrap();

    init_db(&pool.conn).unwrap();
    init_db(&pool.conn).unwrap();

    let person_cols: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('meals') WHERE name = 'person_name'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(person_cols, 1);

    let tables: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('meals','feedback','log')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 3);

    assert_eq!(list_meals_by_person(&pool.conn, "frank").unwrap().len(), 1);
}

#[test]
fn test_fresh_database_logs_no_migration() {
    let pool = open_pool("store_fresh_no_migration");
    init_db(&pool.conn).unwrap();

    assert!(has_column(&pool.conn, "meals", "person_name").unwrap());

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 0);
}

#[test]
fn test_legacy_table_gets_person_name_without_data_loss() {
    let db_path = setup_test_db("store_legacy");

    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE meals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                meal_date TEXT, mode TEXT, lunch INTEGER, dinner INTEGER,
                total_meals INTEGER, meal_price REAL, total_amount REAL
            );
            INSERT INTO meals (meal_date, mode, lunch, dinner, total_meals, meal_price, total_amount)
            VALUES ('2023-12-31', 'Auto (Lunch + Dinner)', 1, 1, 2, 45.0, 90.0);
            "#,
        )
        .unwrap();
        assert!(!has_column(&conn, "meals", "person_name").unwrap());
    }

    let pool = DbPool::new(&db_path).unwrap();
    assert!(has_column(&pool.conn, "meals", "person_name").unwrap());

    let legacy = get_meal(&pool.conn, 1).unwrap().expect("legacy row kept");
    assert_eq!(legacy.person_name, None);
    assert_eq!(legacy.mode, MealMode::Auto);
    assert_eq!(legacy.total_amount, 90.0);

    // second open does not try to add the column again
    drop(pool);
    let pool = DbPool::new(&db_path).unwrap();
    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);
}
