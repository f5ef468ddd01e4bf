use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{CYAN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    // migrations are explicit here, so open without running them
    let mut pool = DbPool::open_raw(&cfg.database)?;

    if *migrate {
        step("Running migrations");
        run_pending_migrations(&pool.conn)?;
        success("Migration completed.");
    }

    if *show_info {
        run_pending_migrations(&pool.conn)?;
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        integrity_check(&pool)?;
    }

    if *vacuum {
        step("Running VACUUM");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}

fn step(what: &str) {
    println!("{}▶ {}…{}", CYAN, what, RESET);
}

/// SQLite integrity check plus rows the meal views can never show.
fn integrity_check(pool: &DbPool) -> AppResult<()> {
    step("Running integrity check");

    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if integrity != "ok" {
        warning(format!("Integrity check failed: {}", integrity));
        return Ok(());
    }
    success("Integrity check passed.");

    // legacy rows from before person_name existed
    let has_person = crate::db::migrate::has_column(&pool.conn, "meals", "person_name")?;
    if has_person {
        let unnamed: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM meals WHERE person_name IS NULL OR TRIM(person_name) = ''",
            [],
            |row| row.get(0),
        )?;
        if unnamed > 0 {
            info(format!(
                "{} meal record(s) have no person name and are not listed for anyone.",
                unnamed
            ));
        }
    } else {
        warning("meals.person_name is missing: run `mealtally db --migrate`.");
    }

    Ok(())
}
