#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use mealtally::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN_PW: &str = "Kitchen-42";

/// Binary under test, isolated from the user's real config and secrets.
pub fn mt() -> Command {
    let mut cmd = cargo_bin_cmd!("mealtally");
    cmd.env("HOME", test_home());
    cmd.env("APPDATA", test_home());
    cmd.env_remove("MEALTALLY_ADMIN_PASSWORD");
    cmd
}

/// Empty HOME so no config file is ever picked up.
pub fn test_home() -> PathBuf {
    let mut path = env::temp_dir();
    path.push("mealtally_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mealtally.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, empty output directory inside the temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mealtally_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Open (and migrate) a fresh database through the library API
pub fn open_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    DbPool::new(&db_path).expect("open db")
}

/// Initialize DB and add a small dataset for `alice` via the CLI
pub fn init_db_with_data(db_path: &str) {
    mt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (date, lunch, dinner, price) in [
        ("2024-01-05", "1", "1", "50"),
        ("2024-01-20", "2", "1", "50"),
        ("2024-02-01", "0", "1", "60"),
    ] {
        mt().args([
            "--db", db_path, "--name", "alice", "add", "--date", date, "--lunch", lunch,
            "--dinner", dinner, "--price", price,
        ])
        .assert()
        .success();
    }
}
