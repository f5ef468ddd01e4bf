mod common;
use common::{ADMIN_PW, init_db_with_data, mt, setup_test_db, temp_dir};

use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    mt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_prints_entry_summary() {
    let db_path = setup_test_db("cli_add");
    mt().args(["--db", &db_path, "--test", "init"]).assert().success();

    mt().args([
        "--db", &db_path, "--name", "bob", "add", "--date", "2024-03-10", "--lunch", "2",
        "--dinner", "1", "--price", "45.5",
    ])
    .assert()
    .success()
    .stdout(contains("Record saved successfully!"))
    .stdout(contains("Total Meals: 3"))
    .stdout(contains("₹136.50"));
}

#[test]
fn test_add_manual_total() {
    let db_path = setup_test_db("cli_add_manual");
    mt().args(["--db", &db_path, "--test", "init"]).assert().success();

    mt().args([
        "--db", &db_path, "-n", "bob", "add", "--date", "2024-03-10", "--total", "7", "--price",
        "10",
    ])
    .assert()
    .success()
    .stdout(contains("Mode:        Manual"))
    .stdout(contains("₹70.00"));
}

#[test]
fn test_add_rejects_lunch_together_with_total() {
    let db_path = setup_test_db("cli_add_conflict");

    mt().args([
        "--db", &db_path, "-n", "bob", "add", "--lunch", "1", "--total", "3",
    ])
    .assert()
    .failure();
}

#[test]
fn test_add_rejects_negative_price() {
    let db_path = setup_test_db("cli_add_negative");

    mt().args(["--db", &db_path, "-n", "bob", "add", "--lunch", "1", "--price=-5"])
        .assert()
        .failure();
}

#[test]
fn test_add_rejects_invalid_date() {
    let db_path = setup_test_db("cli_add_bad_date");
    mt().args(["--db", &db_path, "--test", "init"]).assert().success();

    mt().args(["--db", &db_path, "-n", "bob", "add", "--date", "2024-13-40", "--lunch", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_add_without_name_warns_and_saves_nothing() {
    let db_path = setup_test_db("cli_add_no_name");
    mt().args(["--db", &db_path, "--test", "init"]).assert().success();

    mt().args(["--db", &db_path, "add", "--lunch", "1"])
        .assert()
        .success()
        .stdout(contains("Please enter your name first."));

    mt().args(["--db", &db_path, "-n", "bob", "list"])
        .assert()
        .success()
        .stdout(contains("No records found for bob."));
}

#[test]
fn test_list_shows_records_totals_and_months() {
    let db_path = setup_test_db("cli_list");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "--name", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("Person: alice"))
        .stdout(contains("2024-01-05"))
        .stdout(contains("2024-02-01"))
        .stdout(contains("Total meals: 6   Total amount: ₹310.00"))
        .stdout(contains("2024-01"))
        .stdout(contains("₹250.00"));
}

#[test]
fn test_list_is_scoped_to_person() {
    let db_path = setup_test_db("cli_list_scope");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "--name", "Alice", "list"])
        .assert()
        .success()
        .stdout(contains("No records found for Alice."));
}

#[test]
fn test_list_without_name_warns() {
    let db_path = setup_test_db("cli_list_no_name");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Please enter your name first"));
}

#[test]
fn test_summary_groups_by_month() {
    let db_path = setup_test_db("cli_summary");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "--name", "alice", "summary"])
        .assert()
        .success()
        .stdout(contains("Monthly Summary"))
        .stdout(contains("2024-01"))
        .stdout(contains("2024-02"))
        .stdout(contains("₹60.00"));
}

#[test]
fn test_edit_recomputes_totals() {
    let db_path = setup_test_db("cli_edit");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "edit", "1", "--lunch", "3", "--price", "10"])
        .assert()
        .success()
        .stdout(contains("Record #1 updated!"))
        .stdout(contains("₹40.00"));

    mt().args(["--db", &db_path, "--name", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("Total meals: 8   Total amount: ₹250.00"));
}

#[test]
fn test_edit_missing_record_is_informational() {
    let db_path = setup_test_db("cli_edit_missing");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "edit", "999", "--lunch", "1"])
        .assert()
        .success()
        .stdout(contains("nothing to update"));
}

#[test]
fn test_del_removes_record() {
    let db_path = setup_test_db("cli_del");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "del", "3", "--yes"])
        .assert()
        .success()
        .stdout(contains("Record #3 deleted!"));

    mt().args(["--db", &db_path, "--name", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("Total meals: 5   Total amount: ₹250.00"));

    mt().args(["--db", &db_path, "del", "3", "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));
}

#[test]
fn test_del_cancelled_by_prompt() {
    let db_path = setup_test_db("cli_del_cancel");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    mt().args(["--db", &db_path, "--name", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("Total meals: 6"));
}

#[test]
fn test_chart_writes_svg_and_prints_days() {
    let db_path = setup_test_db("cli_chart");
    init_db_with_data(&db_path);
    let out = temp_dir("cli_chart");

    mt().args([
        "--db",
        &db_path,
        "--name",
        "alice",
        "chart",
        "--dir",
        out.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(contains("Meals per Day"))
    .stdout(contains("2024-01-05"))
    .stdout(contains("2024-02-01"))
    .stdout(contains("Chart written"));

    let svg = fs::read_to_string(out.join("alice_meals.svg")).expect("svg written");
    assert!(svg.contains("<svg"));
    assert_eq!(svg.matches("<circle").count(), 3);
}

#[test]
fn test_chart_without_records() {
    let db_path = setup_test_db("cli_chart_empty");
    init_db_with_data(&db_path);
    let out = temp_dir("cli_chart_empty");

    mt().args([
        "--db",
        &db_path,
        "--name",
        "nobody",
        "chart",
        "--dir",
        out.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(contains("No data to chart."));

    assert!(!out.join("nobody_meals.svg").exists());
}

#[test]
fn test_export_csv_uses_person_file_name() {
    let db_path = setup_test_db("cli_export_csv");
    init_db_with_data(&db_path);
    let out = temp_dir("cli_export_csv");

    mt().args([
        "--db",
        &db_path,
        "--name",
        "alice",
        "export",
        "--format",
        "csv",
        "--dir",
        out.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let file = out.join("alice_meals.csv");
    let content = fs::read_to_string(&file).expect("csv written");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,meal_date,mode,lunch,dinner,total_meals,meal_price,total_amount,person_name")
    );
    assert_eq!(lines.count(), 3);
    assert!(content.contains("2024-01-20,Auto,2,1,3,50.0,150.0,alice"));
}

#[test]
fn test_export_json_and_xlsx() {
    let db_path = setup_test_db("cli_export_other");
    init_db_with_data(&db_path);
    let out = temp_dir("cli_export_other");
    let dir = out.to_str().unwrap();

    mt().args(["--db", &db_path, "-n", "alice", "export", "--format", "json", "--dir", dir])
        .assert()
        .success();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("alice_meals.json")).unwrap()).unwrap();
    assert_eq!(json.as_array().map(|a| a.len()), Some(3));
    assert_eq!(json[0]["meal_date"], "2024-01-05");

    mt().args(["--db", &db_path, "-n", "alice", "export", "--format", "xlsx", "--dir", dir])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));
    let xlsx = fs::metadata(out.join("alice_meals.xlsx")).expect("xlsx written");
    assert!(xlsx.len() > 0);
}

#[test]
fn test_export_with_no_records_writes_nothing() {
    let db_path = setup_test_db("cli_export_empty");
    init_db_with_data(&db_path);
    let out = temp_dir("cli_export_empty");

    mt().args([
        "--db",
        &db_path,
        "-n",
        "zed",
        "export",
        "--dir",
        out.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(contains("nothing to export"));

    assert!(!out.join("zed_meals.csv").exists());
}

#[test]
fn test_export_existing_file_with_force() {
    let db_path = setup_test_db("cli_export_force");
    init_db_with_data(&db_path);
    let out = temp_dir("cli_export_force");
    let file = out.join("custom.csv");
    fs::write(&file, "old").unwrap();

    mt().args([
        "--db",
        &db_path,
        "-n",
        "alice",
        "export",
        "--file",
        file.to_str().unwrap(),
        "--force",
    ])
    .assert()
    .success();

    assert!(fs::read_to_string(&file).unwrap().starts_with("id,meal_date"));
}

#[test]
fn test_feedback_send_and_admin_inbox() {
    let db_path = setup_test_db("cli_feedback");
    init_db_with_data(&db_path);

    mt().args([
        "--db", &db_path, "-n", "alice", "feedback", "send", "-m", "Paneer was great", "-r", "4",
    ])
    .assert()
    .success()
    .stdout(contains("Thank you for your feedback!"));

    mt().args(["--db", &db_path, "feedback", "list", "--password", ADMIN_PW])
        .env("MEALTALLY_ADMIN_PASSWORD", ADMIN_PW)
        .assert()
        .success()
        .stdout(contains("Feedback Inbox"))
        .stdout(contains("Paneer was great"))
        .stdout(contains("alice"));

    mt().args(["--db", &db_path, "feedback", "del", "1", "--password", ADMIN_PW])
        .env("MEALTALLY_ADMIN_PASSWORD", ADMIN_PW)
        .assert()
        .success()
        .stdout(contains("Feedback #1 deleted!"));

    mt().args(["--db", &db_path, "feedback", "list"])
        .env("MEALTALLY_ADMIN_PASSWORD", ADMIN_PW)
        .write_stdin(format!("{ADMIN_PW}\n"))
        .assert()
        .success()
        .stdout(contains("No feedback yet."));
}

#[test]
fn test_feedback_blank_message_is_rejected() {
    let db_path = setup_test_db("cli_feedback_blank");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "feedback", "send", "-m", "   "])
        .assert()
        .success()
        .stdout(contains("Feedback message cannot be empty."));
}

#[test]
fn test_feedback_rating_out_of_range() {
    let db_path = setup_test_db("cli_feedback_rating");

    mt().args(["--db", &db_path, "feedback", "send", "-m", "hi", "-r", "6"])
        .assert()
        .failure();
}

#[test]
fn test_feedback_inbox_wrong_password() {
    let db_path = setup_test_db("cli_feedback_wrong_pw");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "feedback", "list", "--password", "kitchen-42"])
        .env("MEALTALLY_ADMIN_PASSWORD", ADMIN_PW)
        .assert()
        .failure()
        .stderr(contains("Wrong admin password"));
}

#[test]
fn test_feedback_inbox_without_configured_secret() {
    let db_path = setup_test_db("cli_feedback_no_secret");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "feedback", "list", "--password", ADMIN_PW])
        .assert()
        .failure();
}

#[test]
fn test_form_session() {
    let db_path = setup_test_db("cli_form");
    mt().args(["--db", &db_path, "--test", "init"]).assert().success();

    let script = "\
name carol
date 2024-05-01
lunch 1
dinner 2
price 20
save
feedback 5 Lovely
inbox
login nope
login Kitchen-42
reset
quit
";

    mt().args(["--db", &db_path, "form"])
        .env("MEALTALLY_ADMIN_PASSWORD", ADMIN_PW)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("mealtally> "))
        .stdout(contains("₹60.00"))
        .stdout(contains("Record saved successfully!"))
        .stdout(contains("Thank you for your feedback!"))
        .stdout(contains("Admin access granted."))
        .stdout(contains("Lovely"))
        .stdout(contains("Bye!"))
        .stderr(contains("Wrong admin password"))
        .stderr(contains("Admin login required"));

    mt().args(["--db", &db_path, "-n", "carol", "list"])
        .assert()
        .success()
        .stdout(contains("2024-05-01"));
}

#[test]
fn test_form_reports_bad_input_and_continues() {
    let db_path = setup_test_db("cli_form_bad");
    mt().args(["--db", &db_path, "--test", "init"]).assert().success();

    mt().args(["--db", &db_path, "form"])
        .write_stdin("lunch many\nfrobnicate\nhelp\n")
        .assert()
        .success()
        .stderr(contains("invalid lunch count"))
        .stderr(contains("unknown command 'frobnicate'"))
        .stdout(contains("Fields:"))
        .stdout(contains("Bye!"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"))
        .stdout(contains("init"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("cli_db");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_data(&db_path);
    let out = temp_dir("cli_backup");
    let dest = out.join("meals.sqlite");

    mt().args([
        "--db",
        &db_path,
        "backup",
        "--file",
        dest.to_str().unwrap(),
        "--compress",
    ])
    .assert()
    .success()
    .stdout(contains("Backup created"));

    assert!(out.join("meals.zip").exists());
    assert!(!dest.exists());
}

#[test]
fn test_export_name_with_path_separators_stays_in_dir() {
    let db_path = setup_test_db("cli_export_traversal");
    mt().args(["--db", &db_path, "--test", "init"]).assert().success();
    let out = temp_dir("cli_export_traversal");
    let inner = out.join("inner");
    fs::create_dir_all(&inner).unwrap();

    for name in ["../x", "a/b"] {
        mt().args(["--db", &db_path, "--name", name, "add", "--lunch", "1"])
            .assert()
            .success();
        mt().args([
            "--db",
            &db_path,
            "--name",
            name,
            "export",
            "--dir",
            inner.to_str().unwrap(),
        ])
        .assert()
        .success();
    }

    assert!(inner.join("__x_meals.csv").exists());
    assert!(inner.join("a_b_meals.csv").exists());
    assert!(!out.join("x_meals.csv").exists());
    assert!(!inner.join("a").exists());
}
