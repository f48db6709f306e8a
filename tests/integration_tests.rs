use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{register_block, script, session, setup_export_dir, vd};

use voldesk::utils::date::{iso, today};

#[test]
fn test_login_gate_accepts_known_account() {
    vd().args(["run"])
        .write_stdin(script(&["user@example.com", "userpassword", "quit"]))
        .assert()
        .success()
        .stdout(contains("Login successful."));
}

#[test]
fn test_login_gate_rejects_after_three_attempts() {
    vd().args(["run"])
        .write_stdin(script(&[
            "bad@example.com",
            "nope",
            "bad@example.com",
            "nope",
            "bad@example.com",
            "nope",
        ]))
        .assert()
        .failure()
        .stderr(contains("Invalid credentials or details"))
        .stderr(contains("Login failed"));
}

#[test]
fn test_register_then_list_volunteers() {
    let dir = setup_export_dir("register_then_list");

    let mut lines = register_block("Alice Smith", "alice@example.com", "teacher", "3");
    lines.push("volunteers".to_string());
    lines.push("quit".to_string());

    session(&dir, &lines)
        .assert()
        .success()
        .stdout(contains("Volunteer registered successfully!"))
        .stdout(contains("Alice Smith"))
        .stdout(contains("Grade 3"));
}

#[test]
fn test_invalid_registration_leaves_store_empty() {
    let dir = setup_export_dir("invalid_registration");

    // Broken email: the whole submission is dropped.
    let mut lines = register_block("Alice Smith", "not-an-email", "teacher", "3");
    lines.push("volunteers".to_string());
    lines.push("quit".to_string());

    session(&dir, &lines)
        .assert()
        .success()
        .stdout(contains("No volunteers registered yet."))
        .stderr(contains("Invalid email address"));
}

#[test]
fn test_unknown_command_keeps_session_alive() {
    let dir = setup_export_dir("unknown_command");

    let lines = vec!["frobnicate".to_string(), "volunteers".to_string(), "quit".to_string()];

    session(&dir, &lines)
        .assert()
        .success()
        .stderr(contains("Unknown command: frobnicate"))
        .stdout(contains("No volunteers registered yet."));
}

#[test]
fn test_full_session_with_exports() {
    let dir = setup_export_dir("full_session");

    let mut lines = register_block("Alice Smith", "alice@example.com", "teacher", "3");
    lines.extend(
        [
            // log: date, volunteer, grade, hours, notes
            "log",
            "2024-01-05",
            "1",
            "3",
            "2.5",
            "Setup help",
            // record: date, grade, session, hours, present volunteers
            "record",
            "2024-01-05",
            "3",
            "Morning",
            "2",
            "Alice Smith",
            "export attendance",
            "export hours --format json",
            "quit",
        ]
        .map(String::from),
    );

    session(&dir, &lines)
        .assert()
        .success()
        .stdout(contains("Hours logged successfully!"))
        .stdout(contains("Recorded attendance for 1 volunteers."))
        .stdout(contains("CSV export completed"))
        .stdout(contains("JSON export completed"));

    let stamp = iso(today());

    let csv = fs::read_to_string(Path::new(&dir).join(format!("attendance_{}.csv", stamp)))
        .expect("attendance csv should exist");
    assert!(csv.starts_with("Date,Grade,Session,Hours,Volunteers"));
    assert!(csv.contains("2024-01-05,Grade 3,Morning,2,Alice Smith"));

    let json = fs::read_to_string(Path::new(&dir).join(format!("hours_{}.json", stamp)))
        .expect("hours json should exist");
    assert!(json.contains("Alice Smith"));
    assert!(json.contains("2.5"));
}

#[test]
fn test_export_order_matches_insertion_order() {
    let dir = setup_export_dir("export_order");

    let mut lines: Vec<String> = Vec::new();
    // Record three sessions out of date order.
    for (date, session_name) in [
        ("2024-03-10", "Morning"),
        ("2024-01-05", "Afternoon"),
        ("2024-02-20", "Evening"),
    ] {
        lines.extend(
            ["record", date, "K", session_name, "1", ""].map(String::from),
        );
    }
    lines.push("export attendance".to_string());
    lines.push("quit".to_string());

    session(&dir, &lines).assert().success();

    let stamp = iso(today());
    let csv = fs::read_to_string(Path::new(&dir).join(format!("attendance_{}.csv", stamp)))
        .expect("attendance csv should exist");

    let dates: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(dates, ["2024-03-10", "2024-01-05", "2024-02-20"]);
}

#[test]
fn test_export_with_no_records_warns() {
    let dir = setup_export_dir("export_no_records");

    let lines = vec!["export volunteers".to_string(), "quit".to_string()];

    session(&dir, &lines)
        .assert()
        .success()
        .stdout(contains("No records to export"));

    assert!(!Path::new(&dir).exists() || fs::read_dir(&dir).unwrap().next().is_none());
}

#[test]
fn test_config_print_shows_defaults() {
    vd().args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("export_dir"))
        .stdout(contains("default_session"));
}
