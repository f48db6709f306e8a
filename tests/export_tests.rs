use std::fs;
use std::io::Cursor;
use std::path::Path;

use voldesk::export::model::{attendance_row, hours_row, volunteer_row};
use voldesk::export::{Dataset, ExportFormat, ExportLogic, csv_string};
use voldesk::models::{AttendanceEntry, Grade, HoursEntry, Role, VolunteerDraft};
use voldesk::store::RecordStore;
use voldesk::utils::date::parse_date;

mod common;
use common::setup_export_dir;

fn fixture_entry() -> AttendanceEntry {
    AttendanceEntry {
        date: parse_date("2024-01-05").unwrap(),
        grade: Grade::Three,
        session: "Morning".to_string(),
        hours: 2.0,
        volunteers: vec!["Alice Smith".to_string(), "Bob Lee".to_string()],
    }
}

fn alice() -> VolunteerDraft {
    VolunteerDraft {
        full_name: "Alice Smith".to_string(),
        email: "alice@example.com".to_string(),
        phone: "5551234567".to_string(),
        role: Role::Teacher,
        grade: Grade::Three,
        address: None,
        emergency_contact: None,
        emergency_phone: None,
        date_of_birth: None,
        preferred_teams: vec!["events".to_string(), "setup".to_string()],
        availability: None,
        skills: None,
        comments: None,
    }
}

#[test]
fn test_attendance_csv_row() {
    let csv = csv_string(&[attendance_row(&fixture_entry())]).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "Date,Grade,Session,Hours,Volunteers");
    assert_eq!(lines[1], "2024-01-05,Grade 3,Morning,2,\"Alice Smith, Bob Lee\"");
}

#[test]
fn test_single_volunteer_field_is_not_quoted() {
    let mut entry = fixture_entry();
    entry.volunteers.truncate(1);

    let csv = csv_string(&[attendance_row(&entry)]).unwrap();
    assert!(csv.contains("2024-01-05,Grade 3,Morning,2,Alice Smith"));
}

#[test]
fn test_embedded_quotes_are_doubled() {
    let mut entry = fixture_entry();
    entry.session = "\"Early\" session".to_string();

    let csv = csv_string(&[attendance_row(&entry)]).unwrap();
    assert!(csv.contains("\"\"\"Early\"\" session\""));
}

#[test]
fn test_fractional_hours_keep_decimals() {
    let mut entry = fixture_entry();
    entry.hours = 2.5;

    let row = attendance_row(&entry);
    assert_eq!(row.hours, "2.5");
}

#[test]
fn test_hours_row_resolves_volunteer_name() {
    let mut store = RecordStore::new();
    store.add_volunteer(alice());
    let id = store.volunteers()[0].id;

    store.add_hours(HoursEntry {
        volunteer_id: id,
        date: parse_date("2024-01-05").unwrap(),
        hours: 2.0,
        grade: Grade::Three,
        notes: Some("Setup help".to_string()),
    });

    let row = hours_row(&store.hours()[0], &store);
    assert_eq!(row.volunteer, "Alice Smith");
    assert_eq!(row.notes, "Setup help");
}

#[test]
fn test_volunteer_row_joins_preferred_teams() {
    let mut store = RecordStore::new();
    store.add_volunteer(alice());

    let row = volunteer_row(&store.volunteers()[0]);
    assert_eq!(row.preferred_teams, "events, setup");

    // The joined list carries a comma, so the CSV field gets quoted.
    let csv = csv_string(&[row]).unwrap();
    assert!(csv.contains("\"events, setup\""));
}

#[test]
fn test_build_filename_from_fixed_date() {
    let date = parse_date("2024-03-02").unwrap();

    assert_eq!(
        ExportLogic::build_filename(Dataset::Attendance, ExportFormat::Csv, date),
        "attendance_2024-03-02.csv"
    );
    assert_eq!(
        ExportLogic::build_filename(Dataset::Hours, ExportFormat::Json, date),
        "hours_2024-03-02.json"
    );
}

#[test]
fn test_export_writes_dated_csv_file() {
    let dir = setup_export_dir("export_writes_dated_csv");
    let mut store = RecordStore::new();
    store.add_attendance(fixture_entry());

    let date = parse_date("2024-03-02").unwrap();
    let mut reader = Cursor::new(&b""[..]);

    let written = ExportLogic::export(
        &store,
        Dataset::Attendance,
        ExportFormat::Csv,
        Path::new(&dir),
        date,
        false,
        &mut reader,
    )
    .unwrap()
    .expect("a file should have been written");

    assert_eq!(
        written.file_name().unwrap().to_string_lossy(),
        "attendance_2024-03-02.csv"
    );

    let content = fs::read_to_string(&written).unwrap();
    assert!(content.starts_with("Date,Grade,Session,Hours,Volunteers"));
    assert!(content.contains("\"Alice Smith, Bob Lee\""));
}

#[test]
fn test_export_empty_dataset_writes_nothing() {
    let dir = setup_export_dir("export_empty_dataset");
    let store = RecordStore::new();

    let date = parse_date("2024-03-02").unwrap();
    let mut reader = Cursor::new(&b""[..]);

    let written = ExportLogic::export(
        &store,
        Dataset::Hours,
        ExportFormat::Csv,
        Path::new(&dir),
        date,
        false,
        &mut reader,
    )
    .unwrap();

    assert!(written.is_none());
    assert!(!Path::new(&dir).join("hours_2024-03-02.csv").exists());
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let dir = setup_export_dir("export_refuses_overwrite");
    let mut store = RecordStore::new();
    store.add_attendance(fixture_entry());

    let date = parse_date("2024-03-02").unwrap();

    let mut reader = Cursor::new(&b""[..]);
    ExportLogic::export(
        &store,
        Dataset::Attendance,
        ExportFormat::Csv,
        Path::new(&dir),
        date,
        false,
        &mut reader,
    )
    .unwrap();

    // Second run, answering "n" to the overwrite prompt.
    let mut no = Cursor::new(&b"n\n"[..]);
    let result = ExportLogic::export(
        &store,
        Dataset::Attendance,
        ExportFormat::Csv,
        Path::new(&dir),
        date,
        false,
        &mut no,
    );

    assert!(result.is_err());
}
