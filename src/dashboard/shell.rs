//! The command-loop shell: the dashboard's tab navigation rendered as
//! terminal commands. One command runs to completion before the next line
//! is read, so every store append is atomic by construction.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{Dataset, ExportFormat, ExportLogic};
use crate::forms::attendance::AttendanceForm;
use crate::forms::hours::HoursForm;
use crate::forms::volunteer::RegistrationForm;
use crate::forms::{attendance, hours, volunteer};
use crate::store::RecordStore;
use crate::ui::messages::{error, info, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::fmt_hours;
use crate::utils::formatting::join_names;
use crate::utils::table::Table;

use ansi_term::Colour;
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::{answer, read_line};

enum ShellCommand {
    Register,
    LogHours,
    RecordAttendance,
    Volunteers,
    Hours,
    Attendance,
    Export {
        dataset: Dataset,
        format: ExportFormat,
        force: bool,
    },
    Help,
    Quit,
}

/// Run the interactive session until `quit` or EOF.
pub fn run<R: BufRead>(store: &mut RecordStore, cfg: &Config, reader: &mut R) -> AppResult<()> {
    banner();
    print_help();

    loop {
        print!("voldesk> ");
        io::stdout().flush().ok();

        let Some(line) = read_line(reader)? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Ok(ShellCommand::Quit) => break,
            // Command errors (bad input, cancelled export, ...) end the
            // command, never the session.
            Ok(cmd) => {
                if let Err(e) = execute(cmd, store, cfg, reader) {
                    error(e);
                }
            }
            Err(e) => error(e),
        }
    }

    info("Session closed. Records live in memory only and are now gone; exported files remain.");
    Ok(())
}

fn banner() {
    println!();
    println!("{}", Colour::Blue.bold().paint("voldesk dashboard"));
    println!("Welcome back. Registration, hour logging, attendance and CSV export.");
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  register                                         Register a new volunteer");
    println!("  log                                              Log volunteer hours");
    println!("  record                                           Record session attendance");
    println!("  volunteers | hours | attendance                  Show a dataset");
    println!("  export <dataset> [--format csv|json] [--force]   Write a dated report file");
    println!("  help | quit");
    println!();
}

fn parse_command(line: &str) -> AppResult<ShellCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens[0] {
        "register" => Ok(ShellCommand::Register),
        "log" => Ok(ShellCommand::LogHours),
        "record" => Ok(ShellCommand::RecordAttendance),
        "volunteers" => Ok(ShellCommand::Volunteers),
        "hours" => Ok(ShellCommand::Hours),
        "attendance" => Ok(ShellCommand::Attendance),
        "export" => parse_export(&tokens),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(AppError::UnknownCommand(other.to_string())),
    }
}

fn parse_export(tokens: &[&str]) -> AppResult<ShellCommand> {
    let name = tokens
        .get(1)
        .ok_or_else(|| AppError::UnknownDataset("(none)".to_string()))?;
    let dataset =
        Dataset::from_str(name).ok_or_else(|| AppError::UnknownDataset(name.to_string()))?;

    let mut format = ExportFormat::Csv;
    let mut force = false;

    let mut i = 2;
    while i < tokens.len() {
        match tokens[i] {
            "--format" => {
                i += 1;
                let f = tokens
                    .get(i)
                    .ok_or_else(|| AppError::InvalidExportFormat("(none)".to_string()))?;
                format = ExportFormat::from_str(f)
                    .ok_or_else(|| AppError::InvalidExportFormat(f.to_string()))?;
            }
            "--force" | "-f" => force = true,
            other => return Err(AppError::UnknownCommand(other.to_string())),
        }
        i += 1;
    }

    Ok(ShellCommand::Export {
        dataset,
        format,
        force,
    })
}

fn execute<R: BufRead>(
    cmd: ShellCommand,
    store: &mut RecordStore,
    cfg: &Config,
    reader: &mut R,
) -> AppResult<()> {
    match cmd {
        ShellCommand::Register => {
            let form = collect_registration(reader)?;
            volunteer::apply(store, &form)
        }
        ShellCommand::LogHours => {
            let form = collect_hours(store, reader)?;
            hours::apply(store, &form)
        }
        ShellCommand::RecordAttendance => {
            let form = collect_attendance(store, reader)?;
            attendance::apply(store, &form, &cfg.default_session)
        }
        ShellCommand::Volunteers => {
            list_volunteers(store);
            Ok(())
        }
        ShellCommand::Hours => {
            list_hours(store);
            Ok(())
        }
        ShellCommand::Attendance => {
            list_attendance(store);
            Ok(())
        }
        ShellCommand::Export {
            dataset,
            format,
            force,
        } => {
            ExportLogic::export(
                store,
                dataset,
                format,
                Path::new(&cfg.export_dir),
                date::today(),
                force,
                reader,
            )?;
            Ok(())
        }
        ShellCommand::Help => {
            print_help();
            Ok(())
        }
        ShellCommand::Quit => Ok(()),
    }
}

// ---------------------------
// Forms
// ---------------------------

fn collect_registration<R: BufRead>(reader: &mut R) -> AppResult<RegistrationForm> {
    println!("{}", Colour::Blue.paint("Volunteer Registration"));

    Ok(RegistrationForm {
        full_name: answer(reader, "Full name")?,
        email: answer(reader, "Email")?,
        phone: answer(reader, "Phone")?,
        role: answer(reader, "Role (teacher/ta)")?,
        grade: answer(reader, "Grade (K-8)")?,
        address: answer(reader, "Address (optional)")?,
        emergency_contact: answer(reader, "Emergency contact (optional)")?,
        emergency_phone: answer(reader, "Emergency phone (optional)")?,
        date_of_birth: answer(reader, "Date of birth (optional)")?,
        preferred_teams: answer(reader, "Preferred teams, comma separated (optional)")?,
        availability: answer(reader, "Availability (optional)")?,
        skills: answer(reader, "Skills (optional)")?,
        comments: answer(reader, "Comments (optional)")?,
    })
}

fn collect_hours<R: BufRead>(store: &RecordStore, reader: &mut R) -> AppResult<HoursForm> {
    println!("{}", Colour::Blue.paint("Log Hours"));
    list_volunteers(store);

    Ok(HoursForm {
        date: answer(reader, "Date (YYYY-MM-DD)")?,
        volunteer: answer(reader, "Volunteer (# or full name)")?,
        grade: answer(reader, "Grade (K-8)")?,
        hours: answer(reader, "Hours")?,
        notes: answer(reader, "Notes (optional)")?,
    })
}

fn collect_attendance<R: BufRead>(store: &RecordStore, reader: &mut R) -> AppResult<AttendanceForm> {
    println!("{}", Colour::Blue.paint("Record Attendance"));

    let date = answer(reader, "Date (YYYY-MM-DD)")?;
    let grade = answer(reader, "Grade (K-8)")?;

    // Show the candidates for the chosen grade, as the checkbox list did.
    if let Some(g) = crate::models::Grade::from_code(&grade) {
        let candidates = store.volunteers_in_grade(g);
        if candidates.is_empty() {
            warning(format!("No volunteers registered for {}.", g.label()));
        } else {
            println!("Volunteers in {}:", g.label());
            for (i, v) in candidates.iter().enumerate() {
                println!("  {}. {} ({})", i + 1, v.full_name, v.role.code());
            }
        }
    }

    Ok(AttendanceForm {
        date,
        grade,
        session: answer(reader, "Session (blank = default)")?,
        hours: answer(reader, "Hours")?,
        volunteers: answer(reader, "Volunteers present (comma separated, # or name)")?,
    })
}

// ---------------------------
// Views
// ---------------------------

fn list_volunteers(store: &RecordStore) {
    if store.volunteers().is_empty() {
        warning("No volunteers registered yet.");
        return;
    }

    let mut table = Table::new(vec!["#", "Full Name", "Email", "Phone", "Role", "Grade"]);
    for (i, v) in store.volunteers().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            v.full_name.clone(),
            v.email.clone(),
            v.phone.clone(),
            v.role.label().to_string(),
            v.grade.label(),
        ]);
    }
    print!("{}", table.render());
}

fn list_hours(store: &RecordStore) {
    if store.hours().is_empty() {
        warning("No hours logged yet.");
        return;
    }

    let mut table = Table::new(vec!["Date", "Volunteer", "Grade", "Hours", "Notes"]);
    for e in store.hours() {
        let name = store
            .volunteer_name(e.volunteer_id)
            .unwrap_or_default()
            .to_string();
        table.add_row(vec![
            date::iso(e.date),
            name,
            e.grade.label(),
            fmt_hours(e.hours),
            colorize_optional(e.notes.as_deref().unwrap_or_default()),
        ]);
    }
    print!("{}", table.render());
}

fn list_attendance(store: &RecordStore) {
    if store.attendance().is_empty() {
        warning("No attendance recorded yet.");
        return;
    }

    let mut table = Table::new(vec!["Date", "Grade", "Session", "Hours", "Volunteers Present"]);
    for e in store.attendance() {
        table.add_row(vec![
            date::iso(e.date),
            e.grade.label(),
            e.session.clone(),
            fmt_hours(e.hours),
            join_names(&e.volunteers),
        ]);
    }
    print!("{}", table.render());
}
