// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;

pub use json_csv::csv_string;
pub use logic::ExportLogic;

use crate::ui::messages::success;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// The three exportable record sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    Volunteers,
    Hours,
    Attendance,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Volunteers => "volunteers",
            Dataset::Hours => "hours",
            Dataset::Attendance => "attendance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "volunteers" => Some(Dataset::Volunteers),
            "hours" => Some(Dataset::Hours),
            "attendance" => Some(Dataset::Attendance),
            _ => None,
        }
    }
}
