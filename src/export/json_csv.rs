// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialize rows to CSV text: header row from the serde field names,
/// then one record per row. A field is quoted only when it contains a
/// comma, quote, or newline; embedded quotes are doubled.
pub fn csv_string<T: Serialize>(rows: &[T]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

/// Export CSV to file.
pub(crate) fn export_csv<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    fs::write(path, csv_string(rows)?)?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}
