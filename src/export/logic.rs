// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model;
use crate::export::{Dataset, ExportFormat};
use crate::store::RecordStore;
use crate::ui::messages::warning;

use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Report filename: `<dataset>_<YYYY-MM-DD>.<ext>`, stamped with the
    /// given date (the shell passes today).
    pub fn build_filename(dataset: Dataset, format: ExportFormat, date: NaiveDate) -> String {
        format!(
            "{}_{}.{}",
            dataset.as_str(),
            date.format("%Y-%m-%d"),
            format.as_str()
        )
    }

    /// Export one dataset from the store into `dir`.
    ///
    /// - `format`: csv | json
    /// - `date`: stamped into the filename
    /// - `force`: overwrite an existing file without asking
    ///
    /// An empty dataset is not an error: a warning is printed and no file
    /// is written.
    pub fn export<R: BufRead>(
        store: &RecordStore,
        dataset: Dataset,
        format: ExportFormat,
        dir: &Path,
        date: NaiveDate,
        force: bool,
        reader: &mut R,
    ) -> AppResult<Option<PathBuf>> {
        fs::create_dir_all(dir)?;

        let path = dir.join(Self::build_filename(dataset, format, date));
        ensure_writable(&path, force, reader)?;

        match dataset {
            Dataset::Volunteers => write_rows(&model::volunteer_rows(store), format, &path),
            Dataset::Hours => write_rows(&model::hours_rows(store), format, &path),
            Dataset::Attendance => write_rows(&model::attendance_rows(store), format, &path),
        }
    }
}

fn write_rows<T: Serialize>(
    rows: &[T],
    format: ExportFormat,
    path: &Path,
) -> AppResult<Option<PathBuf>> {
    if rows.is_empty() {
        warning("⚠️  No records to export for this dataset.");
        return Ok(None);
    }

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }

    Ok(Some(path.to_path_buf()))
}
