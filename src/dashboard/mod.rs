//! The interactive dashboard: login gate plus the command-loop shell.

pub mod login;
pub mod shell;

use crate::errors::AppResult;
use std::io::BufRead;

/// Read one line from the session reader. Returns None at EOF.
pub(crate) fn read_line<R: BufRead>(reader: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Prompted answer for a form field; EOF counts as a blank answer and is
/// left to the validators.
pub(crate) fn answer<R: BufRead>(reader: &mut R, label: &str) -> AppResult<String> {
    crate::ui::messages::prompt(label);
    Ok(read_line(reader)?.unwrap_or_default())
}
