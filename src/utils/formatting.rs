//! Formatting utilities used for CLI and export outputs.

/// Render a decimal hours value without a trailing `.0`:
/// 2.0 → "2", 2.5 → "2.5". Exports and tables share this rule.
pub fn fmt_hours(hours: f64) -> String {
    format!("{}", hours)
}

/// Join a list for a single display field, e.g. preferred teams or the
/// attendance names column.
pub fn join_names(names: &[String]) -> String {
    names.join(", ")
}
