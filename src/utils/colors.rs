/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Grey out blank optional fields (notes, availability, ...) in listings.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}
