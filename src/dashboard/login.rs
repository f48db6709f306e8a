use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success};
use std::io::BufRead;

use super::{answer, read_line};

/// Hardcoded mock accounts gating the dashboard. Plaintext placeholders,
/// not a security boundary.
const ACCOUNTS: &[(&str, &str)] = &[
    ("admin@example.com", "adminpassword"),
    ("user@example.com", "userpassword"),
];

const MAX_ATTEMPTS: usize = 3;

pub fn verify(email: &str, password: &str) -> bool {
    ACCOUNTS
        .iter()
        .any(|(e, p)| *e == email && *p == password)
}

/// Prompt for credentials until they match or the attempts run out.
pub fn gate<R: BufRead>(reader: &mut R) -> AppResult<()> {
    println!("Login");

    for _ in 0..MAX_ATTEMPTS {
        crate::ui::messages::prompt("Email");
        let email = match read_line(reader)? {
            Some(l) => l,
            None => return Err(AppError::LoginFailed),
        };
        let password = answer(reader, "Password")?;

        if verify(email.trim(), password.trim()) {
            success("Login successful.");
            return Ok(());
        }

        error("Invalid credentials or details. Please try again.");
    }

    Err(AppError::LoginFailed)
}
