//! Field validators: presence and shape checks only, per form contract.

use crate::errors::{AppError, AppResult};
use crate::models::{Grade, Role};
use crate::utils::date;
use chrono::NaiveDate;
use regex::Regex;

/// A required field: trimmed, non-empty.
pub fn required(label: &str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        Err(AppError::MissingField(label.to_string()))
    } else {
        Ok(v.to_string())
    }
}

/// An optional field: blank input becomes None.
pub fn optional(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() { None } else { Some(v.to_string()) }
}

pub fn parse_email(value: &str) -> AppResult<String> {
    let v = required("email", value)?;
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    if re.is_match(&v) {
        Ok(v)
    } else {
        Err(AppError::InvalidEmail(v))
    }
}

/// Phone numbers must carry at least 10 digits; separators are allowed.
pub fn parse_phone(value: &str) -> AppResult<String> {
    let v = required("phone", value)?;
    let digits = v.chars().filter(|c| c.is_ascii_digit()).count();
    if digits >= 10 {
        Ok(v)
    } else {
        Err(AppError::InvalidPhone(v))
    }
}

/// Hours are a positive decimal, e.g. "2" or "2.5".
pub fn parse_hours(value: &str) -> AppResult<f64> {
    let v = required("hours", value)?;
    match v.parse::<f64>() {
        Ok(h) if h.is_finite() && h > 0.0 => Ok(h),
        _ => Err(AppError::InvalidHours(v)),
    }
}

pub fn parse_date_field(value: &str) -> AppResult<NaiveDate> {
    let v = required("date", value)?;
    date::parse_date(&v).ok_or_else(|| AppError::InvalidDate(v))
}

pub fn parse_role(value: &str) -> AppResult<Role> {
    let v = required("role", value)?;
    Role::from_code(&v).ok_or_else(|| AppError::InvalidRole(v))
}

pub fn parse_grade(value: &str) -> AppResult<Grade> {
    let v = required("grade", value)?;
    Grade::from_code(&v).ok_or_else(|| AppError::InvalidGrade(v))
}

/// Comma-separated list field; blank tokens are dropped.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
