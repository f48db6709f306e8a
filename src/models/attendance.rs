use chrono::NaiveDate;
use serde::Serialize;

use super::grade::Grade;

/// One recorded session attendance. The volunteer names are a denormalized
/// copy taken at submission time, not references into the volunteer list.
/// Immutable once appended.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEntry {
    pub date: NaiveDate,
    pub grade: Grade,
    pub session: String,
    pub hours: f64,
    pub volunteers: Vec<String>,
}
