use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::grade::Grade;

/// One logged block of volunteer hours. References the volunteer by id,
/// does not own it. Immutable once appended.
#[derive(Debug, Clone, Serialize)]
pub struct HoursEntry {
    pub volunteer_id: Uuid,
    pub date: NaiveDate,
    pub hours: f64,
    pub grade: Grade,
    pub notes: Option<String>,
}
