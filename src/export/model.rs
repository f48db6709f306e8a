// src/export/model.rs

use serde::Serialize;

use crate::models::{AttendanceEntry, HoursEntry, Volunteer};
use crate::store::RecordStore;
use crate::utils::date::iso;
use crate::utils::fmt_hours;
use crate::utils::formatting::join_names;

/// Flat per-row structures for export. All fields are strings; the serde
/// field names double as the CSV header row.

#[derive(Serialize, Clone, Debug)]
pub struct VolunteerRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Full Name")]
    pub full_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Grade")]
    pub grade: String,
    #[serde(rename = "Preferred Teams")]
    pub preferred_teams: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct HoursRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Volunteer")]
    pub volunteer: String,
    #[serde(rename = "Grade")]
    pub grade: String,
    #[serde(rename = "Hours")]
    pub hours: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct AttendanceRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Grade")]
    pub grade: String,
    #[serde(rename = "Session")]
    pub session: String,
    #[serde(rename = "Hours")]
    pub hours: String,
    #[serde(rename = "Volunteers")]
    pub volunteers: String,
}

pub fn volunteer_row(v: &Volunteer) -> VolunteerRow {
    VolunteerRow {
        id: v.id.to_string(),
        full_name: v.full_name.clone(),
        email: v.email.clone(),
        phone: v.phone.clone(),
        role: v.role.label().to_string(),
        grade: v.grade.label(),
        preferred_teams: join_names(&v.preferred_teams),
    }
}

/// The hours row carries the volunteer's display name, resolved through the
/// store; the raw id is kept only when the lookup finds nothing.
pub fn hours_row(e: &HoursEntry, store: &RecordStore) -> HoursRow {
    let volunteer = store
        .volunteer_name(e.volunteer_id)
        .map(str::to_string)
        .unwrap_or_else(|| e.volunteer_id.to_string());

    HoursRow {
        date: iso(e.date),
        volunteer,
        grade: e.grade.label(),
        hours: fmt_hours(e.hours),
        notes: e.notes.clone().unwrap_or_default(),
    }
}

pub fn attendance_row(e: &AttendanceEntry) -> AttendanceRow {
    AttendanceRow {
        date: iso(e.date),
        grade: e.grade.label(),
        session: e.session.clone(),
        hours: fmt_hours(e.hours),
        volunteers: join_names(&e.volunteers),
    }
}

pub fn volunteer_rows(store: &RecordStore) -> Vec<VolunteerRow> {
    store.volunteers().iter().map(volunteer_row).collect()
}

pub fn hours_rows(store: &RecordStore) -> Vec<HoursRow> {
    store.hours().iter().map(|e| hours_row(e, store)).collect()
}

pub fn attendance_rows(store: &RecordStore) -> Vec<AttendanceRow> {
    store.attendance().iter().map(attendance_row).collect()
}
