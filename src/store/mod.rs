//! In-memory record store: the single holder of all registered volunteers
//! and logged entries for the lifetime of one dashboard session.
//!
//! Add-operations are the only mutators. Nothing is ever updated or deleted,
//! and insertion order is the only order — listings and exports both walk the
//! sequences as appended.

use uuid::Uuid;

use crate::models::{AttendanceEntry, Grade, HoursEntry, Volunteer, VolunteerDraft};

#[derive(Debug, Default)]
pub struct RecordStore {
    volunteers: Vec<Volunteer>,
    hours: Vec<HoursEntry>,
    attendance: Vec<AttendanceEntry>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a volunteer. The id is a freshly generated v4 UUID; the OS
    /// random source is the uniqueness mechanism, no counter involved.
    pub fn add_volunteer(&mut self, draft: VolunteerDraft) {
        let id = Uuid::new_v4();
        self.volunteers.push(Volunteer::from_draft(id, draft));
    }

    pub fn add_hours(&mut self, entry: HoursEntry) {
        self.hours.push(entry);
    }

    pub fn add_attendance(&mut self, entry: AttendanceEntry) {
        self.attendance.push(entry);
    }

    /// Full ordered volunteer sequence. No filtering, no pagination.
    pub fn volunteers(&self) -> &[Volunteer] {
        &self.volunteers
    }

    pub fn hours(&self) -> &[HoursEntry] {
        &self.hours
    }

    pub fn attendance(&self) -> &[AttendanceEntry] {
        &self.attendance
    }

    /// Resolve a volunteer id back to its display name.
    pub fn volunteer_name(&self, id: Uuid) -> Option<&str> {
        self.volunteers
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.full_name.as_str())
    }

    /// Volunteers assigned to the given grade, in registration order.
    /// Used by the attendance form to build its candidate list.
    pub fn volunteers_in_grade(&self, grade: Grade) -> Vec<&Volunteer> {
        self.volunteers.iter().filter(|v| v.grade == grade).collect()
    }
}
