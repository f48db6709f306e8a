use serde::Serialize;
use uuid::Uuid;

use super::{grade::Grade, role::Role};

/// A registered volunteer. The id is assigned by the store at registration
/// and never changes; records are never updated or deleted.
#[derive(Debug, Clone, Serialize)]
pub struct Volunteer {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub grade: Grade,

    // Extended registration fields, all optional.
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub preferred_teams: Vec<String>,
    pub availability: Option<String>,
    pub skills: Option<String>,
    pub comments: Option<String>,
}

/// Validated registration data, everything except the id.
/// Produced by the volunteer form; the store assigns the id.
#[derive(Debug, Clone)]
pub struct VolunteerDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub grade: Grade,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub preferred_teams: Vec<String>,
    pub availability: Option<String>,
    pub skills: Option<String>,
    pub comments: Option<String>,
}

impl Volunteer {
    pub fn from_draft(id: Uuid, draft: VolunteerDraft) -> Self {
        Self {
            id,
            full_name: draft.full_name,
            email: draft.email,
            phone: draft.phone,
            role: draft.role,
            grade: draft.grade,
            address: draft.address,
            emergency_contact: draft.emergency_contact,
            emergency_phone: draft.emergency_phone,
            date_of_birth: draft.date_of_birth,
            preferred_teams: draft.preferred_teams,
            availability: draft.availability,
            skills: draft.skills,
            comments: draft.comments,
        }
    }
}
