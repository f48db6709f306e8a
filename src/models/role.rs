use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Teacher,
    Ta,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Ta => "ta",
        }
    }

    /// Human-readable label used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Teacher => "Teacher",
            Role::Ta => "Teaching Assistant",
        }
    }

    /// Helper: convert input code from the form (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "teacher" => Some(Role::Teacher),
            "ta" => Some(Role::Ta),
            _ => None,
        }
    }
}
