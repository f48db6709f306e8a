use serde::Serialize;

/// School grade a volunteer is assigned to: kindergarten or 1..8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    K,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Grade {
    pub fn code(&self) -> &'static str {
        match self {
            Grade::K => "K",
            Grade::One => "1",
            Grade::Two => "2",
            Grade::Three => "3",
            Grade::Four => "4",
            Grade::Five => "5",
            Grade::Six => "6",
            Grade::Seven => "7",
            Grade::Eight => "8",
        }
    }

    /// Label used in tables and exports, e.g. "Grade 3" or "Grade K".
    pub fn label(&self) -> String {
        format!("Grade {}", self.code())
    }

    /// Helper: convert input code from the form ("k" and "K" both accepted).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "K" => Some(Grade::K),
            "1" => Some(Grade::One),
            "2" => Some(Grade::Two),
            "3" => Some(Grade::Three),
            "4" => Some(Grade::Four),
            "5" => Some(Grade::Five),
            "6" => Some(Grade::Six),
            "7" => Some(Grade::Seven),
            "8" => Some(Grade::Eight),
            _ => None,
        }
    }
}
