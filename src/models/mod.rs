pub mod attendance;
pub mod grade;
pub mod hours;
pub mod role;
pub mod volunteer;

pub use attendance::AttendanceEntry;
pub use grade::Grade;
pub use hours::HoursEntry;
pub use role::Role;
pub use volunteer::{Volunteer, VolunteerDraft};
