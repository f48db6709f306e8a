use crate::errors::{AppError, AppResult};
use crate::forms::validate;
use crate::models::AttendanceEntry;
use crate::store::RecordStore;
use crate::ui::messages::success;

/// Raw attendance form as collected by the shell. `volunteers` is a
/// comma-separated list of names or positions within the grade's candidate
/// listing; an empty list is allowed (a session can be recorded with nobody
/// present).
#[derive(Debug, Default)]
pub struct AttendanceForm {
    pub date: String,
    pub grade: String,
    pub session: String,
    pub hours: String,
    pub volunteers: String,
}

/// `default_session` fills a blank session field (config value).
pub fn validate(
    store: &RecordStore,
    form: &AttendanceForm,
    default_session: &str,
) -> AppResult<AttendanceEntry> {
    //
    // 1. Parse the plain fields
    //
    let date = validate::parse_date_field(&form.date)?;
    let grade = validate::parse_grade(&form.grade)?;
    let hours = validate::parse_hours(&form.hours)?;

    let session = validate::optional(&form.session)
        .unwrap_or_else(|| default_session.to_string());

    //
    // 2. Resolve present volunteers against the grade's candidates.
    //    Names are denormalized into the entry, in input order.
    //
    let candidates = store.volunteers_in_grade(grade);
    let mut present = Vec::new();

    for token in validate::parse_list(&form.volunteers) {
        let name = if let Ok(n) = token.parse::<usize>()
            && n >= 1
            && n <= candidates.len()
        {
            candidates[n - 1].full_name.clone()
        } else {
            candidates
                .iter()
                .find(|v| v.full_name.eq_ignore_ascii_case(&token))
                .map(|v| v.full_name.clone())
                .ok_or(AppError::UnknownVolunteer(token))?
        };
        present.push(name);
    }

    Ok(AttendanceEntry {
        date,
        grade,
        session,
        hours,
        volunteers: present,
    })
}

pub fn apply(
    store: &mut RecordStore,
    form: &AttendanceForm,
    default_session: &str,
) -> AppResult<()> {
    let entry = validate(store, form, default_session)?;

    let count = entry.volunteers.len();
    store.add_attendance(entry);

    success(format!(
        "Attendance recorded successfully! Recorded attendance for {} volunteers.",
        count
    ));
    Ok(())
}
