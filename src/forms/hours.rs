use crate::errors::{AppError, AppResult};
use crate::forms::validate;
use crate::models::{HoursEntry, Volunteer};
use crate::store::RecordStore;
use crate::ui::messages::success;

/// Raw hours form as collected by the shell. The volunteer field accepts
/// either a 1-based position in the volunteer listing or a full name.
#[derive(Debug, Default)]
pub struct HoursForm {
    pub date: String,
    pub volunteer: String,
    pub grade: String,
    pub hours: String,
    pub notes: String,
}

pub fn validate(store: &RecordStore, form: &HoursForm) -> AppResult<HoursEntry> {
    //
    // 1. Parse the plain fields
    //
    let date = validate::parse_date_field(&form.date)?;
    let grade = validate::parse_grade(&form.grade)?;
    let hours = validate::parse_hours(&form.hours)?;

    //
    // 2. Resolve the volunteer reference
    //
    let volunteer = resolve_volunteer(store, &form.volunteer)?;

    Ok(HoursEntry {
        volunteer_id: volunteer.id,
        date,
        hours,
        grade,
        notes: validate::optional(&form.notes),
    })
}

/// Validate and append. The entry keeps only the volunteer id; the name is
/// resolved again at display and export time.
pub fn apply(store: &mut RecordStore, form: &HoursForm) -> AppResult<()> {
    let entry = validate(store, form)?;

    let name = store
        .volunteer_name(entry.volunteer_id)
        .unwrap_or_default()
        .to_string();
    let hours = entry.hours;
    store.add_hours(entry);

    success(format!(
        "Hours logged successfully! Recorded {} hours for {}.",
        crate::utils::fmt_hours(hours),
        name
    ));
    Ok(())
}

/// Accepts "3" (position in the `volunteers` listing, 1-based) or an exact
/// full name, case-insensitive.
fn resolve_volunteer<'a>(store: &'a RecordStore, input: &str) -> AppResult<&'a Volunteer> {
    let wanted = validate::required("volunteer", input)?;
    let volunteers = store.volunteers();

    if let Ok(n) = wanted.parse::<usize>()
        && n >= 1
        && n <= volunteers.len()
    {
        return Ok(&volunteers[n - 1]);
    }

    volunteers
        .iter()
        .find(|v| v.full_name.eq_ignore_ascii_case(&wanted))
        .ok_or(AppError::UnknownVolunteer(wanted))
}
