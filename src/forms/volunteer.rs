use crate::errors::AppResult;
use crate::forms::validate;
use crate::models::VolunteerDraft;
use crate::store::RecordStore;
use crate::ui::messages::success;

/// Raw registration form, one string per field as collected by the shell.
#[derive(Debug, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub grade: String,
    pub address: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub date_of_birth: String,
    pub preferred_teams: String,
    pub availability: String,
    pub skills: String,
    pub comments: String,
}

/// Validate every field; any failure aborts the registration.
pub fn validate(form: &RegistrationForm) -> AppResult<VolunteerDraft> {
    //
    // 1. Required fields
    //
    let full_name = validate::required("full name", &form.full_name)?;
    let email = validate::parse_email(&form.email)?;
    let phone = validate::parse_phone(&form.phone)?;
    let role = validate::parse_role(&form.role)?;
    let grade = validate::parse_grade(&form.grade)?;

    //
    // 2. Extended fields, all optional
    //
    Ok(VolunteerDraft {
        full_name,
        email,
        phone,
        role,
        grade,
        address: validate::optional(&form.address),
        emergency_contact: validate::optional(&form.emergency_contact),
        emergency_phone: validate::optional(&form.emergency_phone),
        date_of_birth: validate::optional(&form.date_of_birth),
        preferred_teams: validate::parse_list(&form.preferred_teams),
        availability: validate::optional(&form.availability),
        skills: validate::optional(&form.skills),
        comments: validate::optional(&form.comments),
    })
}

/// Validate and register. The success message mirrors the dashboard toast.
pub fn apply(store: &mut RecordStore, form: &RegistrationForm) -> AppResult<()> {
    let draft = validate(form)?;

    let name = draft.full_name.clone();
    let role = draft.role;
    let grade = draft.grade;
    store.add_volunteer(draft);

    success(format!(
        "Volunteer registered successfully! {} has been added as a {} for {}.",
        name,
        role.code(),
        grade.label()
    ));
    Ok(())
}
