//! Tests for add-job form validation

use rstest::{fixture, rstest};

use jobify_web::components::job_form::{JobFormError, MAX_FIELD_LEN};
use jobify_web::types::{JobForm, JobMode, JobStatus};

#[fixture]
fn valid_form() -> JobForm {
    JobForm {
        position: "Backend Engineer".to_string(),
        company: "Northwind Labs".to_string(),
        location: "Berlin, Germany".to_string(),
        status: JobStatus::Pending,
        mode: JobMode::FullTime,
    }
}

#[rstest]
fn valid_form_passes(valid_form: JobForm) {
    assert_eq!(valid_form.validate(), Ok(()));
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_position_is_rejected(mut valid_form: JobForm, #[case] position: &str) {
    valid_form.position = position.to_string();
    assert_eq!(valid_form.validate(), Err(JobFormError::InvalidPosition));
}

#[rstest]
fn blank_company_is_rejected(mut valid_form: JobForm) {
    valid_form.company = String::new();
    assert_eq!(valid_form.validate(), Err(JobFormError::InvalidCompany));
}

#[rstest]
fn blank_location_is_rejected(mut valid_form: JobForm) {
    valid_form.location = "\t".to_string();
    assert_eq!(valid_form.validate(), Err(JobFormError::InvalidLocation));
}

#[rstest]
fn overlong_field_is_rejected(mut valid_form: JobForm) {
    valid_form.position = "x".repeat(MAX_FIELD_LEN + 1);
    assert_eq!(valid_form.validate(), Err(JobFormError::InvalidPosition));
}

#[rstest]
fn field_at_max_length_is_accepted(mut valid_form: JobForm) {
    valid_form.position = "x".repeat(MAX_FIELD_LEN);
    assert_eq!(valid_form.validate(), Ok(()));
}

/// Position is checked first, so a fully blank form reports the position
/// error.
#[test]
fn blank_form_reports_position_first() {
    let form = JobForm::default();
    assert_eq!(form.validate(), Err(JobFormError::InvalidPosition));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        JobFormError::InvalidCompany.to_string(),
        "Company is required (max 100 characters)"
    );
}
