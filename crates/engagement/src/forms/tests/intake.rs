use chrono::NaiveDate;

use crate::forms::intake::{IntakeError, IntakeGuard};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date")
}

#[test]
fn accepts_a_well_formed_applicant() {
    let guard = IntakeGuard::default();
    assert!(guard.applicant("John Doe", "john.doe@example.com").is_ok());
}

#[test]
fn rejects_blank_names() {
    let guard = IntakeGuard::default();
    match guard.applicant("   ", "john.doe@example.com") {
        Err(IntakeError::MissingName) => {}
        other => panic!("expected missing name, got {other:?}"),
    }
}

#[test]
fn rejects_malformed_emails() {
    let guard = IntakeGuard::default();
    for email in ["plainaddress", "missing-domain@", "@no-local.com", "two@@ats.com", "no-dot@domain"] {
        assert!(
            matches!(guard.applicant("John Doe", email), Err(IntakeError::InvalidEmail(_))),
            "expected rejection for {email}"
        );
    }
}

#[test]
fn paychecks_require_positive_amounts() {
    let guard = IntakeGuard::default();

    match guard.paycheck(date(), 0.0, 10.0) {
        Err(IntakeError::NonPositiveAmount { field, .. }) => {
            assert_eq!(field, "gross pay amount");
        }
        other => panic!("expected non-positive rejection, got {other:?}"),
    }

    match guard.paycheck(date(), 100.0, -1.0) {
        Err(IntakeError::NonPositiveAmount { field, .. }) => {
            assert_eq!(field, "hours worked");
        }
        other => panic!("expected non-positive rejection, got {other:?}"),
    }

    assert!(guard.paycheck(date(), 100.0, 10.0).is_ok());
}

#[test]
fn volunteer_shifts_require_an_organization_and_positive_hours() {
    let guard = IntakeGuard::default();

    assert!(matches!(
        guard.volunteer_shift("", date(), 4.0),
        Err(IntakeError::MissingOrganization)
    ));
    assert!(matches!(
        guard.volunteer_shift("Food Bank", date(), 0.0),
        Err(IntakeError::NonPositiveAmount { .. })
    ));

    let shift = guard
        .volunteer_shift("  Food Bank  ", date(), 4.0)
        .expect("valid shift");
    assert_eq!(shift.organization_name, "Food Bank");
}
