use std::sync::Arc;

use chrono::Duration;

use super::common::*;
use crate::forms::flow::WizardStep;
use crate::forms::intake::IntakeError;
use crate::forms::repository::{FormRepository, RepositoryError};
use crate::forms::service::{
    EngagementFormService, FormServiceError, NewFormRequest, PaycheckRequest, QuestionAnswers,
    StudentDetails, VolunteerShiftRequest,
};
use crate::forms::verifier::VerifierConfig;
use crate::forms::EnrollmentStatus;

#[test]
fn create_assigns_sequential_ids_and_persists() {
    let (service, repository) = build_service();

    let record = service.create(new_form_request()).expect("form created");

    assert!(record.profile.form_id.0.starts_with("form-"));
    assert!(!record.completed);
    assert!(record.evaluation.is_none());
    let stored = repository
        .fetch(&record.profile.form_id)
        .expect("fetch succeeds")
        .expect("record stored");
    assert_eq!(stored.profile.user_name, "John Doe");
}

#[test]
fn create_rejects_invalid_applicants() {
    let (service, _repository) = build_service();

    let mut request = new_form_request();
    request.email = "not-an-email".to_string();

    match service.create(request) {
        Err(FormServiceError::Intake(IntakeError::InvalidEmail(_))) => {}
        other => panic!("expected intake rejection, got {other:?}"),
    }
}

#[test]
fn answer_questions_persists_flags_and_routes_forward() {
    let (service, _repository) = build_service();
    let record = service.create(new_form_request()).expect("form created");

    let next = service
        .answer_questions(
            &record.profile.form_id,
            QuestionAnswers {
                has_job: false,
                is_student: true,
                enrolled_work_program: false,
                volunteers_nonprofit: true,
            },
        )
        .expect("answers stored");

    assert_eq!(next, WizardStep::Student);
    let stored = service.get(&record.profile.form_id).expect("record exists");
    assert!(stored.profile.is_student);
    assert!(stored.profile.volunteers_nonprofit);
    assert!(!stored.profile.has_job);
}

#[test]
fn student_details_route_past_skipped_steps() {
    let (service, _repository) = build_service();
    let record = service.create(new_form_request()).expect("form created");
    service
        .answer_questions(
            &record.profile.form_id,
            QuestionAnswers {
                has_job: false,
                is_student: true,
                enrolled_work_program: false,
                volunteers_nonprofit: false,
            },
        )
        .expect("answers stored");

    let next = service
        .record_student_details(
            &record.profile.form_id,
            StudentDetails {
                school_name: Some("Des Moines Area CC".to_string()),
                enrollment_status: Some(EnrollmentStatus::LessThanHalfTime),
                school_hours: Some(12.0),
            },
        )
        .expect("details stored");

    assert_eq!(next, WizardStep::Review);
    let stored = service.get(&record.profile.form_id).expect("record exists");
    assert_eq!(stored.profile.school_hours, Some(12.0));
}

#[test]
fn add_paycheck_appends_validated_records() {
    let (service, _repository) = build_service();
    let record = service.create(new_form_request()).expect("form created");

    let updated = service
        .add_paycheck(
            &record.profile.form_id,
            PaycheckRequest {
                pay_date: prior_month() + Duration::days(15),
                gross_pay_amount: 600.0,
                hours_worked: 40.0,
            },
        )
        .expect("paycheck added");

    assert_eq!(updated.profile.paychecks.len(), 1);

    match service.add_paycheck(
        &record.profile.form_id,
        PaycheckRequest {
            pay_date: prior_month(),
            gross_pay_amount: -5.0,
            hours_worked: 10.0,
        },
    ) {
        Err(FormServiceError::Intake(IntakeError::NonPositiveAmount { .. })) => {}
        other => panic!("expected intake rejection, got {other:?}"),
    }

    // The rejected paycheck must not have been stored.
    let stored = service.get(&record.profile.form_id).expect("record exists");
    assert_eq!(stored.profile.paychecks.len(), 1);
}

#[test]
fn add_volunteer_shift_appends_validated_records() {
    let (service, _repository) = build_service();
    let record = service.create(new_form_request()).expect("form created");

    let updated = service
        .add_volunteer_shift(
            &record.profile.form_id,
            VolunteerShiftRequest {
                organization_name: "Food Bank of Iowa".to_string(),
                shift_date: prior_month() + Duration::days(10),
                hours: 8.0,
            },
        )
        .expect("shift added");

    assert_eq!(updated.profile.volunteer_shifts.len(), 1);
}

#[test]
fn verify_persists_the_breakdown() {
    let (service, _repository) = build_service();
    let record = service.create(new_form_request()).expect("form created");
    service
        .answer_questions(
            &record.profile.form_id,
            QuestionAnswers {
                has_job: true,
                is_student: false,
                enrolled_work_program: false,
                volunteers_nonprofit: false,
            },
        )
        .expect("answers stored");
    service
        .add_paycheck(
            &record.profile.form_id,
            PaycheckRequest {
                pay_date: prior_month() + Duration::days(19),
                gross_pay_amount: 600.0,
                hours_worked: 40.0,
            },
        )
        .expect("paycheck added");

    let breakdown = service
        .verify(&record.profile.form_id)
        .expect("verification runs");

    assert!(breakdown.income_requirement_met);
    let stored = service.get(&record.profile.form_id).expect("record exists");
    assert_eq!(stored.evaluation, Some(breakdown));
}

#[test]
fn submit_completes_the_form_with_a_fresh_evaluation() {
    let (service, _repository) = build_service();
    let record = service.create(new_form_request()).expect("form created");

    let submitted = service.submit(&record.profile.form_id).expect("submitted");

    assert!(submitted.completed);
    let evaluation = submitted.evaluation.expect("evaluation stored");
    assert!(!evaluation.meets_requirements());

    let view = service
        .get(&record.profile.form_id)
        .expect("record exists")
        .status_view();
    assert!(view.completed);
    assert_eq!(view.meets_requirements, Some(false));
}

#[test]
fn missing_forms_surface_not_found() {
    let (service, _repository) = build_service();

    match service.get(&crate::forms::FormId("form-999999".to_string())) {
        Err(FormServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn repository_failures_propagate() {
    let service = EngagementFormService::new(Arc::new(UnavailableRepository), VerifierConfig::default());

    match service.create(new_form_request()) {
        Err(FormServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable, got {other:?}"),
    }
}

#[test]
fn report_includes_unused_records_and_criteria() {
    let (service, _repository) = build_service();
    let record = service.create(new_form_request()).expect("form created");
    service
        .answer_questions(
            &record.profile.form_id,
            QuestionAnswers {
                has_job: true,
                is_student: false,
                enrolled_work_program: false,
                volunteers_nonprofit: false,
            },
        )
        .expect("answers stored");
    service
        .add_paycheck(
            &record.profile.form_id,
            PaycheckRequest {
                pay_date: prior_month() + Duration::days(19),
                gross_pay_amount: 600.0,
                hours_worked: 40.0,
            },
        )
        .expect("in-window paycheck");
    service
        .add_paycheck(
            &record.profile.form_id,
            PaycheckRequest {
                pay_date: application_date(),
                gross_pay_amount: 250.0,
                hours_worked: 18.0,
            },
        )
        .expect("out-of-window paycheck");

    let summary = service
        .report(&record.profile.form_id)
        .expect("report builds");

    assert!(summary.meets_requirements);
    assert_eq!(summary.prior_month_label.as_deref(), Some("January 2024"));
    assert_eq!(summary.criteria.len(), 3);
    assert_eq!(summary.total_income, 600.0);
    assert_eq!(summary.unused_records.len(), 1);
    assert_eq!(summary.unused_records[0].count, 1);
    assert_eq!(summary.unused_records[0].months, vec!["February 2024".to_string()]);
}
