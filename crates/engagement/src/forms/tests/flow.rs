use super::common::*;
use crate::forms::flow::{next_step, WizardStep};

#[test]
fn questions_route_to_the_first_selected_activity() {
    let mut profile = profile();
    profile.has_job = true;
    profile.volunteers_nonprofit = true;

    assert_eq!(next_step(WizardStep::Questions, &profile), WizardStep::Job);
}

#[test]
fn skipped_steps_are_bridged() {
    let mut profile = profile();
    profile.is_student = true;
    profile.volunteers_nonprofit = true;

    assert_eq!(
        next_step(WizardStep::Questions, &profile),
        WizardStep::Student
    );
    assert_eq!(
        next_step(WizardStep::Student, &profile),
        WizardStep::Volunteer
    );
}

#[test]
fn no_selected_activities_go_straight_to_review() {
    let profile = profile();

    assert_eq!(next_step(WizardStep::Questions, &profile), WizardStep::Review);
}

#[test]
fn last_activity_step_lands_on_review() {
    let mut profile = profile();
    profile.volunteers_nonprofit = true;

    assert_eq!(next_step(WizardStep::Volunteer, &profile), WizardStep::Review);
}

#[test]
fn review_submission_lands_on_the_summary() {
    let mut profile = profile();
    profile.has_job = true;

    assert_eq!(next_step(WizardStep::Review, &profile), WizardStep::Summary);
}

#[test]
fn summary_is_terminal() {
    let profile = profile();

    assert_eq!(next_step(WizardStep::Summary, &profile), WizardStep::Summary);
}

#[test]
fn skip_tracks_the_gating_flags() {
    let mut profile = profile();
    assert!(WizardStep::Job.skip(&profile));
    assert!(WizardStep::WorkProgram.skip(&profile));

    profile.has_job = true;
    profile.enrolled_work_program = true;
    assert!(!WizardStep::Job.skip(&profile));
    assert!(!WizardStep::WorkProgram.skip(&profile));
    assert!(!WizardStep::Questions.skip(&profile));
}
