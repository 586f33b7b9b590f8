use serde::{Deserialize, Serialize};

use super::domain::ActivityProfile;

/// Pages of the engagement wizard in presentation order. Activity detail
/// steps are skipped when the matching flag from the questions page is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Questions,
    Job,
    Student,
    WorkProgram,
    Volunteer,
    Review,
    Summary,
}

const STEP_ORDER: [WizardStep; 5] = [
    WizardStep::Questions,
    WizardStep::Job,
    WizardStep::Student,
    WizardStep::WorkProgram,
    WizardStep::Volunteer,
];

impl WizardStep {
    pub const fn label(self) -> &'static str {
        match self {
            WizardStep::Questions => "Engagement questions",
            WizardStep::Job => "Job paychecks",
            WizardStep::Student => "School enrollment",
            WizardStep::WorkProgram => "Work program",
            WizardStep::Volunteer => "Volunteer shifts",
            WizardStep::Review => "Review",
            WizardStep::Summary => "Summary",
        }
    }

    /// The data-entry steps in the order the wizard presents them.
    pub const fn ordered() -> [WizardStep; 5] {
        STEP_ORDER
    }

    /// A detail step is skipped when its gating answer is "no".
    pub fn skip(self, profile: &ActivityProfile) -> bool {
        match self {
            WizardStep::Job => !profile.has_job,
            WizardStep::Student => !profile.is_student,
            WizardStep::WorkProgram => !profile.enrolled_work_program,
            WizardStep::Volunteer => !profile.volunteers_nonprofit,
            _ => false,
        }
    }
}

/// The step that follows `current` for this profile, skipping steps whose
/// flag is unset. Past the last detail step the wizard lands on review;
/// submitting the review page lands on the summary, which is terminal.
pub fn next_step(current: WizardStep, profile: &ActivityProfile) -> WizardStep {
    if matches!(current, WizardStep::Review | WizardStep::Summary) {
        return WizardStep::Summary;
    }

    let Some(index) = STEP_ORDER.iter().position(|step| *step == current) else {
        return WizardStep::Review;
    };

    STEP_ORDER
        .iter()
        .skip(index + 1)
        .copied()
        .find(|step| !step.skip(profile))
        .unwrap_or(WizardStep::Review)
}
