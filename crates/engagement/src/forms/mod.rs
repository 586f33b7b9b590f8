//! Community engagement form intake, wizard flow, and requirements
//! verification.
//!
//! The wizard collects one month of activity (paychecks, school enrollment,
//! work-program attendance, volunteer shifts) and the verifier decides
//! eligibility against the prior calendar month.

pub mod domain;
pub mod flow;
pub(crate) mod intake;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod verifier;

#[cfg(test)]
mod tests;

pub use domain::{
    month_label, ActivityProfile, EnrollmentStatus, FormId, PaycheckRecord, VolunteerShiftRecord,
};
pub use flow::{next_step, WizardStep};
pub use intake::IntakeError;
pub use report::{EligibilityCriterion, EngagementReport, EngagementReportSummary};
pub use repository::{FormRecord, FormRepository, FormStatusView, RepositoryError};
pub use router::engagement_router;
pub use service::{
    EngagementFormService, FormServiceError, NewFormRequest, PaycheckRequest, QuestionAnswers,
    StudentDetails, VolunteerShiftRequest, WorkProgramDetails,
};
pub use verifier::{
    RequirementsVerifier, UnusedRecordKind, UnusedRecords, VerificationBreakdown, VerifierConfig,
    MINIMUM_MONTHLY_INCOME, MINIMUM_TOTAL_HOURS,
};
