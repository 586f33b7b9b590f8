use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ActivityProfile, EnrollmentStatus, FormId};
use super::flow::{self, WizardStep};
use super::intake::{IntakeError, IntakeGuard};
use super::report::{EngagementReport, EngagementReportSummary};
use super::repository::{FormRecord, FormRepository, RepositoryError};
use super::verifier::{RequirementsVerifier, VerificationBreakdown, VerifierConfig};

/// Service composing the intake guard, repository, and verifier thresholds.
pub struct EngagementFormService<R> {
    guard: IntakeGuard,
    repository: Arc<R>,
    config: VerifierConfig,
}

static FORM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_form_id() -> FormId {
    let id = FORM_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    FormId(format!("form-{id:06}"))
}

/// Identity fields collected on the opening wizard page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFormRequest {
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub application_date: Option<NaiveDate>,
}

/// Checkbox answers from the questions page; each one gates a detail step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuestionAnswers {
    #[serde(default)]
    pub has_job: bool,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub enrolled_work_program: bool,
    #[serde(default)]
    pub volunteers_nonprofit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDetails {
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub enrollment_status: Option<EnrollmentStatus>,
    #[serde(default)]
    pub school_hours: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkProgramDetails {
    #[serde(default)]
    pub hours_attended: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaycheckRequest {
    pub pay_date: NaiveDate,
    pub gross_pay_amount: f64,
    pub hours_worked: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerShiftRequest {
    pub organization_name: String,
    pub shift_date: NaiveDate,
    pub hours: f64,
}

impl<R> EngagementFormService<R>
where
    R: FormRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: VerifierConfig) -> Self {
        Self {
            guard: IntakeGuard::default(),
            repository,
            config,
        }
    }

    /// Open a new engagement form, returning the repository-backed record.
    pub fn create(&self, request: NewFormRequest) -> Result<FormRecord, FormServiceError> {
        self.guard.applicant(&request.user_name, &request.email)?;

        let mut profile = ActivityProfile::new(next_form_id(), request.user_name, request.email);
        profile.organization = request.organization;
        profile.application_date = request.application_date;

        let record = FormRecord {
            profile,
            completed: false,
            evaluation: None,
        };

        Ok(self.repository.insert(record)?)
    }

    /// Persist the questions-page answers and report which step comes next.
    pub fn answer_questions(
        &self,
        form_id: &FormId,
        answers: QuestionAnswers,
    ) -> Result<WizardStep, FormServiceError> {
        let mut record = self.fetch(form_id)?;
        record.profile.has_job = answers.has_job;
        record.profile.is_student = answers.is_student;
        record.profile.enrolled_work_program = answers.enrolled_work_program;
        record.profile.volunteers_nonprofit = answers.volunteers_nonprofit;

        let next = flow::next_step(WizardStep::Questions, &record.profile);
        self.repository.update(record)?;
        Ok(next)
    }

    pub fn record_student_details(
        &self,
        form_id: &FormId,
        details: StudentDetails,
    ) -> Result<WizardStep, FormServiceError> {
        let mut record = self.fetch(form_id)?;
        record.profile.school_name = details.school_name;
        record.profile.enrollment_status = details.enrollment_status;
        record.profile.school_hours = details.school_hours;

        let next = flow::next_step(WizardStep::Student, &record.profile);
        self.repository.update(record)?;
        Ok(next)
    }

    pub fn record_work_program(
        &self,
        form_id: &FormId,
        details: WorkProgramDetails,
    ) -> Result<WizardStep, FormServiceError> {
        let mut record = self.fetch(form_id)?;
        record.profile.hours_attended = details.hours_attended;

        let next = flow::next_step(WizardStep::WorkProgram, &record.profile);
        self.repository.update(record)?;
        Ok(next)
    }

    /// Add one paycheck to the form after intake validation.
    pub fn add_paycheck(
        &self,
        form_id: &FormId,
        request: PaycheckRequest,
    ) -> Result<FormRecord, FormServiceError> {
        let paycheck = self.guard.paycheck(
            request.pay_date,
            request.gross_pay_amount,
            request.hours_worked,
        )?;

        let mut record = self.fetch(form_id)?;
        record.profile.paychecks.push(paycheck);
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Add one volunteer shift to the form after intake validation.
    pub fn add_volunteer_shift(
        &self,
        form_id: &FormId,
        request: VolunteerShiftRequest,
    ) -> Result<FormRecord, FormServiceError> {
        let shift = self.guard.volunteer_shift(
            &request.organization_name,
            request.shift_date,
            request.hours,
        )?;

        let mut record = self.fetch(form_id)?;
        record.profile.volunteer_shifts.push(shift);
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Run the requirements verifier and persist the breakdown.
    pub fn verify(&self, form_id: &FormId) -> Result<VerificationBreakdown, FormServiceError> {
        let mut record = self.fetch(form_id)?;

        let breakdown = {
            let verifier = RequirementsVerifier::new(&record.profile, self.config.clone());
            verifier.verification_details()
        };

        record.evaluation = Some(breakdown.clone());
        self.repository.update(record)?;
        Ok(breakdown)
    }

    /// Final submission from the review page: verify, then mark completed.
    pub fn submit(&self, form_id: &FormId) -> Result<FormRecord, FormServiceError> {
        let mut record = self.fetch(form_id)?;

        let breakdown = {
            let verifier = RequirementsVerifier::new(&record.profile, self.config.clone());
            verifier.verification_details()
        };

        record.evaluation = Some(breakdown);
        record.completed = true;
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Fetch a form and current status for API responses.
    pub fn get(&self, form_id: &FormId) -> Result<FormRecord, FormServiceError> {
        self.fetch(form_id)
    }

    /// Build the downloadable report summary, reusing a stored breakdown when
    /// present and computing one on the fly otherwise.
    pub fn report(&self, form_id: &FormId) -> Result<EngagementReportSummary, FormServiceError> {
        let record = self.fetch(form_id)?;

        let breakdown = match &record.evaluation {
            Some(breakdown) => breakdown.clone(),
            None => {
                RequirementsVerifier::new(&record.profile, self.config.clone())
                    .verification_details()
            }
        };

        Ok(EngagementReport::new(record, breakdown).summary())
    }

    fn fetch(&self, form_id: &FormId) -> Result<FormRecord, FormServiceError> {
        self.repository
            .fetch(form_id)?
            .ok_or(FormServiceError::Repository(RepositoryError::NotFound))
    }
}

/// Error raised by the engagement form service.
#[derive(Debug, thiserror::Error)]
pub enum FormServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
