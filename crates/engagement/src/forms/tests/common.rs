use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::forms::domain::{
    ActivityProfile, EnrollmentStatus, FormId, PaycheckRecord, VolunteerShiftRecord,
};
use crate::forms::repository::{FormRecord, FormRepository, RepositoryError};
use crate::forms::service::{EngagementFormService, NewFormRequest};
use crate::forms::verifier::{RequirementsVerifier, VerifierConfig};

pub(super) fn application_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 15).expect("valid date")
}

/// Start of the evaluation window implied by [`application_date`].
pub(super) fn prior_month() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

pub(super) fn profile() -> ActivityProfile {
    let mut profile = ActivityProfile::new(
        FormId("form-test".to_string()),
        "John Doe".to_string(),
        "john.doe@example.com".to_string(),
    );
    profile.application_date = Some(application_date());
    profile
}

pub(super) fn profile_without_application_date() -> ActivityProfile {
    let mut profile = profile();
    profile.application_date = None;
    profile
}

pub(super) fn paycheck(pay_date: NaiveDate, gross_pay_amount: f64, hours_worked: f64) -> PaycheckRecord {
    PaycheckRecord {
        pay_date,
        gross_pay_amount,
        hours_worked,
    }
}

pub(super) fn shift(shift_date: NaiveDate, hours: f64) -> VolunteerShiftRecord {
    VolunteerShiftRecord {
        organization_name: "Food Bank of Iowa".to_string(),
        shift_date,
        hours,
    }
}

pub(super) fn verifier(profile: &ActivityProfile) -> RequirementsVerifier<'_> {
    RequirementsVerifier::new(profile, VerifierConfig::default())
}

pub(super) fn new_form_request() -> NewFormRequest {
    NewFormRequest {
        user_name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        organization: Some("Example Org".to_string()),
        application_date: Some(application_date()),
    }
}

pub(super) fn half_time_student(profile: &mut ActivityProfile) {
    profile.is_student = true;
    profile.enrollment_status = Some(EnrollmentStatus::HalfTimeOrMore);
}

pub(super) fn build_service() -> (
    EngagementFormService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = EngagementFormService::new(repository.clone(), VerifierConfig::default());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<FormId, FormRecord>>>,
}

impl FormRepository for MemoryRepository {
    fn insert(&self, record: FormRecord) -> Result<FormRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile.form_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile.form_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: FormRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.profile.form_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &FormId) -> Result<Option<FormRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl FormRepository for ConflictRepository {
    fn insert(&self, _record: FormRecord) -> Result<FormRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: FormRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &FormId) -> Result<Option<FormRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl FormRepository for UnavailableRepository {
    fn insert(&self, _record: FormRecord) -> Result<FormRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: FormRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &FormId) -> Result<Option<FormRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}
