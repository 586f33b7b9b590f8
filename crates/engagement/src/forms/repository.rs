use serde::{Deserialize, Serialize};

use super::domain::{ActivityProfile, FormId};
use super::verifier::VerificationBreakdown;

/// Repository record containing the profile, completion flag, and the last
/// verification breakdown (if any).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormRecord {
    pub profile: ActivityProfile,
    pub completed: bool,
    pub evaluation: Option<VerificationBreakdown>,
}

impl FormRecord {
    pub fn eligibility_note(&self) -> String {
        match &self.evaluation {
            Some(breakdown) if breakdown.meets_requirements() => {
                "meets community engagement requirements".to_string()
            }
            Some(_) => "does not meet community engagement requirements".to_string(),
            None => "pending verification".to_string(),
        }
    }

    pub fn status_view(&self) -> FormStatusView {
        FormStatusView {
            form_id: self.profile.form_id.clone(),
            user_name: self.profile.user_name.clone(),
            completed: self.completed,
            eligibility_note: self.eligibility_note(),
            meets_requirements: self
                .evaluation
                .as_ref()
                .map(|breakdown| breakdown.meets_requirements()),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait FormRepository: Send + Sync {
    fn insert(&self, record: FormRecord) -> Result<FormRecord, RepositoryError>;
    fn update(&self, record: FormRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &FormId) -> Result<Option<FormRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("form already exists")]
    Conflict,
    #[error("form not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a form's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct FormStatusView {
    pub form_id: FormId,
    pub user_name: String,
    pub completed: bool,
    pub eligibility_note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meets_requirements: Option<bool>,
}
