use chrono::NaiveDate;

use super::domain::{PaycheckRecord, VolunteerShiftRecord};

/// Validation errors raised while constructing activity records from raw
/// wizard input. The verifier never sees a record that failed these checks.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("applicant name is required")]
    MissingName,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("{field} must be greater than zero (found {found})")]
    NonPositiveAmount { field: &'static str, found: f64 },
    #[error("organization name is required for volunteer shifts")]
    MissingOrganization,
}

/// Guard responsible for producing validated domain records.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Checks the identity fields collected on the first wizard page.
    pub fn applicant(&self, user_name: &str, email: &str) -> Result<(), IntakeError> {
        if user_name.trim().is_empty() {
            return Err(IntakeError::MissingName);
        }

        if !plausible_email(email) {
            return Err(IntakeError::InvalidEmail(email.to_string()));
        }

        Ok(())
    }

    pub fn paycheck(
        &self,
        pay_date: NaiveDate,
        gross_pay_amount: f64,
        hours_worked: f64,
    ) -> Result<PaycheckRecord, IntakeError> {
        require_positive("gross pay amount", gross_pay_amount)?;
        require_positive("hours worked", hours_worked)?;

        Ok(PaycheckRecord {
            pay_date,
            gross_pay_amount,
            hours_worked,
        })
    }

    pub fn volunteer_shift(
        &self,
        organization_name: &str,
        shift_date: NaiveDate,
        hours: f64,
    ) -> Result<VolunteerShiftRecord, IntakeError> {
        if organization_name.trim().is_empty() {
            return Err(IntakeError::MissingOrganization);
        }
        require_positive("shift hours", hours)?;

        Ok(VolunteerShiftRecord {
            organization_name: organization_name.trim().to_string(),
            shift_date,
            hours,
        })
    }
}

fn require_positive(field: &'static str, found: f64) -> Result<(), IntakeError> {
    if found > 0.0 && found.is_finite() {
        Ok(())
    } else {
        Err(IntakeError::NonPositiveAmount { field, found })
    }
}

fn plausible_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
