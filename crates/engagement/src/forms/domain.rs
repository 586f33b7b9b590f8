use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for engagement forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormId(pub String);

/// School enrollment intensity reported on the student step. Absence of a
/// value (a student who never picked a status) behaves like less-than-half-time
/// with no reportable hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    HalfTimeOrMore,
    LessThanHalfTime,
}

impl EnrollmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EnrollmentStatus::HalfTimeOrMore => "half-time or more",
            EnrollmentStatus::LessThanHalfTime => "less than half-time",
        }
    }
}

/// One paycheck reported on the job step. Amounts are validated strictly
/// positive by the intake guard before a record is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaycheckRecord {
    pub pay_date: NaiveDate,
    pub gross_pay_amount: f64,
    pub hours_worked: f64,
}

/// One volunteer shift reported on the volunteering step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerShiftRecord {
    pub organization_name: String,
    pub shift_date: NaiveDate,
    pub hours: f64,
}

/// Read-only snapshot of everything an applicant reported across the wizard.
/// The verifier consumes this as plain data; it never reaches back into
/// storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityProfile {
    pub form_id: FormId,
    pub user_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub application_date: Option<NaiveDate>,
    #[serde(default)]
    pub has_job: bool,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub enrolled_work_program: bool,
    #[serde(default)]
    pub volunteers_nonprofit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(default)]
    pub enrollment_status: Option<EnrollmentStatus>,
    #[serde(default)]
    pub school_hours: Option<f64>,
    #[serde(default)]
    pub hours_attended: Option<f64>,
    #[serde(default)]
    pub paychecks: Vec<PaycheckRecord>,
    #[serde(default)]
    pub volunteer_shifts: Vec<VolunteerShiftRecord>,
}

impl ActivityProfile {
    pub fn new(form_id: FormId, user_name: String, email: String) -> Self {
        Self {
            form_id,
            user_name,
            email,
            organization: None,
            application_date: None,
            has_job: false,
            is_student: false,
            enrolled_work_program: false,
            volunteers_nonprofit: false,
            school_name: None,
            enrollment_status: None,
            school_hours: None,
            hours_attended: None,
            paychecks: Vec::new(),
            volunteer_shifts: Vec::new(),
        }
    }

    /// First day of the calendar month immediately preceding the month that
    /// contains the application date. Every activity record is checked against
    /// this window; without an application date there is no window.
    pub fn prior_month(&self) -> Option<NaiveDate> {
        let date = self.application_date?;
        date.with_day(1)?.checked_sub_months(Months::new(1))
    }
}

/// Human-readable month label, e.g. "January 2024".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Truncate a date to the first of its month so records bucket by calendar
/// month rather than by day-distance comparisons.
pub fn month_bucket(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
}
