use chrono::NaiveDate;
use serde::Serialize;

use super::super::domain::FormId;
use super::super::verifier::UnusedRecordKind;

/// The three prongs of the eligibility rule, in the order the report lists
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityCriterion {
    Enrollment,
    Income,
    Hours,
}

impl EligibilityCriterion {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Enrollment => "Enrolled in school half-time or more",
            Self::Income => "Monthly income at or above the minimum",
            Self::Hours => "Combined qualifying hours at or above the minimum",
        }
    }

    pub const fn ordered() -> [EligibilityCriterion; 3] {
        [Self::Enrollment, Self::Income, Self::Hours]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CriterionEntry {
    pub criterion: EligibilityCriterion,
    pub criterion_label: &'static str,
    pub met: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HoursBreakdownView {
    pub work_hours: f64,
    pub school_hours: f64,
    pub work_program_hours: f64,
    pub volunteer_hours: f64,
    pub total_hours: f64,
}

/// Records that were submitted but ignored because they fell outside the
/// prior-month window, grouped by record kind.
#[derive(Debug, Clone, Serialize)]
pub struct UnusedRecordsView {
    pub kind: UnusedRecordKind,
    pub kind_label: &'static str,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_income: Option<f64>,
    pub total_hours: f64,
    pub months: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EngagementReportSummary {
    pub form_id: FormId,
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_month_label: Option<String>,
    pub completed: bool,
    pub meets_requirements: bool,
    pub criteria: Vec<CriterionEntry>,
    pub total_income: f64,
    pub hours: HoursBreakdownView,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unused_records: Vec<UnusedRecordsView>,
}
