use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Record kinds that can show up in the unused-data mapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum UnusedRecordKind {
    JobPaychecks,
    VolunteerShifts,
}

impl UnusedRecordKind {
    pub const fn label(self) -> &'static str {
        match self {
            UnusedRecordKind::JobPaychecks => "job paychecks",
            UnusedRecordKind::VolunteerShifts => "volunteer shifts",
        }
    }
}

/// Summary of submitted records that fell outside the prior-month window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnusedRecords {
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_income: Option<f64>,
    pub total_hours: f64,
    /// Distinct month labels ("January 2024") the ignored records fall in,
    /// in chronological order.
    pub months: Vec<String>,
}

/// Full verification output: which prongs passed, every derived total, and the
/// records that were ignored. Value equality backs the idempotence contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationBreakdown {
    pub enrolled_half_time_or_more: bool,
    pub income_requirement_met: bool,
    pub hours_requirement_met: bool,
    pub total_income: f64,
    pub total_hours: f64,
    pub school_hours: f64,
    pub work_hours: f64,
    pub work_program_hours: f64,
    pub volunteer_hours: f64,
    #[serde(default)]
    pub unused_data: BTreeMap<UnusedRecordKind, UnusedRecords>,
}

impl VerificationBreakdown {
    /// The three-way rule over the already-computed flags. False for the
    /// degenerate no-application-date breakdown, where every flag is false.
    pub fn meets_requirements(&self) -> bool {
        self.enrolled_half_time_or_more || self.income_requirement_met || self.hours_requirement_met
    }
}
