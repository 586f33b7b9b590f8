mod summary;
pub mod views;

pub use summary::EngagementReport;
pub use views::{
    CriterionEntry, EligibilityCriterion, EngagementReportSummary, HoursBreakdownView,
    UnusedRecordsView,
};
