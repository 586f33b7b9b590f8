use super::super::domain::month_label;
use super::super::repository::FormRecord;
use super::super::verifier::VerificationBreakdown;
use super::views::{
    CriterionEntry, EligibilityCriterion, EngagementReportSummary, HoursBreakdownView,
    UnusedRecordsView,
};

/// Pairs a form record with its verification breakdown and projects the
/// serializable summary the report renderer consumes.
#[derive(Debug)]
pub struct EngagementReport {
    record: FormRecord,
    breakdown: VerificationBreakdown,
}

impl EngagementReport {
    pub fn new(record: FormRecord, breakdown: VerificationBreakdown) -> Self {
        Self { record, breakdown }
    }

    pub fn summary(&self) -> EngagementReportSummary {
        let profile = &self.record.profile;
        let breakdown = &self.breakdown;

        let criteria = EligibilityCriterion::ordered()
            .into_iter()
            .map(|criterion| {
                let met = match criterion {
                    EligibilityCriterion::Enrollment => breakdown.enrolled_half_time_or_more,
                    EligibilityCriterion::Income => breakdown.income_requirement_met,
                    EligibilityCriterion::Hours => breakdown.hours_requirement_met,
                };
                CriterionEntry {
                    criterion,
                    criterion_label: criterion.label(),
                    met,
                }
            })
            .collect();

        let unused_records = breakdown
            .unused_data
            .iter()
            .map(|(kind, records)| UnusedRecordsView {
                kind: *kind,
                kind_label: kind.label(),
                count: records.count,
                total_income: records.total_income,
                total_hours: records.total_hours,
                months: records.months.clone(),
            })
            .collect();

        EngagementReportSummary {
            form_id: profile.form_id.clone(),
            user_name: profile.user_name.clone(),
            organization: profile.organization.clone(),
            application_date: profile.application_date,
            prior_month_label: profile.prior_month().map(month_label),
            completed: self.record.completed,
            meets_requirements: breakdown.meets_requirements(),
            criteria,
            total_income: breakdown.total_income,
            hours: HoursBreakdownView {
                work_hours: breakdown.work_hours,
                school_hours: breakdown.school_hours,
                work_program_hours: breakdown.work_program_hours,
                volunteer_hours: breakdown.volunteer_hours,
                total_hours: breakdown.total_hours,
            },
            unused_records,
        }
    }
}
