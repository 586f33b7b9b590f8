mod breakdown;
mod config;
mod rules;

pub use breakdown::{UnusedRecordKind, UnusedRecords, VerificationBreakdown};
pub use config::{VerifierConfig, MINIMUM_MONTHLY_INCOME, MINIMUM_TOTAL_HOURS};

use chrono::NaiveDate;

use super::domain::{ActivityProfile, EnrollmentStatus};

/// Stateless check of the community engagement rule against one activity
/// profile: eligible on half-time-or-more enrollment, on prior-month income,
/// or on combined prior-month hours. Pure aggregation over the snapshot; the
/// same input always yields the same output.
pub struct RequirementsVerifier<'a> {
    profile: &'a ActivityProfile,
    prior_month: Option<NaiveDate>,
    config: VerifierConfig,
}

impl<'a> RequirementsVerifier<'a> {
    pub fn new(profile: &'a ActivityProfile, config: VerifierConfig) -> Self {
        let prior_month = profile.prior_month();
        Self {
            profile,
            prior_month,
            config,
        }
    }

    /// True iff any prong passes. Comparisons are inclusive: a total exactly
    /// at the minimum qualifies. Without an application date no window exists
    /// and the answer is unconditionally false.
    pub fn meets_requirements(&self) -> bool {
        let Some(prior_month) = self.prior_month else {
            return false;
        };

        self.enrolled_half_time_or_more()
            || self.income_requirement_met(prior_month)
            || self.hours_requirement_met(prior_month)
    }

    /// Detailed totals and unused-record book-keeping. Always succeeds; when
    /// the window is undefined every total is zero and every flag false.
    pub fn verification_details(&self) -> VerificationBreakdown {
        let Some(prior_month) = self.prior_month else {
            return VerificationBreakdown::default();
        };

        let total_income = rules::total_income(self.profile, prior_month);
        let hours = rules::hour_totals(self.profile, prior_month);

        VerificationBreakdown {
            enrolled_half_time_or_more: self.enrolled_half_time_or_more(),
            income_requirement_met: total_income >= self.config.minimum_monthly_income,
            hours_requirement_met: hours.total() >= self.config.minimum_total_hours,
            total_income,
            total_hours: hours.total(),
            school_hours: hours.school_hours,
            work_hours: hours.work_hours,
            work_program_hours: hours.work_program_hours,
            volunteer_hours: hours.volunteer_hours,
            unused_data: rules::unused_data(self.profile, prior_month),
        }
    }

    fn enrolled_half_time_or_more(&self) -> bool {
        self.profile.is_student
            && self.profile.enrollment_status == Some(EnrollmentStatus::HalfTimeOrMore)
    }

    fn income_requirement_met(&self, prior_month: NaiveDate) -> bool {
        rules::total_income(self.profile, prior_month) >= self.config.minimum_monthly_income
    }

    fn hours_requirement_met(&self, prior_month: NaiveDate) -> bool {
        rules::hour_totals(self.profile, prior_month).total() >= self.config.minimum_total_hours
    }
}
