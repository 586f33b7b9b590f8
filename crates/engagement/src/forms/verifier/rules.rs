use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use super::super::domain::{month_bucket, month_label, ActivityProfile, EnrollmentStatus};
use super::breakdown::{UnusedRecordKind, UnusedRecords};

/// Per-source hour contributions for the prior-month window.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HourTotals {
    pub work_hours: f64,
    pub school_hours: f64,
    pub work_program_hours: f64,
    pub volunteer_hours: f64,
}

impl HourTotals {
    pub(crate) fn total(&self) -> f64 {
        self.work_hours + self.school_hours + self.work_program_hours + self.volunteer_hours
    }
}

/// Calendar-month equality: a record counts iff its year and month match the
/// window, never a day-range comparison.
pub(crate) fn in_month(date: NaiveDate, month: NaiveDate) -> bool {
    date.year() == month.year() && date.month() == month.month()
}

pub(crate) fn total_income(profile: &ActivityProfile, prior_month: NaiveDate) -> f64 {
    if !profile.has_job {
        return 0.0;
    }

    profile
        .paychecks
        .iter()
        .filter(|paycheck| in_month(paycheck.pay_date, prior_month))
        .map(|paycheck| paycheck.gross_pay_amount)
        .sum()
}

pub(crate) fn hour_totals(profile: &ActivityProfile, prior_month: NaiveDate) -> HourTotals {
    HourTotals {
        work_hours: work_hours(profile, prior_month),
        school_hours: school_hours(profile),
        work_program_hours: work_program_hours(profile),
        volunteer_hours: volunteer_hours(profile, prior_month),
    }
}

fn work_hours(profile: &ActivityProfile, prior_month: NaiveDate) -> f64 {
    if !profile.has_job {
        return 0.0;
    }

    profile
        .paychecks
        .iter()
        .filter(|paycheck| in_month(paycheck.pay_date, prior_month))
        .map(|paycheck| paycheck.hours_worked)
        .sum()
}

fn school_hours(profile: &ActivityProfile) -> f64 {
    if !profile.is_student {
        return 0.0;
    }

    match profile.enrollment_status {
        // Half-time-or-more already qualifies on its own; counting the hours
        // again would double-credit schooling.
        Some(EnrollmentStatus::HalfTimeOrMore) => 0.0,
        Some(EnrollmentStatus::LessThanHalfTime) => profile.school_hours.unwrap_or(0.0),
        None => 0.0,
    }
}

fn work_program_hours(profile: &ActivityProfile) -> f64 {
    if !profile.enrolled_work_program {
        return 0.0;
    }

    profile.hours_attended.unwrap_or(0.0)
}

fn volunteer_hours(profile: &ActivityProfile, prior_month: NaiveDate) -> f64 {
    if !profile.volunteers_nonprofit {
        return 0.0;
    }

    profile
        .volunteer_shifts
        .iter()
        .filter(|shift| in_month(shift.shift_date, prior_month))
        .map(|shift| shift.hours)
        .sum()
}

/// Book-keeping for records that fell outside the window and were therefore
/// ignored. An entry appears only when the owning flag is set and at least one
/// out-of-window record exists.
pub(crate) fn unused_data(
    profile: &ActivityProfile,
    prior_month: NaiveDate,
) -> BTreeMap<UnusedRecordKind, UnusedRecords> {
    let mut unused = BTreeMap::new();

    if profile.has_job && !profile.paychecks.is_empty() {
        let outside: Vec<_> = profile
            .paychecks
            .iter()
            .filter(|paycheck| !in_month(paycheck.pay_date, prior_month))
            .collect();

        if !outside.is_empty() {
            unused.insert(
                UnusedRecordKind::JobPaychecks,
                UnusedRecords {
                    count: outside.len(),
                    total_income: Some(outside.iter().map(|p| p.gross_pay_amount).sum()),
                    total_hours: outside.iter().map(|p| p.hours_worked).sum(),
                    months: distinct_month_labels(outside.iter().map(|p| p.pay_date)),
                },
            );
        }
    }

    if profile.volunteers_nonprofit && !profile.volunteer_shifts.is_empty() {
        let outside: Vec<_> = profile
            .volunteer_shifts
            .iter()
            .filter(|shift| !in_month(shift.shift_date, prior_month))
            .collect();

        if !outside.is_empty() {
            unused.insert(
                UnusedRecordKind::VolunteerShifts,
                UnusedRecords {
                    count: outside.len(),
                    total_income: None,
                    total_hours: outside.iter().map(|s| s.hours).sum(),
                    months: distinct_month_labels(outside.iter().map(|s| s.shift_date)),
                },
            );
        }
    }

    unused
}

fn distinct_month_labels(dates: impl Iterator<Item = NaiveDate>) -> Vec<String> {
    let buckets: BTreeSet<NaiveDate> = dates.filter_map(month_bucket).collect();
    buckets.into_iter().map(month_label).collect()
}
