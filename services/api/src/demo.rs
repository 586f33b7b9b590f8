use crate::infra::{default_verifier_config, InMemoryFormRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use engagement::error::AppError;
use engagement::forms::{
    ActivityProfile, EngagementFormService, EngagementReport, EngagementReportSummary,
    EnrollmentStatus, FormRecord, NewFormRequest, PaycheckRequest, QuestionAnswers,
    RequirementsVerifier, StudentDetails, VolunteerShiftRequest,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Application date for the demo form (YYYY-MM-DD). Defaults to today, so
    /// the demo activity lands in last month's window.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) application_date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct EligibilityReportArgs {
    /// Path to a JSON file containing a saved activity profile
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Override the minimum qualifying monthly income
    #[arg(long)]
    pub(crate) minimum_income: Option<f64>,
    /// Override the minimum qualifying total hours
    #[arg(long)]
    pub(crate) minimum_hours: Option<f64>,
}

pub(crate) fn run_eligibility_report(args: EligibilityReportArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.profile)?;
    let profile: ActivityProfile = serde_json::from_str(&raw)?;

    let mut config = default_verifier_config();
    if let Some(minimum_income) = args.minimum_income {
        config.minimum_monthly_income = minimum_income;
    }
    if let Some(minimum_hours) = args.minimum_hours {
        config.minimum_total_hours = minimum_hours;
    }

    let breakdown = {
        let verifier = RequirementsVerifier::new(&profile, config);
        verifier.verification_details()
    };
    let record = FormRecord {
        profile,
        completed: false,
        evaluation: Some(breakdown.clone()),
    };
    let summary = EngagementReport::new(record, breakdown).summary();

    render_summary(&summary);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let application_date = args
        .application_date
        .unwrap_or_else(|| Local::now().date_naive());

    println!("Community engagement wizard demo");
    println!("- Application date: {application_date}");

    let repository = Arc::new(InMemoryFormRepository::default());
    let service = Arc::new(EngagementFormService::new(
        repository,
        default_verifier_config(),
    ));

    let record = service.create(NewFormRequest {
        user_name: "Demo Applicant".to_string(),
        email: "demo.applicant@example.com".to_string(),
        organization: Some("Community Outreach".to_string()),
        application_date: Some(application_date),
    })?;
    let form_id = record.profile.form_id.clone();
    println!("- Opened form {}", form_id.0);

    let next = service.answer_questions(
        &form_id,
        QuestionAnswers {
            has_job: true,
            is_student: true,
            enrolled_work_program: false,
            volunteers_nonprofit: true,
        },
    )?;
    println!("- Questions answered, next step: {}", next.label());

    // Activity dated mid-way through the prior calendar month, inside the
    // window the verifier counts.
    let prior = record
        .profile
        .prior_month()
        .map(|first| first + chrono::Duration::days(14))
        .unwrap_or(application_date);

    service.add_paycheck(
        &form_id,
        PaycheckRequest {
            pay_date: prior,
            gross_pay_amount: 420.0,
            hours_worked: 35.0,
        },
    )?;
    println!("- Recorded one paycheck");

    let next = service.record_student_details(
        &form_id,
        StudentDetails {
            school_name: Some("Community College".to_string()),
            enrollment_status: Some(EnrollmentStatus::LessThanHalfTime),
            school_hours: Some(25.0),
        },
    )?;
    println!("- Student details captured, next step: {}", next.label());

    service.add_volunteer_shift(
        &form_id,
        VolunteerShiftRequest {
            organization_name: "Neighborhood Food Pantry".to_string(),
            shift_date: prior,
            hours: 20.0,
        },
    )?;
    println!("- Recorded one volunteer shift");

    let submitted = service.submit(&form_id)?;
    println!(
        "- Form submitted, completed: {}, note: {}",
        submitted.completed,
        submitted.eligibility_note()
    );

    let summary = service.report(&form_id)?;
    render_summary(&summary);
    Ok(())
}

fn render_summary(summary: &EngagementReportSummary) {
    println!("\nEligibility report for {}", summary.user_name);
    if let Some(label) = &summary.prior_month_label {
        println!("- Reporting window: {label}");
    } else {
        println!("- Reporting window: none (no application date)");
    }
    println!(
        "- Meets requirements: {}",
        if summary.meets_requirements { "yes" } else { "no" }
    );
    println!("Criteria:");
    for entry in &summary.criteria {
        println!(
            "  - {}: {}",
            entry.criterion_label,
            if entry.met { "met" } else { "not met" }
        );
    }
    println!("- Counted income: ${:.2}", summary.total_income);
    println!(
        "- Counted hours: {:.1} (work {:.1} | school {:.1} | work program {:.1} | volunteer {:.1})",
        summary.hours.total_hours,
        summary.hours.work_hours,
        summary.hours.school_hours,
        summary.hours.work_program_hours,
        summary.hours.volunteer_hours
    );
    if summary.unused_records.is_empty() {
        println!("- Ignored records: none");
    } else {
        println!("Ignored records (outside the reporting window):");
        for view in &summary.unused_records {
            let income = view
                .total_income
                .map(|amount| format!(" | ${amount:.2}"))
                .unwrap_or_default();
            println!(
                "  - {}: {} record(s){} | {:.1} hours | months: {}",
                view.kind_label,
                view.count,
                income,
                view.total_hours,
                view.months.join(", ")
            );
        }
    }
}
