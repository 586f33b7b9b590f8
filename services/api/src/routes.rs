use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use engagement::forms::{
    engagement_router, month_label, ActivityProfile, EngagementFormService, EnrollmentStatus,
    FormId, FormRepository, PaycheckRecord, RequirementsVerifier, VerificationBreakdown,
    VolunteerShiftRecord,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// One-shot verification request: the activity a wizard pass would collect,
/// without opening a persistent form.
#[derive(Debug, Deserialize)]
pub(crate) struct VerificationRequest {
    #[serde(default)]
    pub(crate) application_date: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) has_job: bool,
    #[serde(default)]
    pub(crate) is_student: bool,
    #[serde(default)]
    pub(crate) enrolled_work_program: bool,
    #[serde(default)]
    pub(crate) volunteers_nonprofit: bool,
    #[serde(default)]
    pub(crate) enrollment_status: Option<EnrollmentStatus>,
    #[serde(default)]
    pub(crate) school_hours: Option<f64>,
    #[serde(default)]
    pub(crate) hours_attended: Option<f64>,
    #[serde(default)]
    pub(crate) paychecks: Vec<PaycheckRecord>,
    #[serde(default)]
    pub(crate) volunteer_shifts: Vec<VolunteerShiftRecord>,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerificationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) application_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) prior_month_label: Option<String>,
    pub(crate) meets_requirements: bool,
    pub(crate) breakdown: VerificationBreakdown,
}

pub(crate) fn with_engagement_routes<R>(
    service: Arc<EngagementFormService<R>>,
) -> axum::Router
where
    R: FormRepository + 'static,
{
    engagement_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/engagement/verify",
            axum::routing::post(verify_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn verify_endpoint(
    Json(payload): Json<VerificationRequest>,
) -> Json<VerificationResponse> {
    let profile = ad_hoc_profile(payload);
    let verifier = RequirementsVerifier::new(&profile, crate::infra::default_verifier_config());
    let breakdown = verifier.verification_details();

    Json(VerificationResponse {
        application_date: profile.application_date,
        prior_month_label: profile.prior_month().map(month_label),
        meets_requirements: breakdown.meets_requirements(),
        breakdown,
    })
}

fn ad_hoc_profile(request: VerificationRequest) -> ActivityProfile {
    let mut profile = ActivityProfile::new(
        FormId("ad-hoc".to_string()),
        "ad-hoc".to_string(),
        "ad-hoc@localhost".to_string(),
    );
    profile.application_date = request.application_date;
    profile.has_job = request.has_job;
    profile.is_student = request.is_student;
    profile.enrolled_work_program = request.enrolled_work_program;
    profile.volunteers_nonprofit = request.volunteers_nonprofit;
    profile.enrollment_status = request.enrollment_status;
    profile.school_hours = request.school_hours;
    profile.hours_attended = request.hours_attended;
    profile.paychecks = request.paychecks;
    profile.volunteer_shifts = request.volunteer_shifts;
    profile
}
