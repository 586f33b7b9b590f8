use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::FormId;
use super::flow::{self, WizardStep};
use super::repository::{FormRepository, RepositoryError};
use super::service::{
    EngagementFormService, FormServiceError, NewFormRequest, PaycheckRequest, QuestionAnswers,
    StudentDetails, VolunteerShiftRequest, WorkProgramDetails,
};

/// Router builder exposing HTTP endpoints for the engagement wizard and the
/// verification report.
pub fn engagement_router<R>(service: Arc<EngagementFormService<R>>) -> Router
where
    R: FormRepository + 'static,
{
    Router::new()
        .route("/api/v1/engagement/forms", post(create_handler::<R>))
        .route(
            "/api/v1/engagement/forms/:form_id",
            get(status_handler::<R>),
        )
        .route(
            "/api/v1/engagement/forms/:form_id/questions",
            post(questions_handler::<R>),
        )
        .route(
            "/api/v1/engagement/forms/:form_id/student",
            post(student_handler::<R>),
        )
        .route(
            "/api/v1/engagement/forms/:form_id/work-program",
            post(work_program_handler::<R>),
        )
        .route(
            "/api/v1/engagement/forms/:form_id/paychecks",
            post(paycheck_handler::<R>),
        )
        .route(
            "/api/v1/engagement/forms/:form_id/volunteer-shifts",
            post(volunteer_shift_handler::<R>),
        )
        .route(
            "/api/v1/engagement/forms/:form_id/submit",
            post(submit_handler::<R>),
        )
        .route(
            "/api/v1/engagement/forms/:form_id/report",
            get(report_handler::<R>),
        )
        .with_state(service)
}

fn error_response(error: FormServiceError) -> Response {
    let status = match &error {
        FormServiceError::Intake(_) => StatusCode::UNPROCESSABLE_ENTITY,
        FormServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        FormServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        FormServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<EngagementFormService<R>>>,
    axum::Json(request): axum::Json<NewFormRequest>,
) -> Response
where
    R: FormRepository + 'static,
{
    match service.create(request) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<EngagementFormService<R>>>,
    Path(form_id): Path<String>,
) -> Response
where
    R: FormRepository + 'static,
{
    let id = FormId(form_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<EngagementFormService<R>>>,
    Path(form_id): Path<String>,
    axum::Json(answers): axum::Json<QuestionAnswers>,
) -> Response
where
    R: FormRepository + 'static,
{
    let id = FormId(form_id);
    match service.answer_questions(&id, answers) {
        Ok(next) => next_step_response(&id, next),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn student_handler<R>(
    State(service): State<Arc<EngagementFormService<R>>>,
    Path(form_id): Path<String>,
    axum::Json(details): axum::Json<StudentDetails>,
) -> Response
where
    R: FormRepository + 'static,
{
    let id = FormId(form_id);
    match service.record_student_details(&id, details) {
        Ok(next) => next_step_response(&id, next),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn work_program_handler<R>(
    State(service): State<Arc<EngagementFormService<R>>>,
    Path(form_id): Path<String>,
    axum::Json(details): axum::Json<WorkProgramDetails>,
) -> Response
where
    R: FormRepository + 'static,
{
    let id = FormId(form_id);
    match service.record_work_program(&id, details) {
        Ok(next) => next_step_response(&id, next),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn paycheck_handler<R>(
    State(service): State<Arc<EngagementFormService<R>>>,
    Path(form_id): Path<String>,
    axum::Json(request): axum::Json<PaycheckRequest>,
) -> Response
where
    R: FormRepository + 'static,
{
    let id = FormId(form_id);
    match service.add_paycheck(&id, request) {
        Ok(record) => {
            let payload = json!({
                "form_id": record.profile.form_id,
                "paycheck_count": record.profile.paychecks.len(),
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn volunteer_shift_handler<R>(
    State(service): State<Arc<EngagementFormService<R>>>,
    Path(form_id): Path<String>,
    axum::Json(request): axum::Json<VolunteerShiftRequest>,
) -> Response
where
    R: FormRepository + 'static,
{
    let id = FormId(form_id);
    match service.add_volunteer_shift(&id, request) {
        Ok(record) => {
            let payload = json!({
                "form_id": record.profile.form_id,
                "volunteer_shift_count": record.profile.volunteer_shifts.len(),
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<EngagementFormService<R>>>,
    Path(form_id): Path<String>,
) -> Response
where
    R: FormRepository + 'static,
{
    let id = FormId(form_id);
    match service.submit(&id) {
        Ok(record) => {
            let view = record.status_view();
            let next = flow::next_step(WizardStep::Review, &record.profile);
            let payload = json!({
                "form_id": view.form_id,
                "user_name": view.user_name,
                "completed": view.completed,
                "eligibility_note": view.eligibility_note,
                "meets_requirements": view.meets_requirements,
                "next_step": next,
                "next_step_label": next.label(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<EngagementFormService<R>>>,
    Path(form_id): Path<String>,
) -> Response
where
    R: FormRepository + 'static,
{
    let id = FormId(form_id);
    match service.report(&id) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

fn next_step_response(form_id: &FormId, next: WizardStep) -> Response {
    let payload = json!({
        "form_id": form_id,
        "next_step": next,
        "next_step_label": next.label(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
