use axum::{
    Router,
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::alert::EmergencyKind;
use crate::api::{SharedState, status_for};
use crate::catalog::CatalogRepository;
use crate::dashboard::TeacherTab;
use crate::report;

#[derive(Deserialize, ToSchema)]
pub struct SendAlertRequest {
    pub kind: EmergencyKind,
}

#[derive(Deserialize, ToSchema)]
pub struct SelectTabRequest {
    pub tab: TeacherTab,
}

#[utoipa::path(
    context_path = "/api/teacher",
    path = "/list_alert_kinds",
    method(get),
    responses(
        (status = 200, description = "The emergency kinds and their canned messages", body = Vec<crate::alert::AlertKindInfo>),
        (status = 401, description = "No teacher signed in")
    )
)]
pub async fn list_alert_kinds(State(state): State<SharedState>) -> impl IntoResponse {
    let app = state.app.read();
    if let Err(e) = app.teacher() {
        return (status_for(&e), e.to_string()).into_response();
    }
    let kinds: Vec<_> = EmergencyKind::ALL
        .iter()
        .map(|kind| kind.describe())
        .collect();
    Json(kinds).into_response()
}

#[utoipa::path(
    context_path = "/api/teacher",
    path = "/send_alert",
    method(post),
    request_body = SendAlertRequest,
    responses(
        (status = 200, description = "Alert confirmation", body = crate::alert::AlertConfirmation),
        (status = 401, description = "No teacher signed in")
    )
)]
pub async fn send_alert(
    State(state): State<SharedState>,
    Json(req): Json<SendAlertRequest>,
) -> impl IntoResponse {
    match state.app.read().send_alert(req.kind) {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/teacher",
    path = "/list_roster",
    method(get),
    responses(
        (status = 200, description = "The class roster with status labels", body = Vec<crate::report::StudentOverview>),
        (status = 401, description = "No teacher signed in")
    )
)]
pub async fn list_roster(State(state): State<SharedState>) -> impl IntoResponse {
    let app = state.app.read();
    if let Err(e) = app.teacher() {
        return (status_for(&e), e.to_string()).into_response();
    }
    Json(report::roster_overview(app.catalog().roster())).into_response()
}

#[utoipa::path(
    context_path = "/api/teacher",
    path = "/class_report",
    method(get),
    responses(
        (status = 200, description = "Class-wide aggregates", body = crate::report::ClassReport),
        (status = 401, description = "No teacher signed in")
    )
)]
pub async fn class_report(State(state): State<SharedState>) -> impl IntoResponse {
    let app = state.app.read();
    if let Err(e) = app.teacher() {
        return (status_for(&e), e.to_string()).into_response();
    }
    Json(report::class_report(app.catalog().roster())).into_response()
}

#[utoipa::path(
    context_path = "/api/teacher",
    path = "/select_tab",
    method(post),
    request_body = SelectTabRequest,
    responses(
        (status = 200, description = "Tab selected"),
        (status = 401, description = "No teacher signed in")
    )
)]
pub async fn select_tab(
    State(state): State<SharedState>,
    Json(req): Json<SelectTabRequest>,
) -> impl IntoResponse {
    match state.app.write().select_teacher_tab(req.tab) {
        Ok(()) => "Tab selected".into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

pub fn get_teacher_scope() -> Router<SharedState> {
    Router::new().nest(
        "/teacher",
        Router::new()
            .route("/list_alert_kinds", get(list_alert_kinds))
            .route("/send_alert", post(send_alert))
            .route("/list_roster", get(list_roster))
            .route("/class_report", get(class_report))
            .route("/select_tab", post(select_tab)),
    )
}
