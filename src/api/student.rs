use axum::{
    Router,
    extract::{Json, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::{SharedState, status_for};
use crate::catalog::lesson::poster_filename;
use crate::catalog::{CatalogRepository, Lesson};
use crate::dashboard::StudentTab;
use crate::error::Error;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LessonIdQuery {
    /// ID of the lesson to act on
    pub lesson_id: i64,
}

#[derive(Deserialize, ToSchema)]
pub struct SelectTabRequest {
    pub tab: StudentTab,
}

/// The opened lesson, annotated with this session's completion state.
#[derive(Serialize, ToSchema)]
pub struct LessonDetail {
    pub lesson: Lesson,
    pub completed: bool,
}

#[utoipa::path(
    context_path = "/api/student",
    path = "/list_lessons",
    method(get),
    responses(
        (status = 200, description = "Lesson catalog with completion flags", body = Vec<crate::dashboard::LessonSummary>),
        (status = 401, description = "No student signed in")
    )
)]
pub async fn list_lessons(State(state): State<SharedState>) -> impl IntoResponse {
    match state.app.read().list_lessons() {
        Ok(lessons) => Json(lessons).into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/student",
    path = "/open_lesson",
    method(post),
    params(LessonIdQuery),
    responses(
        (status = 200, description = "Lesson detail", body = LessonDetail),
        (status = 404, description = "Unknown lesson id"),
        (status = 401, description = "No student signed in")
    )
)]
pub async fn open_lesson(
    State(state): State<SharedState>,
    Query(query): Query<LessonIdQuery>,
) -> impl IntoResponse {
    let mut app = state.app.write();
    match app.open_lesson(query.lesson_id) {
        Ok(Some(lesson)) => {
            let completed = app
                .student()
                .map(|s| s.progress().is_completed(lesson.id))
                .unwrap_or(false);
            Json(LessonDetail { lesson, completed }).into_response()
        }
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/student",
    path = "/close_lesson",
    method(post),
    responses(
        (status = 200, description = "Back to the lesson list"),
        (status = 401, description = "No student signed in")
    )
)]
pub async fn close_lesson(State(state): State<SharedState>) -> impl IntoResponse {
    match state.app.write().close_lesson() {
        Ok(()) => "Lesson closed".into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/student",
    path = "/play_video",
    method(post),
    responses(
        (status = 200, description = "Video playing"),
        (status = 409, description = "No lesson open"),
        (status = 401, description = "No student signed in")
    )
)]
pub async fn play_video(State(state): State<SharedState>) -> impl IntoResponse {
    match state.app.write().play_video() {
        Ok(()) => "Video playing".into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/student",
    path = "/pause_video",
    method(post),
    responses(
        (status = 200, description = "Video paused"),
        (status = 409, description = "No lesson open"),
        (status = 401, description = "No student signed in")
    )
)]
pub async fn pause_video(State(state): State<SharedState>) -> impl IntoResponse {
    match state.app.write().pause_video() {
        Ok(()) => "Video paused".into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/student",
    path = "/complete_lesson",
    method(post),
    responses(
        (status = 200, description = "Updated progress", body = crate::report::ProgressSummary),
        (status = 409, description = "Video not played or no lesson open"),
        (status = 401, description = "No student signed in")
    )
)]
pub async fn complete_lesson(State(state): State<SharedState>) -> impl IntoResponse {
    let mut app = state.app.write();
    match app.complete_lesson() {
        Ok(_) => match app.progress_summary() {
            Ok(summary) => Json(summary).into_response(),
            Err(e) => (status_for(&e), e.to_string()).into_response(),
        },
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/student",
    path = "/download_poster",
    method(get),
    params(LessonIdQuery),
    responses(
        (status = 200, description = "The poster asset", body = Vec<u8>, content_type = "image/jpeg"),
        (status = 404, description = "Unknown lesson id"),
        (status = 401, description = "No student signed in"),
        (status = 500, description = "Asset unavailable")
    )
)]
pub async fn download_poster(
    State(state): State<SharedState>,
    Query(query): Query<LessonIdQuery>,
) -> impl IntoResponse {
    // resolve everything under the lock, read the file outside of it
    let (title, poster_ref) = {
        let app = state.app.read();
        if let Err(e) = app.student() {
            return (status_for(&e), e.to_string()).into_response();
        }
        let Some(lesson) = app.catalog().lesson(query.lesson_id) else {
            return StatusCode::NOT_FOUND.into_response();
        };
        (lesson.title.clone(), lesson.poster_ref.clone())
    };

    let path = state.config.asset_dir.join(&poster_ref);
    match tokio::fs::read(&path).await.map_err(Error::from) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, mime::IMAGE_JPEG.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", poster_filename(&title)),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/student",
    path = "/list_quizzes",
    method(get),
    responses(
        (status = 200, description = "Quiz catalog", body = Vec<crate::catalog::Quiz>),
        (status = 401, description = "No student signed in")
    )
)]
pub async fn list_quizzes(State(state): State<SharedState>) -> impl IntoResponse {
    let app = state.app.read();
    if let Err(e) = app.student() {
        return (status_for(&e), e.to_string()).into_response();
    }
    Json(app.catalog().quizzes().to_vec()).into_response()
}

#[utoipa::path(
    context_path = "/api/student",
    path = "/list_badges",
    method(get),
    responses(
        (status = 200, description = "Badge catalog", body = Vec<crate::catalog::Badge>),
        (status = 401, description = "No student signed in")
    )
)]
pub async fn list_badges(State(state): State<SharedState>) -> impl IntoResponse {
    let app = state.app.read();
    if let Err(e) = app.student() {
        return (status_for(&e), e.to_string()).into_response();
    }
    Json(app.catalog().badges().to_vec()).into_response()
}

#[utoipa::path(
    context_path = "/api/student",
    path = "/progress_summary",
    method(get),
    responses(
        (status = 200, description = "Overall progress", body = crate::report::ProgressSummary),
        (status = 401, description = "No student signed in")
    )
)]
pub async fn progress_summary(State(state): State<SharedState>) -> impl IntoResponse {
    match state.app.read().progress_summary() {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/student",
    path = "/select_tab",
    method(post),
    request_body = SelectTabRequest,
    responses(
        (status = 200, description = "Tab selected"),
        (status = 401, description = "No student signed in")
    )
)]
pub async fn select_tab(
    State(state): State<SharedState>,
    Json(req): Json<SelectTabRequest>,
) -> impl IntoResponse {
    match state.app.write().select_student_tab(req.tab) {
        Ok(()) => "Tab selected".into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

pub fn get_student_scope() -> Router<SharedState> {
    Router::new().nest(
        "/student",
        Router::new()
            .route("/list_lessons", get(list_lessons))
            .route("/open_lesson", post(open_lesson))
            .route("/close_lesson", post(close_lesson))
            .route("/play_video", post(play_video))
            .route("/pause_video", post(pause_video))
            .route("/complete_lesson", post(complete_lesson))
            .route("/download_poster", get(download_poster))
            .route("/list_quizzes", get(list_quizzes))
            .route("/list_badges", get(list_badges))
            .route("/progress_summary", get(progress_summary))
            .route("/select_tab", post(select_tab)),
    )
}
