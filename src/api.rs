pub mod public;
pub mod student;
pub mod teacher;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use parking_lot::RwLock;
use utoipa::OpenApi;

use crate::app::App;
use crate::config::Config;
use crate::error::Error;

/// Shared server state: the single in-memory application behind one lock.
/// Every handler runs its operation to completion while holding it.
pub struct SchoolState {
    pub app: RwLock<App>,
    pub config: Config,
}

impl SchoolState {
    pub fn new(app: App, config: Config) -> Self {
        Self {
            app: RwLock::new(app),
            config,
        }
    }
}

pub type SharedState = Arc<SchoolState>;

pub(crate) fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::EmptyCredentials => StatusCode::UNPROCESSABLE_ENTITY,
        Error::BadTransition { .. } | Error::NoLessonOpen | Error::VideoNotPlayed => {
            StatusCode::CONFLICT
        }
        Error::RoleRequired(_) => StatusCode::UNAUTHORIZED,
        Error::Asset(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The full `/api` surface with the state applied; the binary adds the
/// middleware layers and Swagger UI on top.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(public::get_public_scope())
                .merge(student::get_student_scope())
                .merge(teacher::get_teacher_scope()),
        )
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(paths(
    public::select_role,
    public::login,
    public::back,
    public::logout,
    public::session_info,
    student::list_lessons,
    student::open_lesson,
    student::close_lesson,
    student::play_video,
    student::pause_video,
    student::complete_lesson,
    student::download_poster,
    student::list_quizzes,
    student::list_badges,
    student::progress_summary,
    student::select_tab,
))]
pub struct StudentApiDoc;

#[derive(OpenApi)]
#[openapi(paths(
    public::select_role,
    public::login,
    public::back,
    public::logout,
    public::session_info,
    teacher::list_alert_kinds,
    teacher::send_alert,
    teacher::list_roster,
    teacher::class_report,
    teacher::select_tab,
))]
pub struct TeacherApiDoc;
