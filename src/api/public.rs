use axum::{
    Router,
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::{SharedState, status_for};
use crate::session::Role;

#[derive(Deserialize, ToSchema)]
pub struct SelectRoleRequest {
    pub role: Role,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct SessionInfo {
    pub authenticated: bool,
    pub role: Option<Role>,
    pub name: Option<String>,
}

#[utoipa::path(
    context_path = "/api/public",
    path = "/select_role",
    method(post),
    request_body = SelectRoleRequest,
    responses(
        (status = 200, description = "Role selected"),
        (status = 409, description = "A role is already selected")
    )
)]
pub async fn select_role(
    State(state): State<SharedState>,
    Json(req): Json<SelectRoleRequest>,
) -> impl IntoResponse {
    match state.app.write().select_role(req.role) {
        Ok(()) => "Role selected".into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/public",
    path = "/login",
    method(post),
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful"),
        (status = 409, description = "No role selected yet"),
        (status = 422, description = "Empty name or password")
    )
)]
pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    match state.app.write().login(&req.name, &req.password) {
        Ok(_) => "Login successful".into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/public",
    path = "/back",
    method(post),
    responses(
        (status = 200, description = "Returned to the role picker"),
        (status = 409, description = "Not on the credential form")
    )
)]
pub async fn back(State(state): State<SharedState>) -> impl IntoResponse {
    match state.app.write().back() {
        Ok(()) => "Back to role selection".into_response(),
        Err(e) => (status_for(&e), e.to_string()).into_response(),
    }
}

#[utoipa::path(
    context_path = "/api/public",
    path = "/logout",
    method(post),
    responses(
        (status = 200, description = "Logout successful")
    )
)]
pub async fn logout(State(state): State<SharedState>) -> impl IntoResponse {
    state.app.write().logout();
    "Logout successful".into_response()
}

#[utoipa::path(
    context_path = "/api/public",
    path = "/session_info",
    method(get),
    responses(
        (status = 200, description = "Current session", body = SessionInfo)
    )
)]
pub async fn session_info(State(state): State<SharedState>) -> impl IntoResponse {
    let app = state.app.read();
    let session = app.session();
    Json(SessionInfo {
        authenticated: session.is_authenticated(),
        role: session.role(),
        name: session.display_name().map(str::to_string),
    })
}

pub fn get_public_scope() -> Router<SharedState> {
    Router::new().nest(
        "/public",
        Router::new()
            .route("/select_role", post(select_role))
            .route("/login", post(login))
            .route("/back", post(back))
            .route("/logout", post(logout))
            .route("/session_info", get(session_info)),
    )
}
