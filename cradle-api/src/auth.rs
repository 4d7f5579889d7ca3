use axum::{
    extract::State,
    Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, extract, middleware::AdminClaims, state::AppState};

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub message: String,
    pub token: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/admin/login", post(login_admin))
}

/// POST /api/admin/login
async fn login_admin(
    State(state): State<AppState>,
    extract::Json(req): extract::Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, AppError> {
    state.admin.verify(&req.username, &req.password)?;

    let token = AdminClaims::new(&req.username, &state.auth).encode(&state.auth)?;
    tracing::info!(username = %req.username, "Admin logged in");

    Ok(Json(AdminLoginResponse {
        message: "Admin login successful".to_string(),
        token,
    }))
}
