use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;
use cradle_shared::{Guest, GuestLogin, GuestReservation, NewGuest};

use crate::{error::AppError, extract, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(register_guest))
        .route("/api/login", post(login_guest))
        .route("/api/user/{guest_id}/reservations", get(list_guest_reservations))
}

/// POST /api/register
async fn register_guest(
    State(state): State<AppState>,
    extract::Json(req): extract::Json<NewGuest>,
) -> Result<Json<Guest>, AppError> {
    Ok(Json(state.registry.register(req).await?))
}

/// POST /api/login
async fn login_guest(
    State(state): State<AppState>,
    extract::Json(req): extract::Json<GuestLogin>,
) -> Result<Json<Guest>, AppError> {
    Ok(Json(state.registry.login(req).await?))
}

/// GET /api/user/{guest_id}/reservations
async fn list_guest_reservations(
    State(state): State<AppState>,
    extract::Path(guest_id): extract::Path<Uuid>,
) -> Result<Json<Vec<GuestReservation>>, AppError> {
    Ok(Json(state.registry.guest_reservations(guest_id).await?))
}
