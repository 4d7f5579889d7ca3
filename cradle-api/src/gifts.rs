use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use cradle_shared::{CategorySummary, GiftView, Reservation, ReservationRequest};

use crate::{error::AppError, extract, state::AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct ReserveGiftResponse {
    pub message: String,
    pub reservation: Reservation,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/gifts", get(list_gifts))
        .route("/api/gifts/{category}", get(list_gifts_by_category))
        .route("/api/categories", get(list_categories))
        .route("/api/reserve-gift", post(reserve_gift))
}

/// GET /api/gifts
async fn list_gifts(State(state): State<AppState>) -> Result<Json<Vec<GiftView>>, AppError> {
    Ok(Json(state.registry.list_gifts(None).await?))
}

/// GET /api/gifts/{category}
async fn list_gifts_by_category(
    State(state): State<AppState>,
    extract::Path(category): extract::Path<String>,
) -> Result<Json<Vec<GiftView>>, AppError> {
    Ok(Json(state.registry.list_gifts(Some(&category)).await?))
}

/// GET /api/categories
async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<CategorySummary>>, AppError> {
    Ok(Json(state.registry.categories().await?))
}

/// POST /api/reserve-gift
async fn reserve_gift(
    State(state): State<AppState>,
    extract::Json(req): extract::Json<ReservationRequest>,
) -> Result<Json<ReserveGiftResponse>, AppError> {
    let reservation = state.registry.reserve(req).await?;

    Ok(Json(ReserveGiftResponse {
        message: "Gift reserved successfully!".to_string(),
        reservation,
    }))
}
