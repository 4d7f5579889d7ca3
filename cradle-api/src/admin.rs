use axum::{
    extract::State,
    middleware,
    routing::get,
    Json, Router,
};
use cradle_shared::DashboardSummary;

use crate::{error::AppError, middleware::admin_auth_middleware, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/admin/dashboard", get(get_dashboard))
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware))
}

/// GET /api/admin/dashboard
async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    Ok(Json(state.registry.dashboard().await?))
}
