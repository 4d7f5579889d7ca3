use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::{AppState, AuthConfig}};

pub const ADMIN_ROLE: &str = "ADMIN";

// ============================================================================
// JWT Claims
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminClaims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

impl AdminClaims {
    pub fn new(username: &str, auth: &AuthConfig) -> Self {
        Self {
            sub: username.to_owned(),
            role: ADMIN_ROLE.to_owned(),
            exp: (Utc::now() + Duration::seconds(auth.expiration as i64)).timestamp() as usize,
        }
    }

    pub fn encode(&self, auth: &AuthConfig) -> Result<String, AppError> {
        encode(&Header::default(), self, &EncodingKey::from_secret(auth.secret.as_bytes()))
            .map_err(|e| AppError::InternalServerError(format!("Token encoding failed: {}", e)))
    }
}

// ============================================================================
// Admin Authentication Middleware
// ============================================================================

pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let unauthorized = || AppError::AuthenticationError("Admin authentication required".into());

    let token = req.headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(unauthorized)?;

    let token_data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(state.auth.secret.as_bytes()),
        &Validation::default(),
    ).map_err(|e| {
        tracing::debug!("Rejected admin token: {}", e);
        unauthorized()
    })?;

    if token_data.claims.role != ADMIN_ROLE {
        return Err(unauthorized());
    }

    req.extensions_mut().insert(token_data.claims);

    Ok(next.run(req).await)
}
