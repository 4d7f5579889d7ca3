use std::sync::Arc;
use cradle_core::{AdminCredentials, Registry};
use cradle_store::app_config::RateLimitConfig;
use cradle_store::{DbClient, RedisClient};

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub registry: Registry,
    pub admin: AdminCredentials,
    pub auth: AuthConfig,
    /// Absent when running without Postgres (tests).
    pub db: Option<Arc<DbClient>>,
    /// Rate limiting is skipped when absent.
    pub redis: Option<Arc<RedisClient>>,
    pub rate_limit: RateLimitConfig,
}

impl AppState {
    /// In-memory registry, default admin pair, no rate limiting.
    pub fn in_memory(secret: impl Into<String>) -> Self {
        Self {
            registry: Registry::in_memory(),
            admin: AdminCredentials::default(),
            auth: AuthConfig {
                secret: secret.into(),
                expiration: 3600,
            },
            db: None,
            redis: None,
            rate_limit: RateLimitConfig::default(),
        }
    }
}
