pub mod app_config;
pub mod database;
pub mod gift_repo;
pub mod guest_repo;
pub mod redis_repo;
pub mod reservation_repo;

use std::sync::Arc;

use cradle_core::Registry;

pub use database::DbClient;
pub use gift_repo::StoreGiftRepository;
pub use guest_repo::StoreGuestRepository;
pub use redis_repo::RedisClient;
pub use reservation_repo::StoreReservationRepository;

/// A registry backed by Postgres.
pub fn postgres_registry(db: &DbClient) -> Registry {
    Registry::new(
        Arc::new(StoreGuestRepository::new(db.pool.clone())),
        Arc::new(StoreGiftRepository::new(db.pool.clone())),
        Arc::new(StoreReservationRepository::new(db.pool.clone())),
    )
}
