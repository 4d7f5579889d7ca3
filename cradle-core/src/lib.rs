pub mod admin;
pub mod dashboard;
pub mod memory;
pub mod phone;
pub mod registry;
pub mod repository;

pub use admin::AdminCredentials;
pub use registry::Registry;

use cradle_catalog::InventoryError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Insufficient quantity available: requested {requested}, available {available}")]
    InsufficientQuantity { requested: i64, available: i64 },
    #[error("{0}")]
    AuthenticationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl From<InventoryError> for CoreError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::InvalidQuantity(_) => CoreError::ValidationError(err.to_string()),
            InventoryError::InsufficientInventory { requested, available } => {
                CoreError::InsufficientQuantity { requested, available }
            }
        }
    }
}
