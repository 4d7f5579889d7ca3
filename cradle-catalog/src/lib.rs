pub mod seed;
pub mod inventory;

pub use seed::{category_label, seed_gifts, GiftSeed, CATEGORIES, INITIAL_GIFTS};
pub use inventory::{InventoryError, InventoryItem, InventoryLedger};
