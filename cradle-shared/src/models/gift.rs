use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registry item with a finite offered quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gift {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub buy_link: Option<String>,
    pub quantity: i32,
    pub price_range: Option<String>,
    /// One-of-a-kind item: each claim takes a single unit.
    pub is_unique: bool,
    pub created_at: DateTime<Utc>,
}

/// A gift annotated with its live availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftView {
    #[serde(flatten)]
    pub gift: Gift,
    pub available_quantity: i64,
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub label: String,
    pub gift_count: usize,
    pub available_units: i64,
}
