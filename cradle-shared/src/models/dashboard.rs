use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::guest::Guest;

/// Admin overview of attendance and the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_confirmed: usize,
    pub total_companions: usize,
    pub total_attendees: usize,
    pub total_gifts_reserved: usize,
    pub total_gifts_available: i64,
    pub guests: Vec<Guest>,
    pub reservations: Vec<ReservationLine>,
    pub available_gifts: Vec<AvailableGift>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationLine {
    pub guest_name: String,
    pub gift_name: String,
    pub quantity: i32,
    pub reserved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailableGift {
    pub name: String,
    pub available_quantity: i64,
}
