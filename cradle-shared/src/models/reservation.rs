use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::gift::Gift;

/// A guest's claim on some quantity of a gift. Never updated once written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub gift_id: Uuid,
    pub quantity: i32,
    pub reserved_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(guest_id: Uuid, gift_id: Uuid, quantity: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            guest_id,
            gift_id,
            quantity,
            reserved_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReservationRequest {
    #[serde(alias = "user_id")]
    pub guest_id: Uuid,
    pub gift_id: Uuid,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 { 1 }

/// A reservation joined with the gift it claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestReservation {
    pub reservation: Reservation,
    pub gift: Gift,
}
