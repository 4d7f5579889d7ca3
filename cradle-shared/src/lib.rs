pub mod models;
pub mod pii;

pub use models::{
    CategorySummary, DashboardSummary, Gift, GiftView, Guest, GuestLogin, GuestReservation,
    NewGuest, Reservation, ReservationLine, ReservationRequest, AvailableGift,
};
pub use pii::Masked;
