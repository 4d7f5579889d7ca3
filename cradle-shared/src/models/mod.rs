mod dashboard;
mod gift;
mod guest;
mod reservation;

pub use dashboard::{AvailableGift, DashboardSummary, ReservationLine};
pub use gift::{CategorySummary, Gift, GiftView};
pub use guest::{Guest, GuestLogin, NewGuest};
pub use reservation::{GuestReservation, Reservation, ReservationRequest};
