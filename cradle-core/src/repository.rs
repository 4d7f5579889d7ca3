use async_trait::async_trait;
use uuid::Uuid;
use cradle_shared::{Gift, Guest, Reservation};

use crate::CoreResult;

/// Repository trait for guest records
#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Fails with `CoreError::Conflict` when the phone key is already taken.
    async fn insert_guest(&self, guest: &Guest) -> CoreResult<()>;

    async fn get_guest(&self, id: Uuid) -> CoreResult<Option<Guest>>;

    async fn find_by_phone_key(&self, phone_key: &str) -> CoreResult<Option<Guest>>;

    /// All guests, oldest registration first.
    async fn list_guests(&self) -> CoreResult<Vec<Guest>>;
}

/// Repository trait for the gift catalog
#[async_trait]
pub trait GiftRepository: Send + Sync {
    async fn count_gifts(&self) -> CoreResult<i64>;

    async fn insert_gifts(&self, gifts: &[Gift]) -> CoreResult<()>;

    async fn get_gift(&self, id: Uuid) -> CoreResult<Option<Gift>>;

    /// Ordered by category, then name.
    async fn list_gifts(&self, category: Option<&str>) -> CoreResult<Vec<Gift>>;
}

/// Repository trait for the append-only reservation ledger
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Appends `reservation` only if the units already claimed on `gift` plus
    /// `reservation.quantity` stay within `gift.quantity`. The check and the
    /// write are atomic with respect to other reservations of the same gift.
    async fn reserve(&self, gift: &Gift, reservation: &Reservation) -> CoreResult<()>;

    async fn list_for_gifts(&self, gift_ids: &[Uuid]) -> CoreResult<Vec<Reservation>>;

    /// Newest first.
    async fn list_for_guest(&self, guest_id: Uuid) -> CoreResult<Vec<Reservation>>;

    /// Oldest first.
    async fn list_all(&self) -> CoreResult<Vec<Reservation>>;
}
