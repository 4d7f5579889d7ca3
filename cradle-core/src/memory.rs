//! Process-local repositories. Used by tests and by `Registry::in_memory`.

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;
use cradle_catalog::InventoryItem;
use cradle_shared::{Gift, Guest, Reservation};

use crate::repository::{GiftRepository, GuestRepository, ReservationRepository};
use crate::{CoreError, CoreResult};

#[derive(Default)]
pub struct InMemoryGuestRepository {
    guests: RwLock<Vec<Guest>>,
}

impl InMemoryGuestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuestRepository for InMemoryGuestRepository {
    async fn insert_guest(&self, guest: &Guest) -> CoreResult<()> {
        let mut guests = self.guests.write().await;
        if guests.iter().any(|g| g.phone_key == guest.phone_key) {
            return Err(CoreError::Conflict("Phone number already registered".into()));
        }
        guests.push(guest.clone());
        Ok(())
    }

    async fn get_guest(&self, id: Uuid) -> CoreResult<Option<Guest>> {
        Ok(self.guests.read().await.iter().find(|g| g.id == id).cloned())
    }

    async fn find_by_phone_key(&self, phone_key: &str) -> CoreResult<Option<Guest>> {
        Ok(self.guests.read().await.iter().find(|g| g.phone_key == phone_key).cloned())
    }

    async fn list_guests(&self) -> CoreResult<Vec<Guest>> {
        Ok(self.guests.read().await.clone())
    }
}

#[derive(Default)]
pub struct InMemoryGiftRepository {
    gifts: RwLock<Vec<Gift>>,
}

impl InMemoryGiftRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GiftRepository for InMemoryGiftRepository {
    async fn count_gifts(&self) -> CoreResult<i64> {
        Ok(self.gifts.read().await.len() as i64)
    }

    async fn insert_gifts(&self, gifts: &[Gift]) -> CoreResult<()> {
        self.gifts.write().await.extend_from_slice(gifts);
        Ok(())
    }

    async fn get_gift(&self, id: Uuid) -> CoreResult<Option<Gift>> {
        Ok(self.gifts.read().await.iter().find(|g| g.id == id).cloned())
    }

    async fn list_gifts(&self, category: Option<&str>) -> CoreResult<Vec<Gift>> {
        let mut gifts: Vec<Gift> = self.gifts.read().await
            .iter()
            .filter(|g| category.map_or(true, |c| g.category == c))
            .cloned()
            .collect();
        gifts.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));
        Ok(gifts)
    }
}

#[derive(Default)]
pub struct InMemoryReservationRepository {
    reservations: Mutex<Vec<Reservation>>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn reserve(&self, gift: &Gift, reservation: &Reservation) -> CoreResult<()> {
        // Held across the check and the push.
        let mut reservations = self.reservations.lock().await;

        let reserved: i64 = reservations
            .iter()
            .filter(|r| r.gift_id == gift.id)
            .map(|r| i64::from(r.quantity))
            .sum();

        InventoryItem::new(gift.id, gift.quantity)
            .with_reserved(reserved)
            .check(reservation.quantity)?;

        reservations.push(reservation.clone());
        Ok(())
    }

    async fn list_for_gifts(&self, gift_ids: &[Uuid]) -> CoreResult<Vec<Reservation>> {
        Ok(self.reservations.lock().await
            .iter()
            .filter(|r| gift_ids.contains(&r.gift_id))
            .cloned()
            .collect())
    }

    async fn list_for_guest(&self, guest_id: Uuid) -> CoreResult<Vec<Reservation>> {
        let mut found: Vec<Reservation> = self.reservations.lock().await
            .iter()
            .filter(|r| r.guest_id == guest_id)
            .cloned()
            .collect();
        found.reverse();
        Ok(found)
    }

    async fn list_all(&self) -> CoreResult<Vec<Reservation>> {
        Ok(self.reservations.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use chrono::Utc;

    fn gift(quantity: i32) -> Gift {
        Gift {
            id: Uuid::new_v4(),
            name: "Carrinho Duplo".into(),
            description: "Carrinho para gêmeas".into(),
            category: "passeio".into(),
            image_url: "https://example.com/carrinho.jpg".into(),
            buy_link: Some("https://example.com".into()),
            quantity,
            price_range: Some("R$ 400-800".into()),
            is_unique: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_concurrent_reservations_never_overallocate() {
        let repo = Arc::new(InMemoryReservationRepository::new());
        let gift = gift(5);

        let mut handles = Vec::new();
        for _ in 0..20 {
            let repo = repo.clone();
            let gift = gift.clone();
            handles.push(tokio::spawn(async move {
                let reservation = Reservation::new(Uuid::new_v4(), gift.id, 1);
                repo.reserve(&gift, &reservation).await.is_ok()
            }));
        }

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 5);
        assert_eq!(repo.list_for_gifts(&[gift.id]).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_guest_reservations_newest_first() {
        let repo = InMemoryReservationRepository::new();
        let gift = gift(10);
        let guest_id = Uuid::new_v4();
        let first = Reservation::new(guest_id, gift.id, 1);
        let second = Reservation::new(guest_id, gift.id, 2);
        repo.reserve(&gift, &first).await.unwrap();
        repo.reserve(&gift, &second).await.unwrap();
        repo.reserve(&gift, &Reservation::new(Uuid::new_v4(), gift.id, 1)).await.unwrap();

        let mine = repo.list_for_guest(guest_id).await.unwrap();
        assert_eq!(mine, vec![second, first]);
    }

    #[tokio::test]
    async fn test_gifts_listed_by_category_then_name() {
        let repo = InMemoryGiftRepository::new();
        let mut a = gift(1);
        a.category = "quarto".into();
        a.name = "Lençol".into();
        let mut b = gift(1);
        b.category = "quarto".into();
        b.name = "Berço".into();
        let mut c = gift(1);
        c.category = "fraldas".into();
        c.name = "Fralda P".into();
        repo.insert_gifts(&[a.clone(), b.clone(), c.clone()]).await.unwrap();

        let names: Vec<String> = repo.list_gifts(None).await.unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Fralda P", "Berço", "Lençol"]);
        assert_eq!(repo.list_gifts(Some("quarto")).await.unwrap().len(), 2);
        assert!(repo.list_gifts(Some("brinquedos")).await.unwrap().is_empty());
    }
}
