use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;
use cradle_catalog::{category_label, seed_gifts, InventoryLedger, CATEGORIES};
use cradle_shared::{
    CategorySummary, DashboardSummary, GiftView, Guest, GuestLogin, GuestReservation, NewGuest,
    Reservation, ReservationRequest,
};

use crate::memory::{InMemoryGiftRepository, InMemoryGuestRepository, InMemoryReservationRepository};
use crate::phone::validate_phone;
use crate::repository::{GiftRepository, GuestRepository, ReservationRepository};
use crate::{dashboard, CoreError, CoreResult};

/// Guest, catalog and reservation operations over a set of repositories.
#[derive(Clone)]
pub struct Registry {
    guests: Arc<dyn GuestRepository>,
    gifts: Arc<dyn GiftRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl Registry {
    pub fn new(
        guests: Arc<dyn GuestRepository>,
        gifts: Arc<dyn GiftRepository>,
        reservations: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self { guests, gifts, reservations }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryGuestRepository::new()),
            Arc::new(InMemoryGiftRepository::new()),
            Arc::new(InMemoryReservationRepository::new()),
        )
    }

    /// Inserts the static catalog if no gift exists yet. Returns how many were inserted.
    pub async fn seed_catalog(&self) -> CoreResult<usize> {
        if self.gifts.count_gifts().await? > 0 {
            debug!("Gift catalog already seeded");
            return Ok(0);
        }

        let gifts = seed_gifts();
        self.gifts.insert_gifts(&gifts).await?;
        info!("Inserted {} initial gifts", gifts.len());
        Ok(gifts.len())
    }

    pub async fn register(&self, registration: NewGuest) -> CoreResult<Guest> {
        if registration.name.trim().is_empty() {
            return Err(CoreError::ValidationError("Name is required".into()));
        }
        let phone_key = validate_phone(&registration.phone)?;

        if self.guests.find_by_phone_key(&phone_key).await?.is_some() {
            return Err(CoreError::Conflict("Phone number already registered".into()));
        }

        let mut registration = registration;
        registration.companions = registration
            .companions
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        let guest = Guest::new(registration, phone_key);
        // The repository enforces uniqueness again for registrations racing past the lookup.
        self.guests.insert_guest(&guest).await?;

        info!(guest_id = %guest.id, phone = ?guest.phone, companions = guest.companions.len(), "Guest registered");
        Ok(guest)
    }

    /// Looks a guest up by phone and requires the name to match.
    pub async fn login(&self, credentials: GuestLogin) -> CoreResult<Guest> {
        let not_found = || CoreError::NotFound("Guest not found".into());
        let phone_key = validate_phone(&credentials.phone).map_err(|_| not_found())?;

        let guest = self.guests.find_by_phone_key(&phone_key).await?.ok_or_else(not_found)?;
        if guest.name != credentials.name.trim() {
            return Err(not_found());
        }

        debug!(guest_id = %guest.id, "Guest logged in");
        Ok(guest)
    }

    /// Gifts with live availability, optionally limited to one category.
    pub async fn list_gifts(&self, category: Option<&str>) -> CoreResult<Vec<GiftView>> {
        let gifts = self.gifts.list_gifts(category).await?;
        if gifts.is_empty() {
            return Ok(Vec::new());
        }

        let gift_ids: Vec<Uuid> = gifts.iter().map(|g| g.id).collect();
        let reservations = self.reservations.list_for_gifts(&gift_ids).await?;
        let ledger = InventoryLedger::from_records(&gifts, &reservations);

        Ok(gifts.into_iter().map(|gift| ledger.view(gift)).collect())
    }

    /// Known categories first in browsing order, then any others found in the catalog.
    pub async fn categories(&self) -> CoreResult<Vec<CategorySummary>> {
        let views = self.list_gifts(None).await?;

        let mut tags: Vec<String> = CATEGORIES.iter().map(|(tag, _)| tag.to_string()).collect();
        for view in &views {
            if !tags.contains(&view.gift.category) {
                tags.push(view.gift.category.clone());
            }
        }

        Ok(tags
            .into_iter()
            .map(|tag| {
                let in_category = views.iter().filter(|v| v.gift.category == tag);
                let (gift_count, available_units) = in_category
                    .fold((0usize, 0i64), |(count, units), v| (count + 1, units + v.available_quantity.max(0)));
                CategorySummary {
                    label: category_label(&tag).map(String::from).unwrap_or_else(|| tag.clone()),
                    category: tag,
                    gift_count,
                    available_units,
                }
            })
            .collect())
    }

    pub async fn reserve(&self, request: ReservationRequest) -> CoreResult<Reservation> {
        if request.quantity < 1 {
            return Err(CoreError::ValidationError("Quantity must be at least 1".into()));
        }

        let gift = self.gifts.get_gift(request.gift_id).await?
            .ok_or_else(|| CoreError::NotFound("Gift not found".into()))?;

        if gift.is_unique && request.quantity > 1 {
            return Err(CoreError::ValidationError(
                "Unique gifts can only be reserved one unit at a time".into(),
            ));
        }

        self.guests.get_guest(request.guest_id).await?
            .ok_or_else(|| CoreError::NotFound("Guest not found".into()))?;

        let reservation = Reservation::new(request.guest_id, gift.id, request.quantity);
        self.reservations.reserve(&gift, &reservation).await?;

        info!(
            reservation_id = %reservation.id,
            guest_id = %reservation.guest_id,
            gift_id = %gift.id,
            quantity = reservation.quantity,
            "Gift reserved"
        );
        Ok(reservation)
    }

    pub async fn guest_reservations(&self, guest_id: Uuid) -> CoreResult<Vec<GuestReservation>> {
        let reservations = self.reservations.list_for_guest(guest_id).await?;

        let mut detailed = Vec::with_capacity(reservations.len());
        for reservation in reservations {
            if let Some(gift) = self.gifts.get_gift(reservation.gift_id).await? {
                detailed.push(GuestReservation { reservation, gift });
            }
        }
        Ok(detailed)
    }

    pub async fn dashboard(&self) -> CoreResult<DashboardSummary> {
        let guests = self.guests.list_guests().await?;
        let gifts = self.gifts.list_gifts(None).await?;
        let reservations = self.reservations.list_all().await?;

        Ok(dashboard::summarize(guests, &gifts, &reservations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use cradle_shared::Gift;

    fn registration(name: &str, phone: &str) -> NewGuest {
        NewGuest {
            name: name.into(),
            phone: phone.into(),
            companions: vec![],
            stay_connected: true,
        }
    }

    async fn registry_with_gift(quantity: i32, is_unique: bool) -> (Registry, Gift) {
        let gifts = Arc::new(InMemoryGiftRepository::new());
        let gift = Gift {
            id: Uuid::new_v4(),
            name: "Berço para Gêmeas".into(),
            description: "Berço seguro e confortável".into(),
            category: "quarto".into(),
            image_url: "https://example.com/berco.jpg".into(),
            buy_link: None,
            quantity,
            price_range: Some("R$ 300-600".into()),
            is_unique,
            created_at: Utc::now(),
        };
        gifts.insert_gifts(std::slice::from_ref(&gift)).await.unwrap();
        let registry = Registry::new(
            Arc::new(InMemoryGuestRepository::new()),
            gifts,
            Arc::new(InMemoryReservationRepository::new()),
        );
        (registry, gift)
    }

    fn request(guest: &Guest, gift: &Gift, quantity: i32) -> ReservationRequest {
        ReservationRequest { guest_id: guest.id, gift_id: gift.id, quantity }
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let registry = Registry::in_memory();
        assert_eq!(registry.seed_catalog().await.unwrap(), cradle_catalog::INITIAL_GIFTS.len());
        assert_eq!(registry.seed_catalog().await.unwrap(), 0);
        assert_eq!(registry.list_gifts(None).await.unwrap().len(), cradle_catalog::INITIAL_GIFTS.len());
    }

    #[tokio::test]
    async fn test_duplicate_phone_after_normalization_conflicts() {
        let registry = Registry::in_memory();
        registry.register(registration("Ana", "(11) 99999-8888")).await.unwrap();

        let err = registry.register(registration("Bia", "11999998888")).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
        assert_eq!(registry.dashboard().await.unwrap().total_confirmed, 1);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        let registry = Registry::in_memory();
        assert!(matches!(
            registry.register(registration("Ana", "123")).await,
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            registry.register(registration("   ", "(11) 99999-8888")).await,
            Err(CoreError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_login_matches_name_and_any_phone_spelling() {
        let registry = Registry::in_memory();
        let guest = registry.register(registration("Ana Souza", "(11) 99999-8888")).await.unwrap();

        let found = registry
            .login(GuestLogin { name: "Ana Souza".into(), phone: "11 99999 8888".into() })
            .await
            .unwrap();
        assert_eq!(found.id, guest.id);

        let wrong_name = registry
            .login(GuestLogin { name: "Ana".into(), phone: "(11) 99999-8888".into() })
            .await;
        assert!(matches!(wrong_name, Err(CoreError::NotFound(_))));

        let unknown = registry
            .login(GuestLogin { name: "Ana Souza".into(), phone: "(21) 99999-8888".into() })
            .await;
        assert!(matches!(unknown, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_login_rejects_malformed_phone() {
        let registry = Registry::in_memory();
        registry.register(registration("Ana", "(11) 99999-8888")).await.unwrap();

        for phone in ["not a phone", "", "١١٩٩٩٩٩٨٨٨٨"] {
            let result = registry.login(GuestLogin { name: "Ana".into(), phone: phone.into() }).await;
            assert!(matches!(result, Err(CoreError::NotFound(_))), "{phone} should not log in");
        }
    }

    #[tokio::test]
    async fn test_non_ascii_digit_phones_do_not_share_a_key() {
        let registry = Registry::in_memory();
        assert!(matches!(
            registry.register(registration("Ana", "١١٩٩٩٩٩٨٨٨٨")).await,
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            registry.register(registration("Bia", "２１８８８８８７７７７")).await,
            Err(CoreError::ValidationError(_))
        ));
        assert_eq!(registry.dashboard().await.unwrap().total_confirmed, 0);
    }

    #[tokio::test]
    async fn test_two_unit_gift_exhausts_after_two_claims() {
        let (registry, gift) = registry_with_gift(2, false).await;
        let guest = registry.register(registration("Ana", "(11) 99999-8888")).await.unwrap();

        registry.reserve(request(&guest, &gift, 1)).await.unwrap();
        registry.reserve(request(&guest, &gift, 1)).await.unwrap();
        let err = registry.reserve(request(&guest, &gift, 1)).await.unwrap_err();
        assert!(matches!(err, CoreError::InsufficientQuantity { requested: 1, available: 0 }));

        let views = registry.list_gifts(Some("quarto")).await.unwrap();
        assert_eq!(views[0].available_quantity, 0);
        assert!(!views[0].is_available);
        assert_eq!(registry.guest_reservations(guest.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_over_request_leaves_state_unchanged() {
        let (registry, gift) = registry_with_gift(5, false).await;
        let guest = registry.register(registration("Ana", "(11) 99999-8888")).await.unwrap();
        registry.reserve(request(&guest, &gift, 3)).await.unwrap();

        assert!(registry.reserve(request(&guest, &gift, 3)).await.is_err());

        let views = registry.list_gifts(None).await.unwrap();
        assert_eq!(views[0].available_quantity, 2);
        assert_eq!(registry.dashboard().await.unwrap().total_gifts_reserved, 1);
    }

    #[tokio::test]
    async fn test_reserve_validation() {
        let (registry, gift) = registry_with_gift(2, true).await;
        let guest = registry.register(registration("Ana", "(11) 99999-8888")).await.unwrap();

        assert!(matches!(registry.reserve(request(&guest, &gift, 0)).await, Err(CoreError::ValidationError(_))));
        assert!(matches!(registry.reserve(request(&guest, &gift, 2)).await, Err(CoreError::ValidationError(_))));

        let missing_gift = ReservationRequest { guest_id: guest.id, gift_id: Uuid::new_v4(), quantity: 1 };
        assert!(matches!(registry.reserve(missing_gift).await, Err(CoreError::NotFound(_))));

        let missing_guest = ReservationRequest { guest_id: Uuid::new_v4(), gift_id: gift.id, quantity: 1 };
        assert!(matches!(registry.reserve(missing_guest).await, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_categories_follow_browsing_order() {
        let registry = Registry::in_memory();
        registry.seed_catalog().await.unwrap();

        let categories = registry.categories().await.unwrap();
        let tags: Vec<&str> = categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(tags, vec!["fraldas", "roupas", "higiene", "alimentacao", "quarto", "passeio"]);

        let fraldas = &categories[0];
        assert_eq!(fraldas.label, "Fraldas");
        assert_eq!(fraldas.gift_count, 3);
        assert_eq!(fraldas.available_units, 100);
    }
}
