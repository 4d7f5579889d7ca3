use uuid::Uuid;
use std::collections::HashMap;
use cradle_shared::{Gift, GiftView, Reservation};

/// Claimed units against one gift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryItem {
    pub gift_id: Uuid,
    pub total_quantity: i64,
    pub reserved_quantity: i64,
}

impl InventoryItem {
    pub fn new(gift_id: Uuid, total_quantity: i32) -> Self {
        Self {
            gift_id,
            total_quantity: i64::from(total_quantity),
            reserved_quantity: 0,
        }
    }

    pub fn with_reserved(mut self, reserved_quantity: i64) -> Self {
        self.reserved_quantity = reserved_quantity;
        self
    }

    pub fn available_quantity(&self) -> i64 {
        self.total_quantity - self.reserved_quantity
    }

    pub fn is_available(&self) -> bool {
        self.available_quantity() > 0
    }

    /// Accepts `requested` units only if `reserved + requested <= total`.
    pub fn check(&self, requested: i32) -> Result<(), InventoryError> {
        if requested < 1 {
            return Err(InventoryError::InvalidQuantity(requested));
        }

        if self.reserved_quantity + i64::from(requested) > self.total_quantity {
            return Err(InventoryError::InsufficientInventory {
                requested: i64::from(requested),
                available: self.available_quantity().max(0),
            });
        }

        Ok(())
    }

    fn record(&mut self, quantity: i32) {
        self.reserved_quantity += i64::from(quantity);
    }
}

/// Live availability for a set of gifts, rebuilt from stored records.
#[derive(Debug, Default)]
pub struct InventoryLedger {
    inventory: HashMap<Uuid, InventoryItem>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<'a>(
        gifts: impl IntoIterator<Item = &'a Gift>,
        reservations: impl IntoIterator<Item = &'a Reservation>,
    ) -> Self {
        let mut ledger = Self::new();
        for gift in gifts {
            ledger.initialize(gift);
        }
        for reservation in reservations {
            ledger.record(reservation);
        }
        ledger
    }

    pub fn initialize(&mut self, gift: &Gift) {
        self.inventory.insert(gift.id, InventoryItem::new(gift.id, gift.quantity));
    }

    pub fn get(&self, gift_id: &Uuid) -> Option<&InventoryItem> {
        self.inventory.get(gift_id)
    }

    /// Counts an already-stored reservation. Reservations for gifts outside
    /// the ledger are ignored.
    pub fn record(&mut self, reservation: &Reservation) {
        if let Some(item) = self.inventory.get_mut(&reservation.gift_id) {
            item.record(reservation.quantity);
        }
    }

    /// Annotates a gift with its availability. Gifts the ledger has never
    /// seen count as unreserved.
    pub fn view(&self, gift: Gift) -> GiftView {
        let item = self.get(&gift.id)
            .copied()
            .unwrap_or_else(|| InventoryItem::new(gift.id, gift.quantity));
        GiftView {
            gift,
            available_quantity: item.available_quantity(),
            is_available: item.is_available(),
        }
    }

    /// Sum of offered quantity across every gift in the ledger.
    pub fn total_capacity(&self) -> i64 {
        self.inventory.values().map(|item| item.total_quantity).sum()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(i32),

    #[error("Insufficient quantity available: requested {requested}, available {available}")]
    InsufficientInventory {
        requested: i64,
        available: i64,
    },
}
