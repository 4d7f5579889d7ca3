use std::collections::HashMap;

use cradle_catalog::InventoryLedger;
use cradle_shared::{AvailableGift, DashboardSummary, Gift, Guest, Reservation, ReservationLine};

/// Builds the admin overview from the full record set.
///
/// Reservations whose guest or gift cannot be resolved are left out of the
/// reservation list and of `total_gifts_reserved`, but still count against
/// availability.
pub fn summarize(guests: Vec<Guest>, gifts: &[Gift], reservations: &[Reservation]) -> DashboardSummary {
    let total_confirmed = guests.len();
    let total_companions = guests.iter().map(|g| g.companions.len()).sum();

    let guest_names: HashMap<_, _> = guests.iter().map(|g| (g.id, g.name.as_str())).collect();
    let gift_names: HashMap<_, _> = gifts.iter().map(|g| (g.id, g.name.as_str())).collect();

    let lines: Vec<ReservationLine> = reservations
        .iter()
        .filter_map(|r| {
            let guest_name = guest_names.get(&r.guest_id)?;
            let gift_name = gift_names.get(&r.gift_id)?;
            Some(ReservationLine {
                guest_name: guest_name.to_string(),
                gift_name: gift_name.to_string(),
                quantity: r.quantity,
                reserved_at: r.reserved_at,
            })
        })
        .collect();

    let ledger = InventoryLedger::from_records(gifts, reservations);
    let available_gifts = gifts
        .iter()
        .filter_map(|gift| {
            let item = ledger.get(&gift.id)?;
            item.is_available().then(|| AvailableGift {
                name: gift.name.clone(),
                available_quantity: item.available_quantity(),
            })
        })
        .collect();

    DashboardSummary {
        total_confirmed,
        total_companions,
        total_attendees: total_confirmed + total_companions,
        total_gifts_reserved: lines.len(),
        total_gifts_available: ledger.total_capacity(),
        guests,
        reservations: lines,
        available_gifts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use cradle_shared::{Masked, NewGuest};
    use uuid::Uuid;

    fn guest(name: &str, companions: &[&str]) -> Guest {
        Guest::new(
            NewGuest {
                name: name.into(),
                phone: "11999998888".into(),
                companions: companions.iter().map(|c| c.to_string()).collect(),
                stay_connected: false,
            },
            Uuid::new_v4().to_string(),
        )
    }

    fn gift(name: &str, quantity: i32) -> Gift {
        Gift {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            category: "quarto".into(),
            image_url: String::new(),
            buy_link: None,
            quantity,
            price_range: None,
            is_unique: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_attendee_totals() {
        let guests = vec![guest("Ana", &["Bia", "Caio"]), guest("Duda", &[]), guest("Eva", &["Fábio"])];
        let summary = summarize(guests, &[], &[]);
        assert_eq!(summary.total_confirmed, 3);
        assert_eq!(summary.total_companions, 3);
        assert_eq!(summary.total_attendees, summary.total_confirmed + summary.total_companions);
        assert_eq!(summary.guests[0].phone, Masked("11999998888".to_string()));
    }

    #[test]
    fn test_reservation_lines_and_availability() {
        let ana = guest("Ana", &[]);
        let crib = gift("Berço", 2);
        let stroller = gift("Carrinho", 1);
        let reservations = vec![
            Reservation::new(ana.id, crib.id, 1),
            Reservation::new(ana.id, stroller.id, 1),
            // unknown guest: counted against stock, not displayed
            Reservation::new(Uuid::new_v4(), crib.id, 1),
        ];

        let summary = summarize(vec![ana], &[crib.clone(), stroller], &reservations);

        assert_eq!(summary.total_gifts_reserved, 2);
        assert_eq!(summary.reservations[0].guest_name, "Ana");
        assert_eq!(summary.reservations[0].gift_name, "Berço");
        assert_eq!(summary.total_gifts_available, 3);
        assert!(summary.available_gifts.is_empty());
    }

    #[test]
    fn test_available_gifts_lists_remaining_units() {
        let diapers = gift("Fralda RN", 50);
        let reservations = vec![Reservation::new(Uuid::new_v4(), diapers.id, 10)];
        let summary = summarize(vec![], &[diapers], &reservations);
        assert_eq!(summary.available_gifts, vec![AvailableGift { name: "Fralda RN".into(), available_quantity: 40 }]);
    }
}
