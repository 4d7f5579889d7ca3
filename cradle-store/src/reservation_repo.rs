use async_trait::async_trait;
use uuid::Uuid;
use sqlx::PgPool;
use chrono::{DateTime, Utc};
use cradle_catalog::InventoryItem;
use cradle_core::repository::ReservationRepository;
use cradle_core::{CoreError, CoreResult};
use cradle_shared::{Gift, Reservation};

use crate::database::db_error;

pub struct StoreReservationRepository {
    pool: PgPool,
}

impl StoreReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: Uuid,
    guest_id: Uuid,
    gift_id: Uuid,
    quantity: i32,
    reserved_at: DateTime<Utc>,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Reservation {
            id: row.id,
            guest_id: row.guest_id,
            gift_id: row.gift_id,
            quantity: row.quantity,
            reserved_at: row.reserved_at,
        }
    }
}

#[async_trait]
impl ReservationRepository for StoreReservationRepository {
    async fn reserve(&self, gift: &Gift, reservation: &Reservation) -> CoreResult<()> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        // Row lock on the gift serializes concurrent claims until commit.
        let quantity = sqlx::query_scalar::<_, i32>("SELECT quantity FROM gifts WHERE id = $1 FOR UPDATE")
            .bind(gift.id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error)?
            .ok_or_else(|| CoreError::NotFound("Gift not found".into()))?;

        let reserved = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(quantity), 0)::BIGINT FROM reservations WHERE gift_id = $1",
        )
        .bind(gift.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error)?;

        // Dropping `tx` on rejection rolls back and releases the lock.
        InventoryItem::new(gift.id, quantity)
            .with_reserved(reserved)
            .check(reservation.quantity)?;

        sqlx::query(
            r#"
            INSERT INTO reservations (id, guest_id, gift_id, quantity, reserved_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(reservation.id)
        .bind(reservation.guest_id)
        .bind(reservation.gift_id)
        .bind(reservation.quantity)
        .bind(reservation.reserved_at)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;
        Ok(())
    }

    async fn list_for_gifts(&self, gift_ids: &[Uuid]) -> CoreResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            "SELECT id, guest_id, gift_id, quantity, reserved_at FROM reservations WHERE gift_id = ANY($1)",
        )
        .bind(gift_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn list_for_guest(&self, guest_id: Uuid) -> CoreResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            "SELECT id, guest_id, gift_id, quantity, reserved_at FROM reservations WHERE guest_id = $1 ORDER BY reserved_at DESC",
        )
        .bind(guest_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn list_all(&self) -> CoreResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            "SELECT id, guest_id, gift_id, quantity, reserved_at FROM reservations ORDER BY reserved_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }
}
