use async_trait::async_trait;
use uuid::Uuid;
use sqlx::PgPool;
use chrono::{DateTime, Utc};
use cradle_core::repository::GuestRepository;
use cradle_core::{CoreError, CoreResult};
use cradle_shared::{Guest, Masked};

use crate::database::{db_error, is_unique_violation};

pub struct StoreGuestRepository {
    pool: PgPool,
}

impl StoreGuestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GuestRow {
    id: Uuid,
    name: String,
    phone: String,
    phone_key: String,
    companions: Vec<String>,
    stay_connected: bool,
    created_at: DateTime<Utc>,
}

impl From<GuestRow> for Guest {
    fn from(row: GuestRow) -> Self {
        Guest {
            id: row.id,
            name: row.name,
            phone: Masked(row.phone),
            phone_key: row.phone_key,
            companions: row.companions,
            stay_connected: row.stay_connected,
            created_at: row.created_at,
        }
    }
}

const GUEST_COLUMNS: &str = "id, name, phone, phone_key, companions, stay_connected, created_at";

#[async_trait]
impl GuestRepository for StoreGuestRepository {
    async fn insert_guest(&self, guest: &Guest) -> CoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO guests (id, name, phone, phone_key, companions, stay_connected, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(guest.id)
        .bind(&guest.name)
        .bind(guest.phone.expose())
        .bind(&guest.phone_key)
        .bind(&guest.companions)
        .bind(guest.stay_connected)
        .bind(guest.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                CoreError::Conflict("Phone number already registered".into())
            } else {
                db_error(e)
            }
        })?;

        Ok(())
    }

    async fn get_guest(&self, id: Uuid) -> CoreResult<Option<Guest>> {
        let row = sqlx::query_as::<_, GuestRow>(&format!("SELECT {GUEST_COLUMNS} FROM guests WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(row.map(Guest::from))
    }

    async fn find_by_phone_key(&self, phone_key: &str) -> CoreResult<Option<Guest>> {
        let row = sqlx::query_as::<_, GuestRow>(&format!("SELECT {GUEST_COLUMNS} FROM guests WHERE phone_key = $1"))
            .bind(phone_key)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(row.map(Guest::from))
    }

    async fn list_guests(&self) -> CoreResult<Vec<Guest>> {
        let rows = sqlx::query_as::<_, GuestRow>(&format!("SELECT {GUEST_COLUMNS} FROM guests ORDER BY created_at"))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(Guest::from).collect())
    }
}
