use async_trait::async_trait;
use uuid::Uuid;
use sqlx::PgPool;
use chrono::{DateTime, Utc};
use cradle_core::repository::GiftRepository;
use cradle_core::CoreResult;
use cradle_shared::Gift;

use crate::database::db_error;

pub struct StoreGiftRepository {
    pool: PgPool,
}

impl StoreGiftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GiftRow {
    id: Uuid,
    name: String,
    description: String,
    category: String,
    image_url: String,
    buy_link: Option<String>,
    quantity: i32,
    price_range: Option<String>,
    is_unique: bool,
    created_at: DateTime<Utc>,
}

impl From<GiftRow> for Gift {
    fn from(row: GiftRow) -> Self {
        Gift {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            image_url: row.image_url,
            buy_link: row.buy_link,
            quantity: row.quantity,
            price_range: row.price_range,
            is_unique: row.is_unique,
            created_at: row.created_at,
        }
    }
}

const GIFT_COLUMNS: &str =
    "id, name, description, category, image_url, buy_link, quantity, price_range, is_unique, created_at";

#[async_trait]
impl GiftRepository for StoreGiftRepository {
    async fn count_gifts(&self) -> CoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gifts")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)
    }

    async fn insert_gifts(&self, gifts: &[Gift]) -> CoreResult<()> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        for gift in gifts {
            sqlx::query(
                r#"
                INSERT INTO gifts (id, name, description, category, image_url, buy_link, quantity, price_range, is_unique, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(gift.id)
            .bind(&gift.name)
            .bind(&gift.description)
            .bind(&gift.category)
            .bind(&gift.image_url)
            .bind(&gift.buy_link)
            .bind(gift.quantity)
            .bind(&gift.price_range)
            .bind(gift.is_unique)
            .bind(gift.created_at)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;
        }

        tx.commit().await.map_err(db_error)?;
        Ok(())
    }

    async fn get_gift(&self, id: Uuid) -> CoreResult<Option<Gift>> {
        let row = sqlx::query_as::<_, GiftRow>(&format!("SELECT {GIFT_COLUMNS} FROM gifts WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(row.map(Gift::from))
    }

    async fn list_gifts(&self, category: Option<&str>) -> CoreResult<Vec<Gift>> {
        let rows: Vec<GiftRow> = if let Some(category) = category {
            sqlx::query_as(&format!("SELECT {GIFT_COLUMNS} FROM gifts WHERE category = $1 ORDER BY category, name"))
                .bind(category)
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?
        } else {
            sqlx::query_as(&format!("SELECT {GIFT_COLUMNS} FROM gifts ORDER BY category, name"))
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?
        };

        Ok(rows.into_iter().map(Gift::from).collect())
    }
}
