use redis::RedisResult;
use tracing::info;

#[derive(Clone)]
pub struct RedisClient {
    client: redis::Client,
}

impl RedisClient {
    pub fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        info!("Redis rate limiting enabled");
        Ok(Self { client })
    }

    /// Fixed-window counter. `true` while `key` has seen at most `limit` hits in the window.
    ///
    /// The window starts at the first hit: `EXPIRE ... NX` (Redis 7+) leaves an
    /// existing TTL alone, so later hits never push the reset further out.
    pub async fn check_rate_limit(&self, key: &str, limit: i64, window_seconds: i64) -> RedisResult<bool> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let (count,): (i64,) = redis::pipe()
            .atomic()
            .incr(key, 1)
            .add_command(redis::cmd("EXPIRE").arg(key).arg(window_seconds).arg("NX").clone())
            .ignore()
            .query_async(&mut conn)
            .await?;

        Ok(within_limit(count, limit))
    }
}

fn within_limit(count: i64, limit: i64) -> bool {
    count <= limit
}

pub fn rate_limit_key(client: &str) -> String {
    format!("ratelimit:{}", client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_key() {
        assert_eq!(rate_limit_key("10.0.0.7"), "ratelimit:10.0.0.7");
    }

    #[test]
    fn test_rejects_malformed_url() {
        assert!(RedisClient::new("not a url").is_err());
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert!(within_limit(1, 2));
        assert!(within_limit(2, 2));
        assert!(!within_limit(3, 2));
    }

    // Needs a Redis 7+ server: `REDIS_URL=redis://127.0.0.1 cargo test -- --ignored`
    #[tokio::test]
    #[ignore]
    async fn test_window_resets_despite_steady_traffic() {
        use redis::AsyncCommands;

        let url = std::env::var("REDIS_URL").expect("REDIS_URL not set");
        let redis = RedisClient::new(&url).unwrap();
        let key = rate_limit_key(&format!("test-{}", uuid::Uuid::new_v4()));

        assert!(redis.check_rate_limit(&key, 2, 2).await.unwrap());
        tokio::time::sleep(std::time::Duration::from_millis(1200)).await;
        assert!(redis.check_rate_limit(&key, 2, 2).await.unwrap());
        assert!(!redis.check_rate_limit(&key, 2, 2).await.unwrap());

        // The second hit did not extend the window opened by the first.
        tokio::time::sleep(std::time::Duration::from_millis(1000)).await;
        assert!(redis.check_rate_limit(&key, 2, 2).await.unwrap());

        let mut conn = redis.client.get_multiplexed_async_connection().await.unwrap();
        let _: () = conn.del(&key).await.unwrap();
    }
}
