//! Redis-backed store
//!
//! All keys are namespaced with the configured prefix so several
//! deployments can share one Redis instance.

use super::KeyValueStore;
use async_trait::async_trait;
use fitcoach_shared::StoreError;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::error;

#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
    prefix: String,
}

impl RedisStore {
    pub fn new(manager: ConnectionManager, prefix: impl Into<String>) -> Self {
        Self {
            manager,
            prefix: prefix.into(),
        }
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

fn backend_error(err: redis::RedisError) -> StoreError {
    StoreError::Backend(err.to_string())
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.manager.clone();
        conn.get(self.build_key(key)).await.map_err(backend_error)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        conn.set::<_, _, ()>(self.build_key(key), value)
            .await
            .map_err(backend_error)
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        conn.del::<_, ()>(self.build_key(key))
            .await
            .map_err(backend_error)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        let response: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                error!("Redis PING failed: {}", e);
                backend_error(e)
            })?;

        if response == "PONG" {
            Ok(())
        } else {
            Err(StoreError::Backend(format!(
                "unexpected PING response '{}'",
                response
            )))
        }
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
