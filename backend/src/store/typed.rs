//! Typed, fail-soft access to the key-value store

use super::KeyValueStore;
use fitcoach_shared::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct PreferenceStore {
    inner: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    pub fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }

    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.inner.health_check().await
    }

    /// Strict read: missing keys are `Ok(None)`, bad data is an error
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.inner.get(key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Serialization {
                key: key.to_string(),
                source,
            })
    }

    /// Read `key`, or `default` when it is missing, unreadable or malformed
    pub async fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.load(key).await {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(key, "No stored value, using default");
                default
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to load stored value, using default");
                default
            }
        }
    }

    /// Write `value` as JSON; failures are logged and reported as `false`
    pub async fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(source) => {
                let e = StoreError::Serialization {
                    key: key.to_string(),
                    source,
                };
                warn!(key, error = %e, "Failed to serialize value");
                return false;
            }
        };

        match self.inner.set(key, raw).await {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "Failed to persist value");
                false
            }
        }
    }

    pub async fn remove(&self, key: &str) -> bool {
        match self.inner.delete(key).await {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "Failed to delete value");
                false
            }
        }
    }
}
