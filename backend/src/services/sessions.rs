//! Registry of short-lived server-side sessions
//!
//! Planner and onboarding flows are stateful across several requests, so
//! each open flow lives here under a random id. Every session has its own
//! lock; closures passed to [`SessionRegistry::with`] run synchronously
//! and cannot hold the lock across an await point.
//!
//! Sessions idle for longer than the registry's timeout are treated as
//! closed. They are swept whenever a new session is created.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Default idle timeout for open flows
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

struct Slot<T> {
    value: T,
    touched: Instant,
}

fn lock<T>(slot: &Mutex<Slot<T>>) -> MutexGuard<'_, Slot<T>> {
    match slot.lock() {
        Ok(guard) => guard,
        // A panic mid-update leaves the session as it was at that point
        Err(poisoned) => poisoned.into_inner(),
    }
}

pub struct SessionRegistry<T> {
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<Slot<T>>>>>,
    idle_timeout: Duration,
}

impl<T> Default for SessionRegistry<T> {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl<T> SessionRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    fn is_live(&self, slot: &Slot<T>) -> bool {
        slot.touched.elapsed() < self.idle_timeout
    }

    /// Open a session, dropping any that have gone idle
    pub async fn create(&self, session: T) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, slot| self.is_live(&lock(slot)));
        let expired = before - sessions.len();
        if expired > 0 {
            debug!(expired, "Dropped idle sessions");
        }

        sessions.insert(
            id,
            Arc::new(Mutex::new(Slot {
                value: session,
                touched: Instant::now(),
            })),
        );
        id
    }

    /// Run `f` against the session; `None` if it does not exist or has expired
    pub async fn with<R>(&self, id: Uuid, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let session = self.sessions.read().await.get(&id).cloned()?;
        let mut slot = lock(&session);
        if !self.is_live(&slot) {
            return None;
        }
        slot.touched = Instant::now();
        Some(f(&mut slot.value))
    }

    /// Run `f` and close the session if it succeeds
    ///
    /// The check and the removal happen under one registry write lock, so
    /// no other request can change the session in between.
    pub async fn take<R, E>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut T) -> Result<R, E>,
    ) -> Option<Result<R, E>> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get(&id).cloned()?;
        let result = {
            let mut slot = lock(&session);
            if !self.is_live(&slot) {
                sessions.remove(&id);
                return None;
            }
            slot.touched = Instant::now();
            f(&mut slot.value)
        };
        if result.is_ok() {
            sessions.remove(&id);
        }
        Some(result)
    }

    /// Close a session; false if it was not open
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_mutate() {
        let registry = SessionRegistry::new();
        let id = registry.create(vec![1]).await;

        let len = registry
            .with(id, |v: &mut Vec<i32>| {
                v.push(2);
                v.len()
            })
            .await;
        assert_eq!(len, Some(2));
    }

    #[tokio::test]
    async fn test_unknown_session_is_none() {
        let registry: SessionRegistry<u32> = SessionRegistry::new();
        assert_eq!(registry.with(Uuid::new_v4(), |v| *v).await, None);
    }

    #[tokio::test]
    async fn test_removed_session_is_closed() {
        let registry = SessionRegistry::new();
        let id = registry.create(7u32).await;

        assert!(registry.remove(id).await);
        assert!(!registry.remove(id).await);
        assert_eq!(registry.with(id, |v| *v).await, None);
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test]
    async fn test_take_closes_only_on_success() {
        let registry = SessionRegistry::new();
        let id = registry.create(3u32).await;

        let refused = registry
            .take(id, |v| if *v > 5 { Ok(*v) } else { Err("too small") })
            .await;
        assert_eq!(refused, Some(Err("too small")));
        assert_eq!(registry.with(id, |v| *v).await, Some(3));

        registry.with(id, |v| *v = 9).await;
        let taken = registry
            .take(id, |v| if *v > 5 { Ok(*v) } else { Err("too small") })
            .await;
        assert_eq!(taken, Some(Ok(9)));
        assert_eq!(registry.with(id, |v| *v).await, None);
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test]
    async fn test_idle_sessions_expire() {
        let registry = SessionRegistry::with_idle_timeout(Duration::from_millis(20));
        let stale = registry.create(1u32).await;
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(registry.with(stale, |v| *v).await, None);
        assert_eq!(registry.take(stale, |v| Ok::<_, ()>(*v)).await, None);

        let fresh = registry.create(2u32).await;
        assert_eq!(registry.len().await, 1);
        assert_eq!(registry.with(fresh, |v| *v).await, Some(2));
    }

    #[tokio::test]
    async fn test_create_sweeps_idle_sessions() {
        let registry = SessionRegistry::with_idle_timeout(Duration::from_millis(20));
        for n in 0..5u32 {
            registry.create(n).await;
        }
        tokio::time::sleep(Duration::from_millis(40)).await;

        registry.create(99).await;
        assert_eq!(registry.len().await, 1);
    }
}
