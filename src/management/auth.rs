use std::sync::{Arc, Weak};

use tokio::{sync::Mutex, task::JoinHandle};
use tracing::debug;

use crate::types::AccessToken;

#[derive(Default)]
struct TokenSlot {
    token: Option<AccessToken>,
    expiry: Option<JoinHandle<()>>,
}

/// Holds at most one access token and the timer that drops it.
///
/// The timer is aborted when a newer token replaces the cached one and when
/// the manager itself is dropped.
#[derive(Default)]
pub struct TokenManager {
    slot: Arc<Mutex<TokenSlot>>,
}

impl TokenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached bearer string, if one is still valid.
    pub async fn current_token(&self) -> Option<String> {
        let slot = self.slot.lock().await;
        slot.token.as_ref().map(|t| t.access_token.clone())
    }

    /// Caches `token` and schedules its invalidation after
    /// [`AccessToken::invalidates_after`].
    pub async fn store(&self, token: AccessToken) -> String {
        let delay = token.invalidates_after();
        let access_token = token.access_token.clone();
        let weak = Arc::downgrade(&self.slot);

        // Spawned under the lock so the timer cannot fire before the token lands.
        let mut slot = self.slot.lock().await;
        slot.token = Some(token);
        let expiry = tokio::spawn(invalidate_after(weak, delay));
        if let Some(previous) = slot.expiry.replace(expiry) {
            previous.abort();
        }

        access_token
    }

    pub async fn clear(&self) {
        let mut slot = self.slot.lock().await;
        slot.token = None;
        if let Some(expiry) = slot.expiry.take() {
            expiry.abort();
        }
    }
}

async fn invalidate_after(slot: Weak<Mutex<TokenSlot>>, delay: std::time::Duration) {
    tokio::time::sleep(delay).await;

    if let Some(slot) = slot.upgrade() {
        let mut slot = slot.lock().await;
        slot.token = None;
        slot.expiry = None;
        debug!("access token invalidated");
    }
}

impl Drop for TokenManager {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.try_lock() {
            if let Some(expiry) = slot.expiry.take() {
                expiry.abort();
            }
        }
    }
}
