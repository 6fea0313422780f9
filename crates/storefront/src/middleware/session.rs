//! Session middleware configuration.
//!
//! Sessions hold the visitor's cart and pending notifications. They live in
//! process memory only: a restart empties every cart.
//!
//! The store is a `moka` cache bounded by entry count and evicting sessions
//! idle for longer than the cookie expiry, so abandoned carts do not pile up.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tower_sessions::cookie::time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};
use tower_sessions::{Expiry, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "bazaar_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// In-memory session store with idle eviction and a capacity bound.
#[derive(Clone)]
pub struct MokaSessionStore {
    cache: Cache<Id, Record>,
}

impl MokaSessionStore {
    /// Create a store holding at most `max_sessions` sessions, each dropped
    /// after `idle` without being read or written.
    #[must_use]
    pub fn new(max_sessions: u64, idle: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle)
            .build();
        Self { cache }
    }

    /// Number of sessions currently held (approximate until pending
    /// maintenance has run).
    #[must_use]
    pub fn session_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Apply pending evictions now.
    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }
}

impl fmt::Debug for MokaSessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MokaSessionStore")
            .field("sessions", &self.cache.entry_count())
            .finish()
    }
}

#[async_trait]
impl SessionStore for MokaSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self.cache.contains_key(&record.id) {
            // ID collision
            record.id = Id::default();
        }
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        match self.cache.get(session_id).await {
            Some(record) if record.expiry_date > OffsetDateTime::now_utc() => Ok(Some(record)),
            Some(_) => {
                self.cache.invalidate(session_id).await;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.cache.invalidate(session_id).await;
        Ok(())
    }
}

/// Create the session layer with a bounded in-memory store.
///
/// Cookies are marked `Secure` when the storefront's base URL is HTTPS.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaSessionStore> {
    let idle = Duration::from_secs(SESSION_EXPIRY_SECONDS.unsigned_abs());
    let store = MokaSessionStore::new(config.session_capacity, idle);

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
