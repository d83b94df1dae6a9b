//! Time-bounded, single-flight cache over a [`HolidaySource`].

use crate::holiday::{
    domain::HolidaySnapshot,
    ports::{HolidayLookup, HolidaySource},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

/// Cache policy for [`HolidayCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayCacheConfig {
    /// How long a fetched snapshot is served without refreshing.
    pub ttl: Duration,
    /// Whether an expired snapshot is served when its refresh fails.
    pub serve_stale_on_error: bool,
}

impl Default for HolidayCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            serve_stale_on_error: true,
        }
    }
}

impl HolidayCacheConfig {
    /// Sets the validity window.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sets whether expired snapshots survive a failed refresh.
    #[must_use]
    pub const fn with_serve_stale_on_error(mut self, serve_stale_on_error: bool) -> Self {
        self.serve_stale_on_error = serve_stale_on_error;
        self
    }
}

#[derive(Debug)]
struct CachedSnapshot {
    snapshot: Arc<HolidaySnapshot>,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct CacheState {
    cached: Option<CachedSnapshot>,
    last_refresh: Option<HolidayLookup>,
}

/// Memoizing wrapper around a holiday source.
///
/// The cached slot is guarded by an async mutex that stays locked while a
/// refresh is in flight. Callers that queued behind a refresh receive its
/// outcome, failure included, without fetching again. Unavailable results
/// are never served to callers arriving after the refresh completed.
pub struct HolidayCache<S, C>
where
    S: HolidaySource,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    clock: Arc<C>,
    config: HolidayCacheConfig,
    state: Mutex<CacheState>,
    refreshes: AtomicU64,
}

impl<S, C> HolidayCache<S, C>
where
    S: HolidaySource,
    C: Clock + Send + Sync,
{
    /// Creates an empty cache.
    #[must_use]
    pub fn new(source: Arc<S>, clock: Arc<C>, config: HolidayCacheConfig) -> Self {
        Self {
            source,
            clock,
            config,
            state: Mutex::new(CacheState::default()),
            refreshes: AtomicU64::new(0),
        }
    }

    /// Returns the current snapshot, fetching it when absent or expired.
    pub async fn snapshot(&self) -> HolidayLookup {
        let observed = self.refreshes.load(Ordering::Acquire);
        let mut state = self.state.lock().await;

        if self.refreshes.load(Ordering::Acquire) != observed {
            if let Some(outcome) = state.last_refresh.clone() {
                tracing::debug!("sharing holiday calendar refresh completed while waiting");
                return outcome;
            }
        }

        let now = self.clock.utc();
        if let Some(cached) = state
            .cached
            .as_ref()
            .filter(|cached| self.is_fresh(cached, now))
        {
            tracing::debug!(fetched_at = %cached.fetched_at, "holiday calendar cache hit");
            return HolidayLookup::Data(Arc::clone(&cached.snapshot));
        }

        let outcome = match self.source.fetch().await {
            HolidayLookup::Data(snapshot) => {
                state.cached = Some(CachedSnapshot {
                    snapshot: Arc::clone(&snapshot),
                    fetched_at: now,
                });
                HolidayLookup::Data(snapshot)
            }
            HolidayLookup::Unavailable(reason) => match state.cached.as_ref() {
                Some(stale) if self.config.serve_stale_on_error => {
                    tracing::warn!(
                        fetched_at = %stale.fetched_at,
                        %reason,
                        "holiday calendar refresh failed, serving stale snapshot"
                    );
                    HolidayLookup::Data(Arc::clone(&stale.snapshot))
                }
                _ => HolidayLookup::Unavailable(reason),
            },
        };

        state.last_refresh = Some(outcome.clone());
        self.refreshes.fetch_add(1, Ordering::Release);
        outcome
    }

    /// Drops the cached snapshot so the next call fetches again.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        state.cached = None;
        state.last_refresh = None;
    }

    fn is_fresh(&self, cached: &CachedSnapshot, now: DateTime<Utc>) -> bool {
        let Ok(ttl) = chrono::Duration::from_std(self.config.ttl) else {
            return true;
        };
        cached
            .fetched_at
            .checked_add_signed(ttl)
            .is_none_or(|expires_at| now < expires_at)
    }
}
