//! In-memory holiday source for tests and offline use.

use crate::holiday::{
    domain::{HolidaySnapshot, HolidayUnavailable},
    ports::{HolidayLookup, HolidaySource},
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Holiday source that answers every fetch with a preset lookup and counts
/// how often it was called.
#[derive(Debug, Clone)]
pub struct StaticHolidaySource {
    lookup: Arc<RwLock<HolidayLookup>>,
    fetches: Arc<AtomicUsize>,
}

impl StaticHolidaySource {
    /// Creates a source returning `lookup`.
    #[must_use]
    pub fn new(lookup: HolidayLookup) -> Self {
        Self {
            lookup: Arc::new(RwLock::new(lookup)),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a source returning `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: HolidaySnapshot) -> Self {
        Self::new(HolidayLookup::data(snapshot))
    }

    /// Creates a source simulating an unreachable upstream.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(HolidayLookup::Unavailable(HolidayUnavailable::Transport(
            "connection refused".to_owned(),
        )))
    }

    /// Replaces the lookup returned by subsequent fetches.
    pub fn set(&self, lookup: HolidayLookup) {
        if let Ok(mut current) = self.lookup.write() {
            *current = lookup;
        }
    }

    /// Returns the number of fetches performed so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HolidaySource for StaticHolidaySource {
    async fn fetch(&self) -> HolidayLookup {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.lookup.read().map_or_else(
            |err| HolidayLookup::Unavailable(HolidayUnavailable::Transport(err.to_string())),
            |lookup| lookup.clone(),
        )
    }
}
