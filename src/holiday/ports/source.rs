//! Source port for fetching holiday calendar snapshots.

use crate::holiday::domain::{HolidaySnapshot, HolidayUnavailable};
use async_trait::async_trait;
use std::sync::Arc;

/// Outcome of a calendar lookup.
///
/// Unavailability is an ordinary value rather than an error: callers decide
/// how to degrade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidayLookup {
    /// A parsed calendar snapshot.
    Data(Arc<HolidaySnapshot>),
    /// The calendar could not be obtained.
    Unavailable(HolidayUnavailable),
}

impl HolidayLookup {
    /// Wraps a freshly parsed snapshot.
    #[must_use]
    pub fn data(snapshot: HolidaySnapshot) -> Self {
        Self::Data(Arc::new(snapshot))
    }

    /// Returns the snapshot, or `None` when unavailable.
    #[must_use]
    pub fn snapshot(&self) -> Option<&HolidaySnapshot> {
        match self {
            Self::Data(snapshot) => Some(snapshot.as_ref()),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<Result<HolidaySnapshot, HolidayUnavailable>> for HolidayLookup {
    fn from(result: Result<HolidaySnapshot, HolidayUnavailable>) -> Self {
        match result {
            Ok(snapshot) => Self::data(snapshot),
            Err(reason) => Self::Unavailable(reason),
        }
    }
}

/// Calendar fetch contract.
///
/// Implementations perform at most one upstream call per invocation and keep
/// no cache of their own.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetches and parses the current calendar.
    ///
    /// Never fails: every transport or parse problem is reported as
    /// [`HolidayLookup::Unavailable`].
    async fn fetch(&self) -> HolidayLookup;
}
