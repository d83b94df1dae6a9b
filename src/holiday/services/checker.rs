//! Date-to-holiday matching over the cached calendar.

use super::HolidayCache;
use crate::holiday::{
    domain::{HolidayEvent, RegionId},
    ports::{HolidayLookup, HolidaySource},
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Answers holiday queries for a region.
///
/// When the calendar or the region is unavailable the checker cannot
/// confirm a holiday and reports none.
pub struct HolidayChecker<S, C>
where
    S: HolidaySource,
    C: Clock + Send + Sync,
{
    cache: Arc<HolidayCache<S, C>>,
}

impl<S, C> Clone for HolidayChecker<S, C>
where
    S: HolidaySource,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<S, C> HolidayChecker<S, C>
where
    S: HolidaySource,
    C: Clock + Send + Sync,
{
    /// Creates a checker reading through `cache`.
    #[must_use]
    pub const fn new(cache: Arc<HolidayCache<S, C>>) -> Self {
        Self { cache }
    }

    /// Returns the matching holiday for the UTC calendar date of `at`.
    pub async fn is_holiday(&self, at: DateTime<Utc>, region: &RegionId) -> Option<HolidayEvent> {
        self.is_holiday_on(at.date_naive(), region).await
    }

    /// Returns the first event in `region` falling on `date`, in document
    /// order.
    pub async fn is_holiday_on(&self, date: NaiveDate, region: &RegionId) -> Option<HolidayEvent> {
        let lookup = self.cache.snapshot().await;
        let Some(calendar) = lookup.snapshot().and_then(|snapshot| snapshot.region(region)) else {
            log_unconfirmed(&lookup, region, Some(date));
            return None;
        };
        calendar.find_by_date(date).cloned()
    }

    /// Returns every holiday date in `region`, or an empty set when the
    /// calendar is unavailable.
    pub async fn all_holiday_dates(&self, region: &RegionId) -> BTreeSet<NaiveDate> {
        let lookup = self.cache.snapshot().await;
        match lookup.snapshot().and_then(|snapshot| snapshot.region(region)) {
            Some(calendar) => calendar.dates(),
            None => {
                log_unconfirmed(&lookup, region, None);
                BTreeSet::new()
            }
        }
    }
}

fn log_unconfirmed(lookup: &HolidayLookup, region: &RegionId, date: Option<NaiveDate>) {
    match lookup {
        HolidayLookup::Unavailable(reason) => tracing::warn!(
            %region,
            date = ?date,
            %reason,
            "unable to validate holidays, calendar unavailable"
        ),
        HolidayLookup::Data(_) => tracing::warn!(
            %region,
            date = ?date,
            "unable to validate holidays, region missing from calendar"
        ),
    }
}
