//! Holiday events, regional calendars, and the parsed calendar snapshot.

use super::{HolidayUnavailable, RegionId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A single public holiday as published by the calendar source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayEvent {
    title: String,
    date: NaiveDate,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    bunting: bool,
}

impl HolidayEvent {
    /// Creates an event with empty notes and no bunting.
    #[must_use]
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            notes: String::new(),
            bunting: false,
        }
    }

    /// Sets the event notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Sets whether the event is marked with bunting.
    #[must_use]
    pub const fn with_bunting(mut self, bunting: bool) -> Self {
        self.bunting = bunting;
        self
    }

    /// Returns the human-readable holiday name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the holiday date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the publisher's notes, often empty.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns whether the publisher flags the day with bunting.
    #[must_use]
    pub const fn bunting(&self) -> bool {
        self.bunting
    }
}

/// Holiday events for one region, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalCalendar {
    region: RegionId,
    division: String,
    events: Vec<HolidayEvent>,
}

impl RegionalCalendar {
    /// Creates a regional calendar.
    #[must_use]
    pub fn new(
        region: RegionId,
        division: impl Into<String>,
        events: impl IntoIterator<Item = HolidayEvent>,
    ) -> Self {
        Self {
            region,
            division: division.into(),
            events: events.into_iter().collect(),
        }
    }

    /// Returns the region key.
    #[must_use]
    pub const fn region(&self) -> &RegionId {
        &self.region
    }

    /// Returns the division name reported by the source.
    #[must_use]
    pub fn division(&self) -> &str {
        &self.division
    }

    /// Returns the events in document order.
    #[must_use]
    pub fn events(&self) -> &[HolidayEvent] {
        &self.events
    }

    /// Returns the first event falling on `date`, in document order.
    #[must_use]
    pub fn find_by_date(&self, date: NaiveDate) -> Option<&HolidayEvent> {
        self.events.iter().find(|event| event.date == date)
    }

    /// Returns the distinct dates of all events.
    #[must_use]
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.events.iter().map(HolidayEvent::date).collect()
    }
}

/// Full parsed calendar document, keyed by region.
///
/// A snapshot is immutable and is replaced as a whole when the calendar is
/// refreshed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySnapshot {
    regions: BTreeMap<RegionId, RegionalCalendar>,
}

#[derive(Deserialize)]
struct DivisionDocument {
    #[serde(default)]
    division: String,
    events: Vec<HolidayEvent>,
}

impl HolidaySnapshot {
    /// Builds a snapshot from regional calendars. A later calendar for the
    /// same region replaces an earlier one.
    #[must_use]
    pub fn from_calendars(calendars: impl IntoIterator<Item = RegionalCalendar>) -> Self {
        let regions = calendars
            .into_iter()
            .map(|calendar| (calendar.region.clone(), calendar))
            .collect();
        Self { regions }
    }

    /// Parses a calendar document.
    ///
    /// Top-level entries that are not objects with an `events` list are
    /// skipped. Unknown fields inside regions and events are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayUnavailable::Parse`] when the body is not a JSON
    /// object or a region entry cannot be decoded (for example a malformed
    /// event date).
    pub fn from_json(body: &str) -> Result<Self, HolidayUnavailable> {
        let document: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(body).map_err(|err| HolidayUnavailable::Parse(err.to_string()))?;

        let mut regions = BTreeMap::new();
        for (key, value) in document {
            let is_region = value
                .as_object()
                .is_some_and(|entry| entry.contains_key("events"));
            let Ok(region) = RegionId::new(key.as_str()) else {
                continue;
            };
            if !is_region {
                tracing::debug!(key = %key, "skipping non-region calendar entry");
                continue;
            }

            let division: DivisionDocument = serde_json::from_value(value)
                .map_err(|err| HolidayUnavailable::Parse(format!("region '{key}': {err}")))?;
            regions.insert(
                region.clone(),
                RegionalCalendar::new(region, division.division, division.events),
            );
        }

        Ok(Self { regions })
    }

    /// Returns the calendar for `region`, if the document contains it.
    #[must_use]
    pub fn region(&self, region: &RegionId) -> Option<&RegionalCalendar> {
        self.regions.get(region)
    }

    /// Returns all regional calendars ordered by region key.
    pub fn calendars(&self) -> impl Iterator<Item = &RegionalCalendar> {
        self.regions.values()
    }

    /// Returns whether the snapshot holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
