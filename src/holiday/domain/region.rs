//! Region identifier for regional holiday calendars.

use super::HolidayDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a regional calendar within a holiday document, such as
/// `england-and-wales`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Region consulted by default for task due dates.
    pub const ENGLAND_AND_WALES: &'static str = "england-and-wales";

    /// Creates a validated region identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayDomainError::EmptyRegion`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, HolidayDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(HolidayDomainError::EmptyRegion);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the England and Wales region.
    #[must_use]
    pub fn england_and_wales() -> Self {
        Self(Self::ENGLAND_AND_WALES.to_owned())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RegionId {
    fn default() -> Self {
        Self::england_and_wales()
    }
}

impl AsRef<str> for RegionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
