//! Domain model for holiday calendars.
//!
//! A calendar document is parsed once into an immutable
//! [`HolidaySnapshot`] that is shared between callers and replaced wholesale
//! on refresh.

mod calendar;
mod error;
mod region;

pub use calendar::{HolidayEvent, HolidaySnapshot, RegionalCalendar};
pub use error::{HolidayDomainError, HolidayUnavailable};
pub use region::RegionId;
