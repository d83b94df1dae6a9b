//! Port contracts for holiday calendar access.

pub mod source;

pub use source::{HolidayLookup, HolidaySource};
