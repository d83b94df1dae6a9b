//! Adapter implementations for holiday calendar ports.

pub mod http;
pub mod memory;

pub use http::{HttpHolidaySource, HttpHolidaySourceConfig};
pub use memory::StaticHolidaySource;
