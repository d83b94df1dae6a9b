//! Application services for holiday caching and lookup.

mod cache;
mod checker;

pub use cache::{HolidayCache, HolidayCacheConfig};
pub use checker::HolidayChecker;
