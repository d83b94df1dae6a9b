//! Public holiday lookup for task due-date validation.
//!
//! The module fetches an external holiday calendar, keeps the last good
//! snapshot in an explicit cache, and answers "is this date a holiday in this
//! region?" queries. Calendar unavailability is never an error for callers:
//! it degrades to "not a holiday". The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Cache and lookup services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
