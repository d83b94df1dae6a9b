//! Task creation for caseworkers.
//!
//! This module creates task records whose due date has been checked against
//! the public holiday calendar. Validation always runs before the repository
//! is touched, so a rejected request leaves stored state unchanged. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
