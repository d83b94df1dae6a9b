//! Caseworker task creation with public holiday validation.
//!
//! A task may not fall due on a public holiday. This crate holds the
//! validation pipeline that enforces that rule: a cached lookup against an
//! external holiday calendar, and a creation service that checks the due date
//! before anything is written.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`holiday`]: Holiday calendar fetching, caching, and date matching
//! - [`task`]: Task creation, validate-before-write orchestration

pub mod holiday;
pub mod task;
