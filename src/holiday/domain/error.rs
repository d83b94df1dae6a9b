//! Error types for holiday calendar parsing and lookup.

use thiserror::Error;

/// Errors returned while constructing holiday domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HolidayDomainError {
    /// The region identifier is empty after trimming.
    #[error("region identifier must not be empty")]
    EmptyRegion,
}

/// Reason the holiday calendar could not be obtained.
///
/// This is an internal, non-fatal condition. It is logged and then treated as
/// "no holiday data" by the lookup services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HolidayUnavailable {
    /// The request could not be sent or the response body could not be read.
    #[error("holiday calendar request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status code.
    #[error("holiday calendar endpoint returned status {0}")]
    Status(u16),

    /// The response body is not a valid calendar document.
    #[error("holiday calendar document is malformed: {0}")]
    Parse(String),
}
