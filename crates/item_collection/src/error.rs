//! Error type shared by the collection model and its configuration.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned by validating collection operations.
///
/// Everything outside page-size validation and configuration parsing degrades by clamping or
/// no-op instead of failing.
pub enum ItemsError {
    /// A page size of zero was requested.
    #[error("invalid page size {0}: page size must be at least 1")]
    InvalidPageSize(usize),
    /// Collection configuration could not be parsed or failed validation.
    #[error("invalid collection config: {0}")]
    InvalidConfig(String),
}
