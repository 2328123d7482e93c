//! Build errors for the engine builder.

use thiserror::Error;

/// Errors that can occur when building a fetch engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Default page size must be at least 1. Call .page_size(n) with n >= 1")]
    ZeroPageSize,
}
