//! Builder API for ergonomic engine construction.
//!
//! This module provides the fluent engine builder and the `status_enum!`
//! macro for declaring status labels with minimal boilerplate.

pub mod engine;
pub mod error;
pub mod macros;

pub use engine::FetchEngineBuilder;
pub use error::BuildError;

use crate::core::{ContinuationGuard, ReachedMaxRule};
use crate::effects::FetchEngine;

/// Engine that stops paging once a short page arrives.
///
/// A short page sets `reached_max`, and continuation is refused from then
/// on until the cursor is reset to page 1.
///
/// # Example
///
/// ```
/// use fetchstate::builder::exhaustion_engine;
/// use fetchstate::core::ContinuationGuard;
///
/// let engine = exhaustion_engine(20).unwrap();
/// assert_eq!(engine.config().continuation_guard, ContinuationGuard::BlockWhenExhausted);
/// ```
pub fn exhaustion_engine(page_size: u32) -> Result<FetchEngine, BuildError> {
    FetchEngineBuilder::new()
        .page_size(page_size)
        .reached_max_rule(ReachedMaxRule::ShortPage)
        .continuation_guard(ContinuationGuard::BlockWhenExhausted)
        .build()
}
