//! Guard predicates for paginated continuation.
//!
//! Both rules here are pure functions of the last known snapshot. The
//! continuation guard is advisory: it reads the status field of the
//! snapshot it is given, so a caller racing two fetches on stale state
//! can still get past it.

use super::status::PagingStatus;
use serde::{Deserialize, Serialize};

/// How a successful page sets `reached_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReachedMaxRule {
    /// `reached_max` is set when the page came back exactly full.
    #[default]
    FullPage,

    /// `reached_max` is set when the page came back short.
    ShortPage,
}

impl ReachedMaxRule {
    pub fn reached_max(&self, received: usize, page_size: u32) -> bool {
        let page_size = page_size as usize;
        match self {
            Self::FullPage => received == page_size,
            Self::ShortPage => received < page_size,
        }
    }
}

/// When a continuation page (page > 1) must not be fetched.
///
/// Both variants refuse while a continuation page is already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuationGuard {
    /// Refuse unless the previous page set `reached_max`.
    ///
    /// Pairs with [`ReachedMaxRule::FullPage`]: only a full page lets the
    /// next one through.
    #[default]
    RequireFullPage,

    /// Refuse once `reached_max` is set.
    ///
    /// Pairs with [`ReachedMaxRule::ShortPage`]: a short page ends the
    /// listing until the cursor is reset to page 1.
    BlockWhenExhausted,
}

impl ContinuationGuard {
    /// Check whether a continuation fetch must be refused.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fetchstate::core::{ContinuationGuard, PagingStatus};
    ///
    /// let guard = ContinuationGuard::BlockWhenExhausted;
    ///
    /// assert!(guard.blocks(PagingStatus::Paging, false));
    /// assert!(guard.blocks(PagingStatus::Initial, true));
    /// assert!(!guard.blocks(PagingStatus::Initial, false));
    /// ```
    pub fn blocks(&self, status: PagingStatus, reached_max: bool) -> bool {
        if status.is_paging() {
            return true;
        }

        match self {
            Self::RequireFullPage => !reached_max,
            Self::BlockWhenExhausted => reached_max,
        }
    }

    pub fn allows(&self, status: PagingStatus, reached_max: bool) -> bool {
        !self.blocks(status, reached_max)
    }
}
