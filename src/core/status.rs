//! Status labels carried by state snapshots.
//!
//! Every fetch starts and ends at an idle status. Busy statuses mark the
//! window in which a pending result is being awaited; success and error
//! are transient midpoints that are always followed by a return to rest.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for lifecycle status labels.
///
/// All methods are pure. Implementations are normally generated with
/// [`status_enum!`](crate::status_enum), which also picks the default
/// (resting) variant.
pub trait Status:
    Copy
    + Eq
    + Hash
    + Debug
    + Display
    + Default
    + Serialize
    + for<'de> Deserialize<'de>
    + Send
    + Sync
    + 'static
{
    /// Get the status name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this is a resting status (no fetch in flight).
    fn is_idle(&self) -> bool;

    /// Check if a pending result is being awaited.
    ///
    /// Default implementation returns `false`.
    fn is_busy(&self) -> bool {
        false
    }

    /// Check if this status reports a failure.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

crate::status_enum! {
    /// Lifecycle of a single, non-paginated fetch.
    #[serde(rename_all = "snake_case")]
    pub enum FetchStatus {
        Initial,
        Loading,
        Success,
        Error,
    }
    idle: [Initial]
    busy: [Loading]
    error: [Error]
}

crate::status_enum! {
    /// Lifecycle of a paginated fetch.
    ///
    /// `Loading` is only reachable from the first page; `Paging` only from
    /// later pages.
    #[serde(rename_all = "snake_case")]
    pub enum PagingStatus {
        Initial,
        Loading,
        Paging,
        Success,
        Error,
    }
    idle: [Initial]
    busy: [Loading, Paging]
    error: [Error]
}

impl PagingStatus {
    /// True while a continuation page is in flight.
    pub fn is_paging(&self) -> bool {
        matches!(self, Self::Paging)
    }
}
