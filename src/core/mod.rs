//! Core fetch state types and logic.
//!
//! This module contains the pure functional core:
//! - Status labels via the `Status` trait
//! - Outcome classification and the page cursor
//! - Immutable state snapshots
//! - Continuation guard and page-completion rules
//! - Immutable status history
//!
//! Nothing in this module awaits or performs I/O.

mod config;
mod guard;
mod history;
mod outcome;
mod query;
mod state;
mod status;

pub use config::FetchConfig;
pub use guard::{ContinuationGuard, ReachedMaxRule};
pub use history::{StatusHistory, StatusTransition};
pub use outcome::{FetchError, IntoOutcome, Outcome};
pub use query::{Query, QueryError, QueryErrors, DEFAULT_PAGE_SIZE};
pub use state::{PaginationState, SingleState, Snapshot};
pub use status::{FetchStatus, PagingStatus, Status};
