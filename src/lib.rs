//! Fetchstate: an async fetch and pagination state machine
//!
//! Fetchstate drives caller-held state snapshots through a fixed status
//! lifecycle while a data-producing future is awaited, so UI state holders
//! do not re-implement the same loading/success/error bookkeeping for
//! every API call.
//!
//! # Core Concepts
//!
//! - **Outcome**: the closed Success/Failure result of a fetch
//! - **Snapshots**: immutable `SingleState` and `PaginationState` values
//! - **Engine**: `FetchEngine` runs one transition sequence per call and
//!   hands every intermediate snapshot to an emit callback
//! - **Guards**: pure rules deciding when a continuation page may be fetched
//!
//! # Example
//!
//! ```rust
//! use fetchstate::core::{Outcome, PaginationState, PagingStatus, Query, Snapshot};
//! use fetchstate::effects::{run_paged_fetch, StatusRecorder};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut state: PaginationState<u32> = PaginationState::new(Query::new(2).unwrap());
//! let mut recorder = StatusRecorder::new();
//!
//! for page in [vec![1, 2], vec![3]] {
//!     let mut latest = None;
//!     run_paged_fetch(
//!         async move { Outcome::success(page) },
//!         state.clone(),
//!         |next| latest = Some(next),
//!         &mut recorder,
//!     )
//!     .await;
//!     state = latest.unwrap();
//! }
//!
//! assert_eq!(state.list(), &[1, 2, 3]);
//! assert_eq!(state.query().page(), 3);
//! assert_eq!(state.status(), PagingStatus::Initial);
//! assert_eq!(recorder.history().transitions().len(), 6);
//! # });
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use builder::{BuildError, FetchEngineBuilder};
pub use self::core::{
    FetchStatus, Outcome, PagingStatus, PaginationState, Query, SingleState, Snapshot, Status,
};
pub use effects::{run_paged_fetch, run_single_fetch, FetchEngine, Silent, StatusObserver};
