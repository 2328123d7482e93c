//! The imperative shell around the pure core.
//!
//! This module awaits pending operations and pushes the resulting
//! snapshots out through caller-supplied callbacks.
//!
//! # Key Concepts
//!
//! - **Engine**: `FetchEngine` holds configuration and runs one transition
//!   sequence per call
//! - **Observers**: optional status sinks, from plain closures to the
//!   history-keeping `StatusRecorder`
//! - **Effects**: Stillwater effects can stand in for the pending future

mod effect;
mod machine;
mod observer;
mod paged;
mod single;

pub use machine::{run_paged_fetch, run_single_fetch, FetchEngine};
pub use observer::{Silent, StatusObserver, StatusRecorder};
