//! Status-change observers.
//!
//! Observers see every status a machine passes through, independent of
//! the snapshots sent to the emit callback. They are fire-and-forget: the
//! machine never reads anything back from them.

use crate::core::{Status, StatusHistory, StatusTransition};

/// Sink for status notifications.
///
/// Implemented for every `FnMut(S)` closure, so a plain closure works
/// wherever an observer is expected.
pub trait StatusObserver<S> {
    fn notify(&mut self, status: S);
}

impl<S, F> StatusObserver<S> for F
where
    F: FnMut(S),
{
    fn notify(&mut self, status: S) {
        self(status)
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silent;

impl<S> StatusObserver<S> for Silent {
    fn notify(&mut self, _status: S) {}
}

/// Observer that records each notification as a timestamped transition.
///
/// The first notification is recorded as a move away from the resting
/// status.
///
/// # Example
///
/// ```rust
/// use fetchstate::core::FetchStatus;
/// use fetchstate::effects::{StatusObserver, StatusRecorder};
///
/// let mut recorder = StatusRecorder::new();
/// recorder.notify(FetchStatus::Loading);
/// recorder.notify(FetchStatus::Success);
///
/// assert_eq!(
///     recorder.history().path(),
///     vec![FetchStatus::Initial, FetchStatus::Loading, FetchStatus::Success]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct StatusRecorder<S: Status> {
    last: S,
    history: StatusHistory<S>,
}

impl<S: Status> StatusRecorder<S> {
    pub fn new() -> Self {
        Self {
            last: S::default(),
            history: StatusHistory::new(),
        }
    }

    pub fn history(&self) -> &StatusHistory<S> {
        &self.history
    }

    pub fn into_history(self) -> StatusHistory<S> {
        self.history
    }
}

impl<S: Status> StatusObserver<S> for StatusRecorder<S> {
    fn notify(&mut self, status: S) {
        self.history = self
            .history
            .record(StatusTransition::now(self.last, status));
        self.last = status;
    }
}
