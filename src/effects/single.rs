//! Single (non-paginated) fetch lifecycle.

use crate::core::{FetchStatus, IntoOutcome, Outcome, SingleState, Snapshot};
use crate::effects::machine::{FetchEngine, Transitions};
use crate::effects::observer::StatusObserver;
use std::future::Future;
use tracing::warn;

impl FetchEngine {
    /// Drive `input` through loading, success or error, and back to rest.
    ///
    /// Emits at least three snapshots, in order: `Loading`, then `Success`
    /// (data replaced by the outcome's value) or `Error` (message replaced,
    /// data untouched), then `Initial`. A transport exception from
    /// `pending` is handled like a failure outcome, with the exception's
    /// text as the message. Nothing is returned and nothing is raised.
    pub async fn run_single<T, F, E, O>(
        &self,
        pending: F,
        input: SingleState<T>,
        emit: E,
        on_status: &mut O,
    ) where
        T: Clone,
        F: Future,
        F::Output: IntoOutcome<T>,
        E: FnMut(SingleState<T>),
        O: StatusObserver<FetchStatus> + ?Sized,
    {
        let mut transitions = Transitions::new(emit, on_status);
        let loading = transitions.enter(input, FetchStatus::Loading);

        let settled = match pending.await.into_outcome() {
            Ok(Outcome::Success(data)) => {
                let state = self.clear_stale(loading.with_data(data));
                transitions.enter(state, FetchStatus::Success)
            }
            Ok(Outcome::Failure(message)) => {
                transitions.enter(loading.with_error(message), FetchStatus::Error)
            }
            Err(err) => {
                warn!(error = %err, "single fetch failed before producing an outcome");
                transitions.enter(loading.with_error(err.to_string()), FetchStatus::Error)
            }
        };

        transitions.enter(settled, FetchStatus::Initial);
    }
}
