//! Fetch engine that drives snapshots through a status lifecycle.

use crate::builder::BuildError;
use crate::core::{
    FetchConfig, FetchStatus, IntoOutcome, PagingStatus, PaginationState, Query, SingleState,
    Snapshot, Status, DEFAULT_PAGE_SIZE,
};
use crate::effects::observer::StatusObserver;
use std::future::Future;
use std::num::NonZeroU32;
use tracing::debug;

/// Runs fetch invocations against caller-held snapshots.
///
/// The engine holds configuration only. State lives with the caller and
/// is passed in on every call; results come back solely through the emit
/// callback, ending at the resting status.
///
/// # Example
///
/// ```rust
/// use fetchstate::core::{FetchStatus, Outcome, SingleState, Snapshot};
/// use fetchstate::effects::{FetchEngine, Silent};
///
/// # tokio_test_block(async {
/// let engine = FetchEngine::default();
/// let mut emitted = Vec::new();
///
/// engine
///     .run_single(
///         async { Outcome::success("profile".to_string()) },
///         SingleState::new(),
///         |state| emitted.push(state),
///         &mut Silent,
///     )
///     .await;
///
/// let statuses: Vec<_> = emitted.iter().map(|s| s.status()).collect();
/// assert_eq!(statuses, vec![FetchStatus::Loading, FetchStatus::Success, FetchStatus::Initial]);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f);
/// # }
/// ```
///
/// Engines are only built from a validated [`FetchConfig`], through
/// [`FetchEngineBuilder`](crate::builder::FetchEngineBuilder) or
/// `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchEngine {
    pub(crate) config: FetchConfig,
    page_size: NonZeroU32,
}

impl FetchEngine {
    pub(crate) fn new(config: FetchConfig) -> Result<Self, BuildError> {
        let page_size = config.validate()?;
        Ok(Self { config, page_size })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Empty listing at page 1 using the configured page size.
    pub fn first_page_state<T>(&self) -> PaginationState<T> {
        PaginationState::new(Query::sized(self.page_size))
    }

    pub(crate) fn clear_stale<S: Snapshot>(&self, state: S) -> S {
        if self.config.clear_stale_error {
            state.without_error()
        } else {
            state
        }
    }
}

/// Drive a single fetch with the default configuration.
///
/// See [`FetchEngine::run_single`].
pub async fn run_single_fetch<T, F, E, O>(
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
    FetchEngine::default()
        .run_single(pending, input, emit, on_status)
        .await
}

/// Drive a paginated fetch with the default configuration.
///
/// See [`FetchEngine::run_paged`].
pub async fn run_paged_fetch<T, P, F, E, O>(
    pending: F,
    input: PaginationState<T, P>,
    emit: E,
    on_status: &mut O,
) where
    T: Clone,
    P: Clone,
    F: Future,
    F::Output: IntoOutcome<Vec<T>>,
    E: FnMut(PaginationState<T, P>),
    O: StatusObserver<PagingStatus> + ?Sized,
{
    FetchEngine::default()
        .run_paged(pending, input, emit, on_status)
        .await
}

impl Default for FetchEngine {
    fn default() -> Self {
        Self {
            config: FetchConfig::default(),
            page_size: DEFAULT_SIZE,
        }
    }
}

const DEFAULT_SIZE: NonZeroU32 = match NonZeroU32::new(DEFAULT_PAGE_SIZE) {
    Some(size) => size,
    None => NonZeroU32::MIN,
};

/// Sequencer for one invocation: notify, then emit the updated snapshot.
pub(crate) struct Transitions<'a, E, O: ?Sized> {
    emit: E,
    observer: &'a mut O,
    emitted: usize,
}

impl<'a, E, O: ?Sized> Transitions<'a, E, O> {
    pub(crate) fn new(emit: E, observer: &'a mut O) -> Self {
        Self {
            emit,
            observer,
            emitted: 0,
        }
    }

    /// Move `state` to `status`, returning the snapshot that was emitted.
    pub(crate) fn enter<S>(&mut self, state: S, status: S::Status) -> S
    where
        S: Snapshot,
        E: FnMut(S),
        O: StatusObserver<S::Status>,
    {
        debug!(status = status.name(), step = self.emitted, "fetch status changed");
        self.observer.notify(status);

        let next = state.with_status(status);
        (self.emit)(next.clone());
        self.emitted += 1;
        next
    }
}
