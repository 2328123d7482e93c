//! Immutable state snapshots threaded through fetch invocations.
//!
//! Snapshots are values. Every update consumes the old snapshot and
//! returns a new one, so a snapshot handed to an emit callback can never
//! change underneath it.

use super::query::Query;
use super::status::{FetchStatus, PagingStatus, Status};
use serde::{Deserialize, Serialize};

/// Common surface of every state snapshot.
pub trait Snapshot: Clone {
    type Status: Status;

    fn status(&self) -> Self::Status;

    fn with_status(self, status: Self::Status) -> Self;

    fn error_message(&self) -> Option<&str>;

    fn with_error(self, message: String) -> Self;

    fn without_error(self) -> Self;

    /// Return the snapshot to its resting status, keeping every other field.
    fn settle(self) -> Self {
        self.with_status(Self::Status::default())
    }

    fn is_settled(&self) -> bool {
        self.status().is_idle()
    }
}

/// Snapshot of a single, non-paginated fetch.
///
/// # Example
///
/// ```rust
/// use fetchstate::core::{FetchStatus, SingleState, Snapshot};
///
/// let state: SingleState<String> = SingleState::new();
/// let loading = state.clone().with_status(FetchStatus::Loading);
///
/// assert_eq!(state.status(), FetchStatus::Initial); // Original unchanged
/// assert_eq!(loading.status(), FetchStatus::Loading);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleState<T> {
    data: Option<T>,
    status: FetchStatus,
    error_message: Option<String>,
}

impl<T> SingleState<T> {
    pub fn new() -> Self {
        Self {
            data: None,
            status: FetchStatus::Initial,
            error_message: None,
        }
    }

    /// Resting snapshot that already holds data.
    pub fn loaded(data: T) -> Self {
        Self::new().with_data(Some(data))
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn with_data(self, data: Option<T>) -> Self {
        Self { data, ..self }
    }
}

impl<T> Default for SingleState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Snapshot for SingleState<T> {
    type Status = FetchStatus;

    fn status(&self) -> FetchStatus {
        self.status
    }

    fn with_status(self, status: FetchStatus) -> Self {
        Self { status, ..self }
    }

    fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    fn with_error(self, message: String) -> Self {
        Self {
            error_message: Some(message),
            ..self
        }
    }

    fn without_error(self) -> Self {
        Self {
            error_message: None,
            ..self
        }
    }
}

/// Snapshot of a paginated listing.
///
/// `list` holds every fetched record in fetch order: oldest page first,
/// records within a page in received order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState<T, P = ()> {
    list: Vec<T>,
    status: PagingStatus,
    query: Query<P>,
    reached_max: bool,
    error_message: Option<String>,
}

impl<T, P> PaginationState<T, P> {
    /// Empty listing positioned at `query`.
    pub fn new(query: Query<P>) -> Self {
        Self {
            list: Vec::new(),
            status: PagingStatus::Initial,
            query,
            reached_max: false,
            error_message: None,
        }
    }

    pub fn list(&self) -> &[T] {
        &self.list
    }

    pub fn into_list(self) -> Vec<T> {
        self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn query(&self) -> &Query<P> {
        &self.query
    }

    pub fn reached_max(&self) -> bool {
        self.reached_max
    }

    pub fn with_list(self, list: Vec<T>) -> Self {
        Self { list, ..self }
    }

    /// Append a page after the records already held.
    pub fn append(self, page: Vec<T>) -> Self {
        let mut list = self.list;
        list.extend(page);
        Self { list, ..self }
    }

    pub fn with_query(self, query: Query<P>) -> Self {
        Self { query, ..self }
    }

    pub fn with_reached_max(self, reached_max: bool) -> Self {
        Self {
            reached_max,
            ..self
        }
    }
}

impl<T, P: Default> Default for PaginationState<T, P> {
    fn default() -> Self {
        Self::new(Query::default())
    }
}

impl<T: Clone, P: Clone> Snapshot for PaginationState<T, P> {
    type Status = PagingStatus;

    fn status(&self) -> PagingStatus {
        self.status
    }

    fn with_status(self, status: PagingStatus) -> Self {
        Self { status, ..self }
    }

    fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    fn with_error(self, message: String) -> Self {
        Self {
            error_message: Some(message),
            ..self
        }
    }

    fn without_error(self) -> Self {
        Self {
            error_message: None,
            ..self
        }
    }
}
