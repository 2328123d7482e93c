//! Timestamped record of the statuses a snapshot passed through.

use super::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One observed status change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatusTransition<S: Status> {
    pub from: S,
    pub to: S,
    pub timestamp: DateTime<Utc>,
}

impl<S: Status> StatusTransition<S> {
    /// A transition observed now.
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only log of status changes, oldest first.
///
/// `record` leaves `self` alone and returns the extended log.
///
/// ```rust
/// use fetchstate::core::{FetchStatus, StatusHistory, StatusTransition};
///
/// let history = StatusHistory::new()
///     .record(StatusTransition::now(FetchStatus::Initial, FetchStatus::Loading))
///     .record(StatusTransition::now(FetchStatus::Loading, FetchStatus::Success));
///
/// assert_eq!(
///     history.path(),
///     vec![FetchStatus::Initial, FetchStatus::Loading, FetchStatus::Success]
/// );
/// assert_eq!(history.fetch_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatusHistory<S: Status> {
    entries: Vec<StatusTransition<S>>,
}

impl<S: Status> Default for StatusHistory<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S: Status> StatusHistory<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, transition: StatusTransition<S>) -> Self {
        let entries = self
            .entries
            .iter()
            .cloned()
            .chain(std::iter::once(transition))
            .collect();
        Self { entries }
    }

    /// The starting status followed by every status entered.
    pub fn path(&self) -> Vec<S> {
        self.entries
            .first()
            .map(|first| first.from)
            .into_iter()
            .chain(self.entries.iter().map(|t| t.to))
            .collect()
    }

    pub fn current(&self) -> Option<S> {
        self.entries.last().map(|t| t.to)
    }

    /// How many fetches started, counted as entries into a busy status
    /// from a non-busy one.
    pub fn fetch_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|t| t.to.is_busy() && !t.from.is_busy())
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|t| t.to.is_error()).count()
    }

    pub fn last_error_at(&self) -> Option<DateTime<Utc>> {
        self.entries
            .iter()
            .rev()
            .find(|t| t.to.is_error())
            .map(|t| t.timestamp)
    }

    /// Wall time between the first and last recorded change.
    pub fn elapsed(&self) -> Option<Duration> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn transitions(&self) -> &[StatusTransition<S>] {
        &self.entries
    }
}
