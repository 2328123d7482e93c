//! Result classification for data-producing operations.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Outcome reported by a completed data-producing operation.
///
/// A closed two-variant type: either the operation produced a value
/// (possibly absent, for the no-data-yet case) or it reported a domain
/// failure with a human-readable message.
///
/// # Example
///
/// ```rust
/// use fetchstate::core::Outcome;
///
/// let found: Outcome<u32> = Outcome::success(7);
/// assert_eq!(found.value(), Some(&7));
///
/// let missing: Outcome<u32> = Outcome::failure("not found");
/// assert_eq!(missing.message(), Some("not found"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The operation completed with a value
    Success(Option<T>),

    /// The operation completed but reported a semantic error
    Failure(String),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Self::Success(Some(value))
    }

    /// Success without a value.
    pub fn empty() -> Self {
        Self::Success(None)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The carried value, if this is a success with data.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => value.as_ref(),
            Self::Failure(_) => None,
        }
    }

    /// The failure message, if this is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(value.map(f)),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}

/// Raised when awaiting the pending operation fails before it could
/// produce an [`Outcome`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
}

/// Conversion from whatever a pending operation resolves to.
///
/// An `Err` is a transport exception, distinct from a failure outcome;
/// both end up as an error transition, only the message source differs.
pub trait IntoOutcome<T> {
    fn into_outcome(self) -> Result<Outcome<T>, FetchError>;
}

impl<T> IntoOutcome<T> for Outcome<T> {
    fn into_outcome(self) -> Result<Outcome<T>, FetchError> {
        Ok(self)
    }
}

impl<T, E: Display> IntoOutcome<T> for Result<Outcome<T>, E> {
    fn into_outcome(self) -> Result<Outcome<T>, FetchError> {
        self.map_err(|err| FetchError::Transport(err.to_string()))
    }
}
