//! Checkpoint and restore for state snapshots.
//!
//! The engine never persists anything itself. Hosts that want a listing or
//! a loaded record to survive a restart capture the snapshot they hold
//! into a checkpoint and restore it later.

use crate::core::Snapshot;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, Format};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a state snapshot.
///
/// # Example
///
/// ```rust
/// use fetchstate::checkpoint::Checkpoint;
/// use fetchstate::core::{PaginationState, PagingStatus, Query, Snapshot};
///
/// let state: PaginationState<u32> = PaginationState::new(Query::at(2, 10).unwrap())
///     .with_list(vec![1, 2, 3])
///     .with_status(PagingStatus::Paging);
///
/// let json = Checkpoint::capture(state).to_json().unwrap();
/// let restored: PaginationState<u32> = Checkpoint::from_json(&json).unwrap().restore();
///
/// assert_eq!(restored.list(), &[1, 2, 3]);
/// assert_eq!(restored.status(), PagingStatus::Initial);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint<S> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// The captured snapshot
    pub state: S,
}

impl<S> Checkpoint<S>
where
    S: Snapshot + Serialize + DeserializeOwned,
{
    /// Capture a snapshot as it currently is.
    pub fn capture(state: S) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state,
        }
    }

    /// Take the snapshot back, settled to its resting status.
    ///
    /// A snapshot captured mid-fetch would otherwise come back busy, and a
    /// `Paging` status would make the continuation guard refuse every
    /// later page.
    pub fn restore(self) -> S {
        self.state.settle()
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::Encode {
            format: Format::Json,
            reason: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::Decode {
                format: Format::Json,
                reason: e.to_string(),
            })?;
        checkpoint.check_version()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode {
            format: Format::Binary,
            reason: e.to_string(),
        })
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode {
                format: Format::Binary,
                reason: e.to_string(),
            })?;
        checkpoint.check_version()
    }

    fn check_version(self) -> Result<Self, CheckpointError> {
        if self.version > CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FetchStatus, PaginationState, PagingStatus, Query, SingleState};

    fn listing() -> PaginationState<String> {
        PaginationState::new(Query::at(3, 2).unwrap())
            .with_list(vec!["a".to_string(), "b".to_string()])
            .with_reached_max(true)
    }

    #[test]
    fn json_roundtrip_keeps_fields() {
        let checkpoint = Checkpoint::capture(listing());

        let json = checkpoint.to_json().unwrap();
        let restored = Checkpoint::<PaginationState<String>>::from_json(&json).unwrap();

        assert_eq!(restored.id, checkpoint.id);
        assert_eq!(restored.state, listing());
    }

    #[test]
    fn binary_roundtrip_keeps_fields() {
        let state = SingleState::loaded(7u64).with_error("stale".to_string());
        let checkpoint = Checkpoint::capture(state.clone());

        let bytes = checkpoint.to_binary().unwrap();
        let restored = Checkpoint::<SingleState<u64>>::from_binary(&bytes).unwrap();

        assert_eq!(restored.state, state);
    }

    #[test]
    fn restore_settles_busy_snapshots() {
        let busy = listing().with_status(PagingStatus::Paging);

        let restored = Checkpoint::capture(busy).restore();

        assert_eq!(restored.status(), PagingStatus::Initial);
        assert!(restored.reached_max());
        assert_eq!(restored.query().page(), 3);
    }

    #[test]
    fn newer_versions_are_rejected() {
        let mut checkpoint = Checkpoint::capture(SingleState::<u8>::new());
        checkpoint.version = CHECKPOINT_VERSION + 1;
        let json = checkpoint.to_json().unwrap();

        let result = Checkpoint::<SingleState<u8>>::from_json(&json);

        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn garbage_input_is_a_deserialization_error() {
        let result = Checkpoint::<SingleState<u8>>::from_json("not json");
        assert!(matches!(
            result,
            Err(CheckpointError::Decode { format: Format::Json, .. })
        ));

        let result = Checkpoint::<SingleState<u8>>::from_binary(&[1, 2]);
        assert!(matches!(
            result,
            Err(CheckpointError::Decode { format: Format::Binary, .. })
        ));
    }

    #[test]
    fn captured_ids_are_unique() {
        let first = Checkpoint::capture(SingleState::<u8>::new());
        let second = Checkpoint::capture(SingleState::<u8>::new());

        assert_ne!(first.id, second.id);
        assert_eq!(first.state.status(), FetchStatus::Initial);
    }
}
