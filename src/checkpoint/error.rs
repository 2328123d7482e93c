//! Checkpoint error types.

use std::fmt;
use thiserror::Error;

/// Wire format a checkpoint was being written to or read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Binary,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Json => "json",
            Format::Binary => "binary",
        })
    }
}

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("failed to encode {format} checkpoint: {reason}")]
    Encode { format: Format, reason: String },

    #[error("failed to decode {format} checkpoint: {reason}")]
    Decode { format: Format, reason: String },

    /// Written by a newer release than this one.
    #[error("checkpoint version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

