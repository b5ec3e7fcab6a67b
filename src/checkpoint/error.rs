//! Snapshot error types.

use std::fmt;
use thiserror::Error;

/// Encoding a snapshot can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Binary,
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SnapshotFormat::Json => "JSON",
            SnapshotFormat::Binary => "binary",
        })
    }
}

/// Kind of record whose id collided in a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Bicycle,
    Reservation,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Bicycle => "bicycle",
            RecordKind::Reservation => "reservation",
        })
    }
}

/// Errors that can occur while encoding, decoding or restoring a snapshot
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Could not write {format} snapshot: {reason}")]
    Encode {
        format: SnapshotFormat,
        reason: String,
    },

    /// The bytes are not a snapshot at all, or a field failed to parse
    #[error("Could not read {format} snapshot: {reason}")]
    Decode {
        format: SnapshotFormat,
        reason: String,
    },

    #[error("Snapshot format version {found} is not readable by this build (expects {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Restoring would leave two records reachable under one id
    #[error("Snapshot lists {kind} '{id}' more than once")]
    DuplicateId { kind: RecordKind, id: String },
}

impl SnapshotError {
    pub(crate) fn encode(format: SnapshotFormat, reason: impl fmt::Display) -> Self {
        SnapshotError::Encode {
            format,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decode(format: SnapshotFormat, reason: impl fmt::Display) -> Self {
        SnapshotError::Decode {
            format,
            reason: reason.to_string(),
        }
    }
}
