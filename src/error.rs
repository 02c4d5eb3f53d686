// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The layout engine has no run-time failure modes of its own: every check
//! happens while the crate using it is compiled. `LayoutError` exists for the
//! run-time mirror of the planner (used by the CLI and the fuzzers), where
//! segment lists arrive as data instead of as types.
//!
//! `FsError` is the explicit result classification of the filesystem helper.

use std::io;
use std::path::{Path, PathBuf};

/// Why a segment list could not be planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A running total wrapped around `usize::MAX`.
    #[error("segment sizes overflow usize")]
    SizeOverflow,

    /// The segments need more elements than the source holds.
    #[error("segments consume {consumed} elements but the source holds {available}")]
    ExceedsSource { consumed: usize, available: usize },

    /// The segments must cover the target exactly (join) and do not.
    #[error("segments consume {consumed} elements but the target holds exactly {expected}")]
    LengthMismatch { consumed: usize, expected: usize },

    /// An offset segment appeared where only ranges are allowed (join).
    #[error("offset segment at position {position} where only ranges are allowed")]
    UnexpectedOffset { position: usize },

    /// More segments than `config::MAX_SEGMENTS`.
    #[error("layout holds at most {max} segments, got {requested}")]
    TooManySegments { requested: usize, max: usize },
}

/// Result classification for filesystem operations.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// The path does not exist.
    #[error("no such file: {}", path.display())]
    NoSuchFile { path: PathBuf },

    /// Any other I/O failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is longer than the destination (or the global limit) allows.
    #[error("file too large: {} holds {len} bytes, limit is {limit}", path.display())]
    FileTooLarge { path: PathBuf, len: u64, limit: u64 },

    /// The buffer for the file contents could not be allocated.
    #[error("insufficient memory to read {len} bytes from {}", path.display())]
    OutOfMemory { path: PathBuf, len: u64 },
}

impl FsError {
    /// Classify an I/O error raised while working on `path`.
    pub fn from_io(source: io::Error, path: &Path) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NoSuchFile {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Create a file-too-large error.
    pub fn too_large(path: &Path, len: u64, limit: u64) -> Self {
        Self::FileTooLarge {
            path: path.to_path_buf(),
            len,
            limit,
        }
    }

    /// Create an out-of-memory error.
    pub fn out_of_memory(path: &Path, len: u64) -> Self {
        Self::OutOfMemory {
            path: path.to_path_buf(),
            len,
        }
    }

    /// The path the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::NoSuchFile { path }
            | Self::Io { path, .. }
            | Self::FileTooLarge { path, .. }
            | Self::OutOfMemory { path, .. } => path,
        }
    }
}
