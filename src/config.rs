// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crate-wide limits and defaults.

/// Maximum number of segments in one layout.
///
/// Segment lists are tuples, and the composition traits are implemented for
/// tuples up to this arity. The planner's tables are sized to match.
pub const MAX_SEGMENTS: usize = 8;

/// Largest file the filesystem helper will read into memory (256 MB).
pub const MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Log filter used by the CLI when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used by the CLI with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "rose=debug";
