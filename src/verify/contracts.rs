// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts mirroring the build-time layout invariants.
//!
//! The planner already fails the build when a layout is wrong. These checks
//! re-derive the same facts from the planned table in debug builds, so a bug
//! in the planner itself (rather than in a caller's layout) trips during
//! tests instead of producing a silently wrong view.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                  |
//! |------------------------------|--------------------------------------------|
//! | `check_table_well_formed`    | entries ascend, never overlap, fit source  |
//! | `check_table_matches_list`   | table is exactly the planner walk of list  |
//! | `check_exact_cover`          | joined parts cover the target exactly      |
//! | `check_chunking`             | chunks tile the buffer with no remainder   |
//!
//! All are zero-cost in release builds.

use crate::layout::{LayoutTable, SegmentList};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // INVARIANT: the planner's tables can hold one entry per segment.
    assert!(crate::config::MAX_SEGMENTS > 0);
    // INVARIANT: an empty list plans to an empty table over any source.
    let table = crate::layout::plan(&SegmentList::EMPTY, 0);
    assert!(table.is_empty());
    assert!(table.consumed() == 0);
};

// ============================================================================
// TABLE CONTRACTS
// ============================================================================

/// Check that entries ascend, do not overlap, and stay within the source.
///
/// # Panics (debug builds only)
/// Panics if an entry starts before the previous one ends, or if the table
/// claims to consume more than the source holds.
#[inline]
pub fn check_table_well_formed(table: &LayoutTable) {
    let mut previous_end = 0;
    for (i, entry) in table.entries().iter().enumerate() {
        debug_assert!(
            entry.offset >= previous_end,
            "Contract violation: entry {} at offset {} overlaps previous end {}",
            i,
            entry.offset,
            previous_end
        );
        previous_end = entry.end();
    }
    debug_assert!(
        previous_end <= table.consumed(),
        "Contract violation: last entry ends at {} past consumed {}",
        previous_end,
        table.consumed()
    );
    debug_assert!(
        table.consumed() <= table.source_len(),
        "Contract violation: consumed {} exceeds source length {}",
        table.consumed(),
        table.source_len()
    );
}

/// Check that `table` is what walking `list` produces.
///
/// # Panics (debug builds only)
/// Panics if the number of entries differs from the number of ranges, or an
/// entry's offset is not the running total of the segments before it.
#[inline]
pub fn check_table_matches_list(list: &SegmentList, table: &LayoutTable) {
    debug_assert_eq!(
        list.range_count(),
        table.len(),
        "Contract violation: {} range segments but {} table entries",
        list.range_count(),
        table.len()
    );

    let mut offset = 0;
    let mut index = 0;
    for desc in list.as_slice() {
        if desc.is_range() && index < table.len() {
            let entry = table.entry(index);
            debug_assert!(
                entry.offset == offset && entry.size == desc.len,
                "Contract violation: entry {} is ({}, {}), walk says ({}, {})",
                index,
                entry.offset,
                entry.size,
                offset,
                desc.len
            );
            index += 1;
        }
        offset += desc.len;
    }
    debug_assert_eq!(
        offset,
        table.consumed(),
        "Contract violation: walk consumed {} but table records {}",
        offset,
        table.consumed()
    );
}

/// Check that a joined table covers its target with no gaps.
///
/// # Panics (debug builds only)
/// Panics if the entries are not back to back from zero to `target_len`.
#[inline]
pub fn check_exact_cover(table: &LayoutTable, target_len: usize) {
    let mut expected = 0;
    for entry in table.iter() {
        debug_assert_eq!(
            entry.offset, expected,
            "Contract violation: gap before offset {}",
            entry.offset
        );
        expected = entry.end();
    }
    debug_assert_eq!(
        expected, target_len,
        "Contract violation: parts cover {} of {} elements",
        expected, target_len
    );
}

/// Check that `count` chunks of `size` tile `len` elements exactly.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_chunking(size: usize, count: usize, len: usize) {
    debug_assert!(size > 0, "Contract violation: chunk size is zero");
    debug_assert_eq!(
        size.checked_mul(count),
        Some(len),
        "Contract violation: {} chunks of {} do not tile {}",
        count,
        size,
        len
    );
}
