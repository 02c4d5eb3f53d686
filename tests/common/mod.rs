//! Shared test utilities and fixtures.

#![allow(dead_code)]

use rose::{LayoutTable, SegmentDesc, SegmentList};

// ============================================================================
// BUFFERS
// ============================================================================

/// `[0, 1, 2, ..., N - 1]`, wrapping at 256.
pub fn sequential<const N: usize>() -> [u8; N] {
    std::array::from_fn(|i| i as u8)
}

/// Concatenate parts into one vector.
pub fn concat<T: Clone>(parts: &[&[T]]) -> Vec<T> {
    parts.iter().flat_map(|part| part.iter().cloned()).collect()
}

// ============================================================================
// LAYOUT ASSERTIONS
// ============================================================================

/// Build a run-time segment list, panicking on too many segments.
pub fn list(descs: &[SegmentDesc]) -> SegmentList {
    SegmentList::try_new(descs).expect("too many segments")
}

/// Assert every structural invariant of a planned table.
pub fn assert_table_well_formed(descs: &[SegmentDesc], table: &LayoutTable) {
    let ranges: Vec<usize> = descs
        .iter()
        .filter(|desc| desc.is_range())
        .map(|desc| desc.len)
        .collect();
    assert_eq!(
        table.len(),
        ranges.len(),
        "one entry per range segment expected"
    );

    let mut previous_end = 0;
    for (entry, size) in table.iter().zip(&ranges) {
        assert_eq!(entry.size, *size, "entry size must match its segment");
        assert!(
            entry.offset >= previous_end,
            "entry at {} overlaps previous end {}",
            entry.offset,
            previous_end
        );
        previous_end = entry.end();
    }

    let total: usize = descs.iter().map(|desc| desc.len).sum();
    assert_eq!(table.consumed(), total, "consumed must include offsets");
    assert!(table.consumed() <= table.source_len());
}
