// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The layout planner.
//!
//! A segment list and a source length go in; a table of `(offset, size)`
//! entries comes out, one per range segment, in declaration order. Offset
//! segments get no entry but still advance the running offset:
//!
//! ```text
//! segments:   Skip<2>   [u8; 3]   Skip<1>   [u8; 2]
//! offsets:    0..2      2..5      5..6      6..8
//! table:                (2, 3)              (6, 2)
//! ```
//!
//! [`Layout::TABLE`] runs the planner inside an associated constant. Every
//! composition operation reads that constant, so a list that overflows or
//! does not fit its buffer is a compile error at the call site. The same
//! planner is available at run time through [`try_plan`] for tooling that
//! receives segment lists as data.

use std::fmt;
use std::marker::PhantomData;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::config::MAX_SEGMENTS;
use crate::error::LayoutError;
use crate::segment::{Segment, SegmentDesc};
use crate::size::try_sum;

// ============================================================================
// SEGMENT LISTS
// ============================================================================

/// Fixed-capacity, build-time list of segment descriptors.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SegmentList {
    descs: [SegmentDesc; MAX_SEGMENTS],
    len: usize,
}

impl SegmentList {
    pub const EMPTY: Self = Self {
        descs: [SegmentDesc::EMPTY; MAX_SEGMENTS],
        len: 0,
    };

    /// Build a list, rejecting more than `MAX_SEGMENTS` descriptors.
    pub const fn try_new(descs: &[SegmentDesc]) -> Result<Self, LayoutError> {
        if descs.len() > MAX_SEGMENTS {
            return Err(LayoutError::TooManySegments {
                requested: descs.len(),
                max: MAX_SEGMENTS,
            });
        }
        let mut list = Self::EMPTY;
        while list.len < descs.len() {
            list.descs[list.len] = descs[list.len];
            list.len += 1;
        }
        Ok(list)
    }

    /// Build a list; too many descriptors fails the build.
    pub const fn new(descs: &[SegmentDesc]) -> Self {
        match Self::try_new(descs) {
            Ok(list) => list,
            Err(_) => panic!("too many segments in one layout"),
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn as_slice(&self) -> &[SegmentDesc] {
        self.descs.split_at(self.len).0
    }

    /// Number of range segments (the size of the planned table).
    pub const fn range_count(&self) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < self.len {
            if self.descs[i].is_range() {
                count += 1;
            }
            i += 1;
        }
        count
    }
}

impl fmt::Debug for SegmentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// ============================================================================
// LAYOUT TABLES
// ============================================================================

/// One planned range: where it starts and how many elements it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    pub offset: usize,
    pub size: usize,
}

impl Entry {
    const EMPTY: Self = Self { offset: 0, size: 0 };

    /// One past the last element. Cannot overflow for a planned entry.
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }
}

/// The planner's output.
///
/// Entries are contiguous in declaration order except where offset segments
/// leave gaps. `consumed` is the total of every segment, ranges and offsets.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LayoutTable {
    entries: [Entry; MAX_SEGMENTS],
    len: usize,
    consumed: usize,
    source_len: usize,
}

impl LayoutTable {
    pub const fn entries(&self) -> &[Entry] {
        self.entries.split_at(self.len).0
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The entry for the `index`-th range segment.
    pub const fn entry(&self, index: usize) -> Entry {
        assert!(index < self.len, "layout table index out of range");
        self.entries[index]
    }

    /// Elements covered by all segments together.
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Length of the buffer the table was planned against.
    pub const fn source_len(&self) -> usize {
        self.source_len
    }

    /// Trailing elements no segment reaches.
    pub const fn remaining(&self) -> usize {
        self.source_len - self.consumed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries().iter()
    }
}

impl fmt::Debug for LayoutTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutTable")
            .field("entries", &self.entries())
            .field("consumed", &self.consumed)
            .field("source_len", &self.source_len)
            .finish()
    }
}

impl Serialize for LayoutTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LayoutTable", 3)?;
        state.serialize_field("entries", self.entries())?;
        state.serialize_field("consumed", &self.consumed)?;
        state.serialize_field("source_len", &self.source_len)?;
        state.end()
    }
}

// ============================================================================
// PLANNER
// ============================================================================

/// Plan `list` against a source of `source_len` elements.
///
/// Running offset from zero; each range records `(offset, len)`; every
/// segment advances the offset; the final offset must not exceed the source.
pub const fn try_plan(list: &SegmentList, source_len: usize) -> Result<LayoutTable, LayoutError> {
    let mut table = LayoutTable {
        entries: [Entry::EMPTY; MAX_SEGMENTS],
        len: 0,
        consumed: 0,
        source_len,
    };
    let mut offset = 0;
    let mut i = 0;
    while i < list.len {
        let desc = list.descs[i];
        if desc.is_range() {
            table.entries[table.len] = Entry {
                offset,
                size: desc.len,
            };
            table.len += 1;
        }
        // INVARIANT: offset never decreases, so entries ascend and never overlap.
        offset = match try_sum(offset, &[desc.len]) {
            Ok(next) => next,
            Err(err) => return Err(err),
        };
        i += 1;
    }
    // INVARIANT: every entry ends at or before `consumed <= source_len`.
    if offset > source_len {
        return Err(LayoutError::ExceedsSource {
            consumed: offset,
            available: source_len,
        });
    }
    table.consumed = offset;
    Ok(table)
}

/// Plan a list that must cover the target exactly with ranges only.
pub const fn try_plan_exact(
    list: &SegmentList,
    target_len: usize,
) -> Result<LayoutTable, LayoutError> {
    let mut i = 0;
    while i < list.len {
        if list.descs[i].is_offset() {
            return Err(LayoutError::UnexpectedOffset { position: i });
        }
        i += 1;
    }
    let table = match try_plan(list, usize::MAX) {
        Ok(table) => table,
        Err(err) => return Err(err),
    };
    if table.consumed != target_len {
        return Err(LayoutError::LengthMismatch {
            consumed: table.consumed,
            expected: target_len,
        });
    }
    Ok(LayoutTable {
        source_len: target_len,
        ..table
    })
}

/// [`try_plan`] for constant evaluation: any error fails the build.
pub const fn plan(list: &SegmentList, source_len: usize) -> LayoutTable {
    match try_plan(list, source_len) {
        Ok(table) => table,
        Err(LayoutError::SizeOverflow) => panic!("segment sizes overflow usize"),
        Err(LayoutError::ExceedsSource { .. }) => {
            panic!("segments do not fit in the source buffer")
        }
        Err(_) => panic!("segment list cannot be planned"),
    }
}

/// [`try_plan_exact`] for constant evaluation: any error fails the build.
pub const fn plan_exact(list: &SegmentList, target_len: usize) -> LayoutTable {
    match try_plan_exact(list, target_len) {
        Ok(table) => table,
        Err(LayoutError::SizeOverflow) => panic!("segment sizes overflow usize"),
        Err(LayoutError::UnexpectedOffset { .. }) => {
            panic!("only range segments can be joined")
        }
        Err(LayoutError::LengthMismatch { .. }) => {
            panic!("joined length does not equal the sum of the parts")
        }
        Err(_) => panic!("segment list cannot be planned"),
    }
}

// ============================================================================
// TYPE-LEVEL LISTS
// ============================================================================

/// A tuple of segment types, described at build time.
pub trait Described {
    const SEGMENTS: SegmentList;
}

macro_rules! impl_described {
    ($($S:ident),*) => {
        impl<$($S: Segment),*> Described for ($($S,)*) {
            const SEGMENTS: SegmentList = SegmentList::new(&[$($S::DESC),*]);
        }
    };
}

impl_described!();
impl_described!(S0);
impl_described!(S0, S1);
impl_described!(S0, S1, S2);
impl_described!(S0, S1, S2, S3);
impl_described!(S0, S1, S2, S3, S4);
impl_described!(S0, S1, S2, S3, S4, S5);
impl_described!(S0, S1, S2, S3, S4, S5, S6);
impl_described!(S0, S1, S2, S3, S4, S5, S6, S7);

/// The layout of segment list `L` over a buffer of `N` elements.
///
/// Never constructed; it only carries the associated constants.
///
/// ```
/// use rose::{Layout, Skip};
///
/// let table = Layout::<(Skip<2>, [u8; 3]), 5>::TABLE;
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.entry(0).offset, 2);
/// assert_eq!(table.entry(0).size, 3);
/// ```
pub struct Layout<L, const N: usize>(PhantomData<fn() -> L>);

impl<L: Described, const N: usize> Layout<L, N> {
    /// The planned table; evaluating it fails the build when `L` does not fit.
    pub const TABLE: LayoutTable = plan(&L::SEGMENTS, N);

    /// The table for a list that must cover all `N` elements with ranges.
    pub const EXACT: LayoutTable = plan_exact(&L::SEGMENTS, N);
}
