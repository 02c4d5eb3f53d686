// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Segment classification.
//!
//! A segment is a declared type in a layout. It is either a *range*, which
//! occupies space and produces something (a view, an owned array, a copy), or
//! an *offset*, which only occupies space. The distinction is a closed enum
//! attached to each type through [`Segment::DESC`]; there are no run-time
//! type tags.
//!
//! | Type                  | Kind   | Length |
//! |-----------------------|--------|--------|
//! | `[T; M]`              | Range  | `M`    |
//! | `&[T; M]`             | Range  | `M`    |
//! | `&mut [T; M]`         | Range  | `M`    |
//! | `FieldView<T, M>`     | Range  | `M`    |
//! | `FieldViewMut<T, M>`  | Range  | `M`    |
//! | `&FieldViewMut<T, M>` | Range  | `M`    |
//! | `Skip<M>`             | Offset | `M`    |
//!
//! Every range type splits, views and extracts exactly like `[T; M]`.
//! A type without a `Segment` impl cannot appear in a layout: the trait bound
//! fails and the program does not build.

use serde::Serialize;

/// Whether a segment contributes output or only reserves space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Occupies space and contributes a typed, sized output.
    Range,
    /// Occupies space only.
    Offset,
}

/// Build-time descriptor of one segment: its kind and its length in elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SegmentDesc {
    pub kind: SegmentKind,
    pub len: usize,
}

impl SegmentDesc {
    /// Placeholder used to fill unused slots of fixed-capacity lists.
    pub const EMPTY: Self = Self::offset(0);

    pub const fn range(len: usize) -> Self {
        Self {
            kind: SegmentKind::Range,
            len,
        }
    }

    pub const fn offset(len: usize) -> Self {
        Self {
            kind: SegmentKind::Offset,
            len,
        }
    }

    pub const fn is_range(self) -> bool {
        matches!(self.kind, SegmentKind::Range)
    }

    pub const fn is_offset(self) -> bool {
        matches!(self.kind, SegmentKind::Offset)
    }
}

/// A type that may appear in a segment list.
pub trait Segment {
    /// Kind and length, fixed at build time.
    const DESC: SegmentDesc;
}

/// Offset segment: reserves `M` elements and produces nothing.
///
/// `Skip` is a zero-sized marker. It carries no element type, so it fits any
/// buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Skip<const M: usize>;

impl<const M: usize> Segment for Skip<M> {
    const DESC: SegmentDesc = SegmentDesc::offset(M);
}

impl<T, const M: usize> Segment for [T; M] {
    const DESC: SegmentDesc = SegmentDesc::range(M);
}

impl<T, const M: usize> Segment for &[T; M] {
    const DESC: SegmentDesc = SegmentDesc::range(M);
}

impl<T, const M: usize> Segment for &mut [T; M] {
    const DESC: SegmentDesc = SegmentDesc::range(M);
}
