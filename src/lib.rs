// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build-time-verified buffer layouts and composition.
//!
//! A layout is a tuple of segment types describing how one fixed-size buffer
//! splits into typed fields: `[T; M]` for a field of `M` elements, `Skip<M>`
//! for `M` elements to step over. The same tuple, read the other way, says
//! how several buffers join into one. Every offset and size is planned in an
//! associated constant, so a layout that overflows or does not fit its
//! buffer fails the build; at run time only the element copies remain.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   size.rs   │────▶│  layout.rs   │────▶│  factory.rs │────▶│  compose/   │
//! │ (checked_sum│     │ (plan,       │     │ (split,     │     │ (view_as,   │
//! │  try_sum)   │     │  Layout)     │     │  extract)   │     │  join, ...) │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!        │                   ▲                    │                   │
//!        │            ┌──────────────┐            ▼                   ▼
//!        │            │  segment.rs  │     ┌──────────────────────────────────┐
//!        │            │ (Range/Offset│     │ view.rs (FieldView, FieldViewMut)│
//!        │            │  Skip)       │     │ tuple.rs (Prepend, Finish)       │
//!        │            └──────────────┘     └──────────────────────────────────┘
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                 verify/contracts.rs                 │
//! │   (debug-build checks of every planned table)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! | Module            | Role                                              |
//! |-------------------|---------------------------------------------------|
//! | `size`            | Overflow-checked sums, fatal at build time        |
//! | `segment`         | Range vs Offset classification of segment types   |
//! | `layout`          | Offset tables, planned in associated constants    |
//! | `view`            | Shared and mutable field views                    |
//! | `factory`         | Splitting a buffer into one item per range        |
//! | `compose`         | The composition operations                        |
//! | `random`          | Counter-based generator built on chunked views    |
//! | `fs`              | Whole-file reads and writes with typed errors     |
//!
//! # Usage
//!
//! ```
//! use rose::{join, Buffer, FieldView, Skip};
//!
//! let buf = [1u8, 2, 3, 4, 5, 6];
//! let (head, tail) = buf.view_as::<([u8; 2], [u8; 4])>();
//! assert_eq!(head, [1, 2]);
//! assert_eq!(tail, [3, 4, 5, 6]);
//!
//! let joined: [u8; 6] = join((&[1u8, 2, 3], &[4u8, 5, 6]));
//! let [a, b]: [FieldView<'_, u8, 3>; 2] = joined.view_by_chunks();
//! assert_eq!((a, b), (FieldView::new(&[1, 2, 3]), FieldView::new(&[4, 5, 6])));
//!
//! let bytes = *b"abcde";
//! let cde: FieldView<'_, u8, 3> = bytes.view_as::<(Skip<2>, [u8; 3])>();
//! assert_eq!(cde, *b"cde");
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod factory;
pub mod fs;
pub mod layout;
pub mod random;
pub mod segment;
pub mod size;
pub mod tuple;
pub mod verify;
pub mod view;

// Re-exports for public API
pub use compose::{
    copy_into, extract, fill_from, join, view_as, view_as_mut, view_by_chunks, view_by_chunks_mut,
    Buffer, Source, Sources, Target, Targets,
};
pub use error::{FsError, LayoutError};
pub use factory::{Field, Segments};
pub use layout::{
    plan, plan_exact, try_plan, try_plan_exact, Described, Entry, Layout, LayoutTable,
    SegmentList,
};
pub use random::Generator;
pub use segment::{Segment, SegmentDesc, SegmentKind, Skip};
pub use size::{checked_sum, try_sum};
pub use tuple::{Finish, Finished, Prepend, Skipped};
pub use view::{assign_within, FieldView, FieldViewMut};
