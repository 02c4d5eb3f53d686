// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Composition operations.
//!
//! | Operation            | From          | To                               |
//! |----------------------|---------------|----------------------------------|
//! | `view_by_chunks`     | `&[T; N]`     | `[FieldView<T, K>; N / K]`       |
//! | `view_as`            | `&[T; N]`     | one `FieldView` per range        |
//! | `copy_into`          | `&[T; N]`     | caller-supplied targets          |
//! | `fill_from`          | sources       | caller-supplied `&mut [T; N]`    |
//! | `extract`            | `&[T; N]`     | one owned `[T; M]` per range     |
//! | `join`               | sources       | new `[T; N]`                     |
//!
//! Each operation reads its plan from an associated constant, so a layout
//! that does not fit is rejected when the crate is built (`cargo build`, not
//! only `cargo check`, since the constants are evaluated per
//! instantiation). At run time only the element copies remain.
//!
//! Operations that name their layout explicitly are easiest to call as
//! methods of [`Buffer`], which fixes the element type and length from the
//! receiver:
//!
//! ```
//! use rose::{Buffer, FieldView, Skip};
//!
//! let frame = *b"RS\x01\x02payload!";
//! let (magic, version) = frame.view_as::<([u8; 2], Skip<1>, [u8; 1])>();
//! assert_eq!(magic, *b"RS");
//! assert_eq!(version, [2]);
//!
//! let words: [FieldView<'_, u8, 4>; 3] = frame.view_by_chunks::<4, 3>();
//! assert_eq!(words[2], *b"oad!");
//! ```
//!
//! Layouts that do not fit are build errors:
//!
//! ```compile_fail
//! use rose::Buffer;
//! let buf = [0u8; 4];
//! let _ = buf.view_as::<([u8; 3], [u8; 2])>();
//! ```
//!
//! ```compile_fail
//! use rose::{Buffer, FieldView};
//! let buf = [0u8; 6];
//! let _: [FieldView<'_, u8, 0>; 0] = buf.view_by_chunks::<0, 0>();
//! ```
//!
//! ```compile_fail
//! use rose::{Buffer, FieldView};
//! let buf = [0u8; 6];
//! let _: [FieldView<'_, u8, 4>; 1] = buf.view_by_chunks::<4, 1>();
//! ```
//!
//! Element types must agree across one operation:
//!
//! ```compile_fail
//! let joined: [u8; 3] = rose::join(([1u8], [2u16, 3]));
//! ```
//!
//! ```compile_fail
//! use rose::Buffer;
//! struct NotASegment;
//! let buf = [0u8; 4];
//! let _ = buf.view_as::<(NotASegment,)>();
//! ```

mod copy;
mod owned;
mod view;

pub use copy::{copy_into, fill_from, Source, Sources, Target, Targets};
pub use owned::{extract, join};
pub use view::{view_as, view_as_mut, view_by_chunks, view_by_chunks_mut};

use crate::factory::Segments;
use crate::tuple::Finished;
use crate::view::{FieldView, FieldViewMut};

/// A fixed-length buffer the composition operations apply to.
///
/// Implemented for every `[T; N]`.
pub trait Buffer<T, const N: usize> {
    /// See [`view_as`].
    fn view_as<'a, L>(&'a self) -> Finished<L::Views>
    where
        T: 'a,
        L: Segments<'a, T>;

    /// See [`view_as_mut`].
    fn view_as_mut<'a, L>(&'a mut self) -> Finished<L::ViewsMut>
    where
        T: 'a,
        L: Segments<'a, T>;

    /// See [`extract`].
    fn extract<'a, L>(&'a self) -> Finished<L::Owned>
    where
        T: Clone + 'a,
        L: Segments<'a, T>;

    /// See [`view_by_chunks`].
    fn view_by_chunks<'a, const K: usize, const C: usize>(&'a self) -> [FieldView<'a, T, K>; C]
    where
        T: 'a;

    /// See [`view_by_chunks_mut`].
    fn view_by_chunks_mut<'a, const K: usize, const C: usize>(
        &'a mut self,
    ) -> [FieldViewMut<'a, T, K>; C]
    where
        T: 'a;

    /// See [`copy_into`].
    fn copy_into<G: Targets<T>>(&self, targets: G);

    /// See [`fill_from`].
    fn fill_from<G: Sources<T>>(&mut self, sources: G) -> &mut Self;

    /// See [`assign_within`](crate::view::assign_within).
    fn assign_within<const SRC: usize, const DST: usize, const LEN: usize>(&mut self)
    where
        T: Copy;
}

impl<T, const N: usize> Buffer<T, N> for [T; N] {
    #[inline]
    fn view_as<'a, L>(&'a self) -> Finished<L::Views>
    where
        T: 'a,
        L: Segments<'a, T>,
    {
        view_as::<L, T, N>(self)
    }

    #[inline]
    fn view_as_mut<'a, L>(&'a mut self) -> Finished<L::ViewsMut>
    where
        T: 'a,
        L: Segments<'a, T>,
    {
        view_as_mut::<L, T, N>(self)
    }

    #[inline]
    fn extract<'a, L>(&'a self) -> Finished<L::Owned>
    where
        T: Clone + 'a,
        L: Segments<'a, T>,
    {
        extract::<L, T, N>(self)
    }

    #[inline]
    fn view_by_chunks<'a, const K: usize, const C: usize>(&'a self) -> [FieldView<'a, T, K>; C]
    where
        T: 'a,
    {
        view_by_chunks::<K, C, T, N>(self)
    }

    #[inline]
    fn view_by_chunks_mut<'a, const K: usize, const C: usize>(
        &'a mut self,
    ) -> [FieldViewMut<'a, T, K>; C]
    where
        T: 'a,
    {
        view_by_chunks_mut::<K, C, T, N>(self)
    }

    #[inline]
    fn copy_into<G: Targets<T>>(&self, targets: G) {
        copy_into(self, targets);
    }

    #[inline]
    fn fill_from<G: Sources<T>>(&mut self, sources: G) -> &mut Self {
        fill_from(self, sources)
    }

    #[inline]
    fn assign_within<const SRC: usize, const DST: usize, const LEN: usize>(&mut self)
    where
        T: Copy,
    {
        crate::view::assign_within::<SRC, DST, LEN, T, N>(self);
    }
}
