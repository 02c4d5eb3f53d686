// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Viewing a buffer as fields or as equal chunks.

use crate::factory::Segments;
use crate::layout::Layout;
use crate::tuple::{Finish, Finished};
use crate::verify::contracts;
use crate::view::{fixed, fixed_mut, FieldView, FieldViewMut};

/// Build-time check that `C` chunks of `K` elements tile `N` exactly.
struct Chunking<const K: usize, const C: usize, const N: usize>;

impl<const K: usize, const C: usize, const N: usize> Chunking<K, C, N> {
    // INVARIANT: chunks tile the buffer, so indexing `i * K..(i + 1) * K`
    // for `i < C` stays in bounds.
    const OK: () = {
        assert!(K > 0, "chunk size must be greater than zero");
        assert!(N % K == 0, "chunk size must divide the buffer length");
        assert!(C == N / K, "chunk count must equal buffer length / chunk size");
    };
}

/// View `buf` as `C` consecutive, non-overlapping chunks of `K` elements.
///
/// A zero `K`, a `K` that does not divide `N`, or a `C` other than `N / K`
/// fails the build.
#[inline]
pub fn view_by_chunks<'a, const K: usize, const C: usize, T: 'a, const N: usize>(
    buf: &'a [T; N],
) -> [FieldView<'a, T, K>; C] {
    let () = Chunking::<K, C, N>::OK;
    contracts::check_chunking(K, C, N);
    std::array::from_fn(|i| FieldView::new(fixed(&buf[i * K..(i + 1) * K])))
}

/// Mutable counterpart of [`view_by_chunks`].
#[inline]
pub fn view_by_chunks_mut<'a, const K: usize, const C: usize, T: 'a, const N: usize>(
    buf: &'a mut [T; N],
) -> [FieldViewMut<'a, T, K>; C] {
    let () = Chunking::<K, C, N>::OK;
    contracts::check_chunking(K, C, N);
    let mut chunks = buf.chunks_exact_mut(K);
    std::array::from_fn(|_| match chunks.next() {
        Some(chunk) => FieldViewMut::new(fixed_mut(chunk)),
        None => unreachable!("{} chunks of {} do not fit {}", C, K, N),
    })
}

/// View `buf` through the segment list `L`.
///
/// One [`FieldView`] per range segment, in declaration order; offsets produce
/// nothing. A list with a single range returns that view on its own.
#[inline]
pub fn view_as<'a, L, T: 'a, const N: usize>(buf: &'a [T; N]) -> Finished<L::Views>
where
    L: Segments<'a, T>,
{
    let table = Layout::<L, N>::TABLE;
    contracts::check_table_well_formed(&table);
    contracts::check_table_matches_list(&L::SEGMENTS, &table);
    L::split(&buf[..table.consumed()]).finish()
}

/// Mutable counterpart of [`view_as`]. The views are disjoint, so all of
/// them can be written at once.
#[inline]
pub fn view_as_mut<'a, L, T: 'a, const N: usize>(buf: &'a mut [T; N]) -> Finished<L::ViewsMut>
where
    L: Segments<'a, T>,
{
    let table = Layout::<L, N>::TABLE;
    contracts::check_table_well_formed(&table);
    contracts::check_table_matches_list(&L::SEGMENTS, &table);
    L::split_mut(&mut buf[..table.consumed()]).finish()
}
