// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field views: non-owning, fixed-length windows into a buffer.
//!
//! Two types, not one with a mutability flag. A [`FieldView`] comes from a
//! shared buffer and can only be read; a [`FieldViewMut`] comes from an
//! exclusive buffer and can be written. Both deref to `[T; M]`, so a view can
//! be used anywhere a fixed-length array reference is expected, and a mutable
//! view narrows to a shared one with [`FieldViewMut::as_view`] or `From`.
//!
//! Assigning to a mutable view copies content; it never rebinds which region
//! the view refers to. Assigning a region to itself is a no-op.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr;

use crate::segment::{Segment, SegmentDesc};

/// Reinterpret a planned slice as the fixed-length array it was planned as.
#[inline]
pub(crate) fn fixed<T, const M: usize>(part: &[T]) -> &[T; M] {
    match part.try_into() {
        Ok(array) => array,
        Err(_) => unreachable!("planned segment of {} elements got {}", M, part.len()),
    }
}

/// Mutable counterpart of [`fixed`].
#[inline]
pub(crate) fn fixed_mut<T, const M: usize>(part: &mut [T]) -> &mut [T; M] {
    let len = part.len();
    match part.try_into() {
        Ok(array) => array,
        Err(_) => unreachable!("planned segment of {} elements got {}", M, len),
    }
}

// ============================================================================
// SHARED VIEW
// ============================================================================

/// Read-only view of `M` contiguous elements.
pub struct FieldView<'a, T, const M: usize> {
    inner: &'a [T; M],
}

impl<'a, T, const M: usize> FieldView<'a, T, M> {
    /// Number of elements in the view.
    pub const LEN: usize = M;

    pub const fn new(inner: &'a [T; M]) -> Self {
        Self { inner }
    }

    /// The underlying fixed-length reference, with the buffer's lifetime.
    pub const fn get(self) -> &'a [T; M] {
        self.inner
    }

    pub fn as_slice(self) -> &'a [T] {
        self.inner
    }

    /// Address of the first element; two views with the same address and
    /// length designate the same region.
    pub fn as_ptr(self) -> *const T {
        self.inner.as_ptr()
    }

    pub fn to_array(self) -> [T; M]
    where
        T: Clone,
    {
        self.inner.clone()
    }
}

impl<T, const M: usize> Clone for FieldView<'_, T, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const M: usize> Copy for FieldView<'_, T, M> {}

impl<T, const M: usize> Deref for FieldView<'_, T, M> {
    type Target = [T; M];

    fn deref(&self) -> &[T; M] {
        self.inner
    }
}

impl<T, const M: usize> AsRef<[T]> for FieldView<'_, T, M> {
    fn as_ref(&self) -> &[T] {
        self.inner
    }
}

impl<T, const M: usize> AsRef<[T; M]> for FieldView<'_, T, M> {
    fn as_ref(&self) -> &[T; M] {
        self.inner
    }
}

impl<'a, T, const M: usize> From<&'a [T; M]> for FieldView<'a, T, M> {
    fn from(inner: &'a [T; M]) -> Self {
        Self::new(inner)
    }
}

impl<'a, T, const M: usize> IntoIterator for FieldView<'a, T, M> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: fmt::Debug, const M: usize> fmt::Debug for FieldView<'_, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldView").field(self.inner).finish()
    }
}

impl<T: PartialEq, const M: usize> PartialEq for FieldView<'_, T, M> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq, const M: usize> Eq for FieldView<'_, T, M> {}

impl<T: PartialEq, const M: usize> PartialEq<[T; M]> for FieldView<'_, T, M> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.inner == other
    }
}

impl<T, const M: usize> Segment for FieldView<'_, T, M> {
    const DESC: SegmentDesc = SegmentDesc::range(M);
}

// ============================================================================
// MUTABLE VIEW
// ============================================================================

/// Writable view of `M` contiguous elements.
pub struct FieldViewMut<'a, T, const M: usize> {
    inner: &'a mut [T; M],
}

impl<'a, T, const M: usize> FieldViewMut<'a, T, M> {
    /// Number of elements in the view.
    pub const LEN: usize = M;

    pub fn new(inner: &'a mut [T; M]) -> Self {
        Self { inner }
    }

    /// Narrow to a read-only view for the duration of the borrow.
    pub fn as_view(&self) -> FieldView<'_, T, M> {
        FieldView::new(&*self.inner)
    }

    /// Narrow to a read-only view, keeping the buffer's lifetime.
    pub fn into_view(self) -> FieldView<'a, T, M> {
        FieldView::new(self.inner)
    }

    /// Give up the view and keep the plain reference.
    pub fn into_mut(self) -> &'a mut [T; M] {
        self.inner
    }

    /// Reborrow for a shorter lifetime, e.g. to pass as a copy target.
    pub fn reborrow(&mut self) -> FieldViewMut<'_, T, M> {
        FieldViewMut::new(&mut *self.inner)
    }

    pub fn as_ptr(&self) -> *const T {
        self.inner.as_ptr()
    }

    /// Copy `src` into the viewed region.
    ///
    /// When `src` is the viewed region itself (same first element), nothing
    /// is copied.
    pub fn assign(&mut self, src: &[T; M])
    where
        T: Clone,
    {
        if ptr::eq(self.inner.as_ptr(), src.as_ptr()) {
            return;
        }
        self.inner.clone_from_slice(src);
    }

    /// Copy another view's content into the viewed region.
    pub fn assign_view(&mut self, src: FieldView<'_, T, M>)
    where
        T: Clone,
    {
        self.assign(src.get());
    }
}

impl<T, const M: usize> Deref for FieldViewMut<'_, T, M> {
    type Target = [T; M];

    fn deref(&self) -> &[T; M] {
        &*self.inner
    }
}

impl<T, const M: usize> DerefMut for FieldViewMut<'_, T, M> {
    fn deref_mut(&mut self) -> &mut [T; M] {
        &mut *self.inner
    }
}

impl<T, const M: usize> AsRef<[T]> for FieldViewMut<'_, T, M> {
    fn as_ref(&self) -> &[T] {
        &self.inner[..]
    }
}

impl<T, const M: usize> AsMut<[T]> for FieldViewMut<'_, T, M> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.inner[..]
    }
}

impl<'a, T, const M: usize> From<&'a mut [T; M]> for FieldViewMut<'a, T, M> {
    fn from(inner: &'a mut [T; M]) -> Self {
        Self::new(inner)
    }
}

impl<'a, T, const M: usize> From<FieldViewMut<'a, T, M>> for FieldView<'a, T, M> {
    fn from(view: FieldViewMut<'a, T, M>) -> Self {
        view.into_view()
    }
}

impl<T: fmt::Debug, const M: usize> fmt::Debug for FieldViewMut<'_, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldViewMut").field(&*self.inner).finish()
    }
}

impl<T: PartialEq, const M: usize> PartialEq<[T; M]> for FieldViewMut<'_, T, M> {
    fn eq(&self, other: &[T; M]) -> bool {
        *self.inner == *other
    }
}

impl<T, const M: usize> Segment for FieldViewMut<'_, T, M> {
    const DESC: SegmentDesc = SegmentDesc::range(M);
}

impl<T, const M: usize> Segment for &FieldViewMut<'_, T, M> {
    const DESC: SegmentDesc = SegmentDesc::range(M);
}

impl<T, const M: usize> Segment for &mut FieldViewMut<'_, T, M> {
    const DESC: SegmentDesc = SegmentDesc::range(M);
}

// ============================================================================
// IN-BUFFER ASSIGNMENT
// ============================================================================

/// Build-time bounds for copying `LEN` elements from `SRC` to `DST` in a
/// buffer of `N`.
struct WithinBounds<const SRC: usize, const DST: usize, const LEN: usize, const N: usize>;

impl<const SRC: usize, const DST: usize, const LEN: usize, const N: usize>
    WithinBounds<SRC, DST, LEN, N>
{
    const OK: () = {
        let src_end = crate::size::checked_sum(SRC, &[LEN]);
        let dst_end = crate::size::checked_sum(DST, &[LEN]);
        assert!(src_end <= N, "source region lies outside the buffer");
        assert!(dst_end <= N, "destination region lies outside the buffer");
    };
}

/// Copy `buf[SRC..SRC + LEN]` onto `buf[DST..DST + LEN]`.
///
/// This is view assignment between two fields of the same buffer. The
/// regions may overlap; the copy has memmove semantics. Assigning a region to
/// itself (`SRC == DST`) leaves the buffer untouched.
///
/// ```
/// let mut buf = [1, 2, 3, 4, 5];
/// rose::assign_within::<0, 2, 3, _, 5>(&mut buf);
/// assert_eq!(buf, [1, 2, 1, 2, 3]);
/// ```
///
/// ```compile_fail
/// let mut buf = [1, 2, 3, 4, 5];
/// rose::assign_within::<0, 3, 3, _, 5>(&mut buf);
/// ```
pub fn assign_within<const SRC: usize, const DST: usize, const LEN: usize, T: Copy, const N: usize>(
    buf: &mut [T; N],
) {
    // INVARIANT: both regions lie inside `buf`, checked during monomorphization.
    let () = WithinBounds::<SRC, DST, LEN, N>::OK;
    if SRC == DST {
        return;
    }
    buf.copy_within(SRC..SRC + LEN, DST);
}
