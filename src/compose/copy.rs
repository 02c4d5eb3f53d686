// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Copying between one buffer and a tuple of fields.
//!
//! [`copy_into`] scatters a source buffer across targets; [`fill_from`]
//! gathers sources into a target buffer. Both take the segment list from the
//! argument tuple itself, so `(&mut a, Skip::<2>, &mut b)` both names the
//! layout and supplies the places to copy to.

use crate::layout::{Described, Layout};
use crate::segment::{Segment, Skip};
use crate::verify::contracts;
use crate::view::{fixed, FieldView, FieldViewMut};

// ============================================================================
// SINGLE FIELDS
// ============================================================================

/// A place [`copy_into`] can copy a planned region to.
pub trait Target<T>: Segment {
    fn receive(self, part: &[T]);
}

impl<T: Clone, const M: usize> Target<T> for &mut [T; M] {
    #[inline]
    fn receive(self, part: &[T]) {
        self.clone_from_slice(part);
    }
}

impl<T: Clone, const M: usize> Target<T> for FieldViewMut<'_, T, M> {
    #[inline]
    fn receive(mut self, part: &[T]) {
        self.assign(fixed(part));
    }
}

impl<T: Clone, const M: usize> Target<T> for &mut FieldViewMut<'_, T, M> {
    #[inline]
    fn receive(self, part: &[T]) {
        self.assign(fixed(part));
    }
}

impl<T, const M: usize> Target<T> for Skip<M> {
    #[inline]
    fn receive(self, _: &[T]) {}
}

/// A value [`fill_from`] can copy into a planned region.
pub trait Source<T>: Segment {
    fn deliver(self, part: &mut [T]);
}

impl<T: Clone, const M: usize> Source<T> for [T; M] {
    #[inline]
    fn deliver(self, part: &mut [T]) {
        part.clone_from_slice(&self);
    }
}

impl<T: Clone, const M: usize> Source<T> for &[T; M] {
    #[inline]
    fn deliver(self, part: &mut [T]) {
        part.clone_from_slice(self);
    }
}

impl<T: Clone, const M: usize> Source<T> for FieldView<'_, T, M> {
    #[inline]
    fn deliver(self, part: &mut [T]) {
        part.clone_from_slice(self.get());
    }
}

impl<T: Clone, const M: usize> Source<T> for &FieldViewMut<'_, T, M> {
    #[inline]
    fn deliver(self, part: &mut [T]) {
        part.clone_from_slice(&self[..]);
    }
}

impl<T, const M: usize> Source<T> for Skip<M> {
    #[inline]
    fn deliver(self, _: &mut [T]) {}
}

// ============================================================================
// TUPLES
// ============================================================================

/// A tuple of [`Target`]s over one element type.
pub trait Targets<T>: Described {
    /// Hand each target its region of `part`, left to right.
    fn scatter(self, part: &[T]);
}

/// A tuple of [`Source`]s over one element type.
pub trait Sources<T>: Described {
    /// Copy each source into its region of `part`, left to right.
    fn gather(self, part: &mut [T]);
}

impl<T> Targets<T> for () {
    #[inline]
    fn scatter(self, _: &[T]) {}
}

impl<T> Sources<T> for () {
    #[inline]
    fn gather(self, _: &mut [T]) {}
}

macro_rules! impl_copy_tuples {
    ($($S:ident $s:ident),+) => {
        impl<T, $($S: Target<T>),+> Targets<T> for ($($S,)+) {
            #[inline]
            fn scatter(self, part: &[T]) {
                let ($($s,)+) = self;
                let rest = part;
                $(
                    let (head, rest) = rest.split_at(<$S as Segment>::DESC.len);
                    $s.receive(head);
                )+
                let _ = rest;
            }
        }

        impl<T, $($S: Source<T>),+> Sources<T> for ($($S,)+) {
            #[inline]
            fn gather(self, part: &mut [T]) {
                let ($($s,)+) = self;
                let rest = part;
                $(
                    let (head, rest) = rest.split_at_mut(<$S as Segment>::DESC.len);
                    $s.deliver(head);
                )+
                let _ = rest;
            }
        }
    };
}

impl_copy_tuples!(S0 s0);
impl_copy_tuples!(S0 s0, S1 s1);
impl_copy_tuples!(S0 s0, S1 s1, S2 s2);
impl_copy_tuples!(S0 s0, S1 s1, S2 s2, S3 s3);
impl_copy_tuples!(S0 s0, S1 s1, S2 s2, S3 s3, S4 s4);
impl_copy_tuples!(S0 s0, S1 s1, S2 s2, S3 s3, S4 s4, S5 s5);
impl_copy_tuples!(S0 s0, S1 s1, S2 s2, S3 s3, S4 s4, S5 s5, S6 s6);
impl_copy_tuples!(S0 s0, S1 s1, S2 s2, S3 s3, S4 s4, S5 s5, S6 s6, S7 s7);

// ============================================================================
// OPERATIONS
// ============================================================================

/// Copy consecutive regions of `source` into `targets`.
///
/// Range targets receive their region; `Skip` positions copy nothing. Bytes
/// past the last segment are ignored.
///
/// ```
/// use rose::{copy_into, Skip};
///
/// let source = [1u8, 2, 3, 4, 5, 6];
/// let mut head = [0u8; 2];
/// let mut tail = [0u8; 2];
/// copy_into(&source, (&mut head, Skip::<2>, &mut tail));
/// assert_eq!(head, [1, 2]);
/// assert_eq!(tail, [5, 6]);
/// ```
///
/// ```compile_fail
/// use rose::copy_into;
///
/// let source = [0u8; 3];
/// let mut a = [0u8; 2];
/// let mut b = [0u8; 2];
/// copy_into(&source, (&mut a, &mut b));
/// ```
#[inline]
pub fn copy_into<G, T, const N: usize>(source: &[T; N], targets: G)
where
    G: Targets<T>,
{
    let table = Layout::<G, N>::TABLE;
    contracts::check_table_well_formed(&table);
    targets.scatter(&source[..table.consumed()]);
}

/// Copy `sources` into consecutive regions of `target` and return it.
///
/// `Skip` positions leave their region untouched, as do elements past the
/// last segment.
///
/// ```
/// use rose::{fill_from, Skip};
///
/// let mut packet = [0u8; 6];
/// fill_from(&mut packet, ([0xAB_u8], Skip::<1>, &[1u8, 2]))[5] = 9;
/// assert_eq!(packet, [0xAB, 0, 1, 2, 0, 9]);
/// ```
#[inline]
pub fn fill_from<G, T, const N: usize>(target: &mut [T; N], sources: G) -> &mut [T; N]
where
    G: Sources<T>,
{
    let table = Layout::<G, N>::TABLE;
    contracts::check_table_well_formed(&table);
    sources.gather(&mut target[..table.consumed()]);
    target
}
