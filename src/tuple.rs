// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-level tuple building for composition results.
//!
//! Results are assembled right to left: each segment's item is prepended to
//! the tuple built from the segments after it. Range items ([`FieldView`],
//! [`FieldViewMut`], `[T; M]`) grow the tuple; [`Skipped`] (produced by
//! offset segments) leaves it unchanged. [`Finish`] then turns a one-element
//! tuple into a bare value, so a single-field layout returns the field
//! itself.

use crate::view::{FieldView, FieldViewMut};

/// Placeholder item produced by an offset segment. Never reaches the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Skipped;

/// Prepend `self` to the tuple `Rest`.
pub trait Prepend<Rest> {
    type Output;

    fn prepend(self, rest: Rest) -> Self::Output;
}

impl<Rest> Prepend<Rest> for Skipped {
    type Output = Rest;

    #[inline]
    fn prepend(self, rest: Rest) -> Rest {
        rest
    }
}

macro_rules! impl_prepend {
    ($($R:ident $r:ident),*) => {
        impl<'a, T, const M: usize, $($R),*> Prepend<($($R,)*)> for FieldView<'a, T, M> {
            type Output = (Self, $($R,)*);

            #[inline]
            fn prepend(self, rest: ($($R,)*)) -> Self::Output {
                let ($($r,)*) = rest;
                (self, $($r,)*)
            }
        }

        impl<'a, T, const M: usize, $($R),*> Prepend<($($R,)*)> for FieldViewMut<'a, T, M> {
            type Output = (Self, $($R,)*);

            #[inline]
            fn prepend(self, rest: ($($R,)*)) -> Self::Output {
                let ($($r,)*) = rest;
                (self, $($r,)*)
            }
        }

        impl<T, const M: usize, $($R),*> Prepend<($($R,)*)> for [T; M] {
            type Output = (Self, $($R,)*);

            #[inline]
            fn prepend(self, rest: ($($R,)*)) -> Self::Output {
                let ($($r,)*) = rest;
                (self, $($r,)*)
            }
        }
    };
}

impl_prepend!();
impl_prepend!(R0 r0);
impl_prepend!(R0 r0, R1 r1);
impl_prepend!(R0 r0, R1 r1, R2 r2);
impl_prepend!(R0 r0, R1 r1, R2 r2, R3 r3);
impl_prepend!(R0 r0, R1 r1, R2 r2, R3 r3, R4 r4);
impl_prepend!(R0 r0, R1 r1, R2 r2, R3 r3, R4 r4, R5 r5);
impl_prepend!(R0 r0, R1 r1, R2 r2, R3 r3, R4 r4, R5 r5, R6 r6);

/// Final shape of a composition result.
pub trait Finish {
    type Output;

    fn finish(self) -> Self::Output;
}

/// The finished form of a result tuple.
pub type Finished<P> = <P as Finish>::Output;

impl Finish for () {
    type Output = ();

    #[inline]
    fn finish(self) {}
}

impl<A> Finish for (A,) {
    type Output = A;

    #[inline]
    fn finish(self) -> A {
        self.0
    }
}

macro_rules! impl_finish_identity {
    ($($A:ident),+) => {
        impl<$($A),+> Finish for ($($A,)+) {
            type Output = Self;

            #[inline]
            fn finish(self) -> Self {
                self
            }
        }
    };
}

impl_finish_identity!(A, B);
impl_finish_identity!(A, B, C);
impl_finish_identity!(A, B, C, D);
impl_finish_identity!(A, B, C, D, E);
impl_finish_identity!(A, B, C, D, E, F);
impl_finish_identity!(A, B, C, D, E, F, G);
impl_finish_identity!(A, B, C, D, E, F, G, H);
