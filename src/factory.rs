// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The view factory: turns a segment list into views or owned values.
//!
//! [`Field`] says what one segment produces from its slice of the buffer.
//! [`Segments`] walks a whole tuple of segments left to right, splitting the
//! buffer as it goes and prepending each item to the result built from the
//! rest. Offsets produce [`Skipped`], which prepending erases.
//!
//! Nothing here checks lengths. Callers plan the layout first
//! ([`crate::Layout::TABLE`]); once the plan compiles, every split is in
//! bounds.

use crate::layout::Described;
use crate::segment::{Segment, Skip};
use crate::tuple::{Finish, Prepend, Skipped};
use crate::view::{fixed, fixed_mut, FieldView, FieldViewMut};

/// What one declared segment produces over a buffer of `T`.
pub trait Field<'a, T: 'a>: Segment {
    type View;
    type ViewMut;
    type Owned;

    fn view(part: &'a [T]) -> Self::View;

    fn view_mut(part: &'a mut [T]) -> Self::ViewMut;

    fn extract(part: &[T]) -> Self::Owned
    where
        T: Clone;
}

impl<'a, T: 'a, const M: usize> Field<'a, T> for [T; M] {
    type View = FieldView<'a, T, M>;
    type ViewMut = FieldViewMut<'a, T, M>;
    type Owned = [T; M];

    #[inline]
    fn view(part: &'a [T]) -> Self::View {
        FieldView::new(fixed(part))
    }

    #[inline]
    fn view_mut(part: &'a mut [T]) -> Self::ViewMut {
        FieldViewMut::new(fixed_mut(part))
    }

    #[inline]
    fn extract(part: &[T]) -> [T; M]
    where
        T: Clone,
    {
        fixed::<T, M>(part).clone()
    }
}

/// Range segment types other than `[T; M]` produce exactly what `[T; M]` does.
macro_rules! impl_field_as_array {
    ($([$($lt:lifetime),+] $ty:ty),+ $(,)?) => {
        $(
            impl<'a, $($lt,)+ T: 'a, const M: usize> Field<'a, T> for $ty {
                type View = FieldView<'a, T, M>;
                type ViewMut = FieldViewMut<'a, T, M>;
                type Owned = [T; M];

                #[inline]
                fn view(part: &'a [T]) -> Self::View {
                    <[T; M] as Field<'a, T>>::view(part)
                }

                #[inline]
                fn view_mut(part: &'a mut [T]) -> Self::ViewMut {
                    <[T; M] as Field<'a, T>>::view_mut(part)
                }

                #[inline]
                fn extract(part: &[T]) -> [T; M]
                where
                    T: Clone,
                {
                    <[T; M] as Field<'a, T>>::extract(part)
                }
            }
        )+
    };
}

impl_field_as_array!(
    ['b] &'b [T; M],
    ['b] &'b mut [T; M],
    ['b] FieldView<'b, T, M>,
    ['b] FieldViewMut<'b, T, M>,
    ['b, 'c] &'b FieldViewMut<'c, T, M>,
    ['b, 'c] &'b mut FieldViewMut<'c, T, M>,
);

impl<'a, T: 'a, const M: usize> Field<'a, T> for Skip<M> {
    type View = Skipped;
    type ViewMut = Skipped;
    type Owned = Skipped;

    #[inline]
    fn view(_: &'a [T]) -> Skipped {
        Skipped
    }

    #[inline]
    fn view_mut(_: &'a mut [T]) -> Skipped {
        Skipped
    }

    #[inline]
    fn extract(_: &[T]) -> Skipped
    where
        T: Clone,
    {
        Skipped
    }
}

/// A tuple of [`Field`]s, split off a buffer of `T` in declaration order.
pub trait Segments<'a, T: 'a>: Described {
    /// One [`FieldView`] per range segment.
    type Views: Finish;
    /// One [`FieldViewMut`] per range segment.
    type ViewsMut: Finish;
    /// One owned `[T; M]` per range segment.
    type Owned: Finish;

    fn split(part: &'a [T]) -> Self::Views;

    fn split_mut(part: &'a mut [T]) -> Self::ViewsMut;

    fn extract(part: &[T]) -> Self::Owned
    where
        T: Clone;
}

impl<'a, T: 'a> Segments<'a, T> for () {
    type Views = ();
    type ViewsMut = ();
    type Owned = ();

    #[inline]
    fn split(_: &'a [T]) {}

    #[inline]
    fn split_mut(_: &'a mut [T]) {}

    #[inline]
    fn extract(_: &[T])
    where
        T: Clone,
    {
    }
}

macro_rules! impl_segments {
    ($S0:ident $(, $S:ident)*) => {
        impl<'a, T: 'a, $S0, $($S),*> Segments<'a, T> for ($S0, $($S,)*)
        where
            $S0: Field<'a, T>,
            $($S: Segment,)*
            ($($S,)*): Segments<'a, T>,
            <$S0 as Field<'a, T>>::View: Prepend<<($($S,)*) as Segments<'a, T>>::Views>,
            <$S0 as Field<'a, T>>::ViewMut: Prepend<<($($S,)*) as Segments<'a, T>>::ViewsMut>,
            <$S0 as Field<'a, T>>::Owned: Prepend<<($($S,)*) as Segments<'a, T>>::Owned>,
            <<$S0 as Field<'a, T>>::View as Prepend<<($($S,)*) as Segments<'a, T>>::Views>>::Output: Finish,
            <<$S0 as Field<'a, T>>::ViewMut as Prepend<<($($S,)*) as Segments<'a, T>>::ViewsMut>>::Output: Finish,
            <<$S0 as Field<'a, T>>::Owned as Prepend<<($($S,)*) as Segments<'a, T>>::Owned>>::Output: Finish,
        {
            type Views =
                <<$S0 as Field<'a, T>>::View as Prepend<<($($S,)*) as Segments<'a, T>>::Views>>::Output;
            type ViewsMut =
                <<$S0 as Field<'a, T>>::ViewMut as Prepend<<($($S,)*) as Segments<'a, T>>::ViewsMut>>::Output;
            type Owned =
                <<$S0 as Field<'a, T>>::Owned as Prepend<<($($S,)*) as Segments<'a, T>>::Owned>>::Output;

            #[inline]
            fn split(part: &'a [T]) -> Self::Views {
                let (head, rest) = part.split_at(<$S0 as Segment>::DESC.len);
                <$S0 as Field<'a, T>>::view(head)
                    .prepend(<($($S,)*) as Segments<'a, T>>::split(rest))
            }

            #[inline]
            fn split_mut(part: &'a mut [T]) -> Self::ViewsMut {
                let (head, rest) = part.split_at_mut(<$S0 as Segment>::DESC.len);
                <$S0 as Field<'a, T>>::view_mut(head)
                    .prepend(<($($S,)*) as Segments<'a, T>>::split_mut(rest))
            }

            #[inline]
            fn extract(part: &[T]) -> Self::Owned
            where
                T: Clone,
            {
                let (head, rest) = part.split_at(<$S0 as Segment>::DESC.len);
                <$S0 as Field<'a, T>>::extract(head)
                    .prepend(<($($S,)*) as Segments<'a, T>>::extract(rest))
            }
        }
    };
}

impl_segments!(S0);
impl_segments!(S0, S1);
impl_segments!(S0, S1, S2);
impl_segments!(S0, S1, S2, S3);
impl_segments!(S0, S1, S2, S3, S4);
impl_segments!(S0, S1, S2, S3, S4, S5);
impl_segments!(S0, S1, S2, S3, S4, S5, S6);
impl_segments!(S0, S1, S2, S3, S4, S5, S6, S7);
