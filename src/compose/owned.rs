// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operations that produce new, caller-owned arrays.

use crate::compose::copy::{fill_from, Sources};
use crate::factory::Segments;
use crate::layout::Layout;
use crate::tuple::{Finish, Finished};
use crate::verify::contracts;

/// Clone each range segment of `L` out of `source` into a fresh array.
#[inline]
pub fn extract<'a, L, T, const N: usize>(source: &'a [T; N]) -> Finished<L::Owned>
where
    T: Clone + 'a,
    L: Segments<'a, T>,
{
    let table = Layout::<L, N>::TABLE;
    contracts::check_table_well_formed(&table);
    L::extract(&source[..table.consumed()]).finish()
}

/// Concatenate `sources` into a new array of exactly `N` elements.
///
/// Every source must be a range, and their lengths must add up to `N`;
/// anything else fails the build. The result starts out as `T::default()`
/// and is then filled from the sources in order.
///
/// `T: Default` is needed only to give every slot a value before the copies
/// run; with an exact cover each default is overwritten and never observed.
///
/// ```
/// let joined: [u8; 5] = rose::join((&[1u8, 2], [3u8, 4, 5]));
/// assert_eq!(joined, [1, 2, 3, 4, 5]);
/// ```
///
/// ```compile_fail
/// let joined: [u8; 6] = rose::join((&[1u8, 2], [3u8, 4, 5]));
/// ```
///
/// ```compile_fail
/// let joined: [u8; 5] = rose::join((&[1u8, 2], rose::Skip::<1>, [3u8, 4]));
/// ```
#[inline]
pub fn join<G, T, const N: usize>(sources: G) -> [T; N]
where
    T: Clone + Default,
    G: Sources<T>,
{
    let table = Layout::<G, N>::EXACT;
    contracts::check_exact_cover(&table, N);
    let mut joined: [T; N] = std::array::from_fn(|_| T::default());
    fill_from(&mut joined, sources);
    joined
}
