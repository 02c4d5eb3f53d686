// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Overflow-checked size arithmetic usable in constant evaluation.
//!
//! Every size the planner computes goes through [`try_sum`]. Inside an
//! associated `const` the panicking form [`checked_sum`] turns a wrap-around
//! into a compile error, so an overflowing layout never produces a binary.

use crate::error::LayoutError;

/// Add `addends` to `acc`, reporting wrap-around.
///
/// A partial sum that comes out smaller than the addend just added has
/// wrapped; that is the only failure.
pub const fn try_sum(acc: usize, addends: &[usize]) -> Result<usize, LayoutError> {
    let mut total = acc;
    let mut i = 0;
    while i < addends.len() {
        let next = total.wrapping_add(addends[i]);
        if next < addends[i] {
            return Err(LayoutError::SizeOverflow);
        }
        total = next;
        i += 1;
    }
    Ok(total)
}

/// Add `addends` to `acc`, failing the build on wrap-around.
///
/// ```
/// const TOTAL: usize = rose::size::checked_sum(4, &[2, 8]);
/// assert_eq!(TOTAL, 14);
/// ```
///
/// ```compile_fail
/// const TOTAL: usize = rose::size::checked_sum(usize::MAX, &[1]);
/// ```
pub const fn checked_sum(acc: usize, addends: &[usize]) -> usize {
    match try_sum(acc, addends) {
        Ok(total) => total,
        Err(_) => panic!("size arithmetic overflowed usize"),
    }
}
