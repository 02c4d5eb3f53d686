// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Counter-based pseudorandom generator.
//!
//! The state is sixteen 32-bit words laid out as
//!
//! ```text
//! words:   0..4       4..12     12..14          14..16
//!          constants  key       block counter   seed
//! ```
//!
//! Each block runs the ChaCha permutation (20 rounds) over the state, adds
//! the state back in, and buffers the sixteen output words as eight 64-bit
//! draws (low word first). When the draws run out the counter advances, with
//! carry from its low word into its high word, and the next block is made.
//!
//! Not for cryptographic use: there is no key management and nothing is
//! zeroed on drop.

use std::fmt;

use crate::compose::{fill_from, Buffer};
use crate::segment::Skip;
use crate::view::FieldView;

/// "expand 32-byte k"
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Double rounds per block (20 rounds in total).
const DOUBLE_ROUNDS: usize = 10;

/// Number of 64-bit draws one block provides.
const DRAWS_PER_BLOCK: usize = 8;

/// Where the block counter sits in the state.
type CounterField = (Skip<12>, [u32; 2]);

/// Deterministic 64-bit generator keyed by a 256-bit key and a 64-bit seed.
#[derive(Clone)]
pub struct Generator {
    state: [u32; 16],
    block: [u32; 16],
    next_draw: usize,
}

impl Generator {
    /// Create a generator positioned at block zero.
    pub fn new(seed: u64, key: [u32; 8]) -> Self {
        let mut state = [0u32; 16];
        fill_from(&mut state, (&SIGMA, &key, [0u32; 2], split_u64(seed)));
        let mut generator = Self {
            state,
            block: [0; 16],
            next_draw: 0,
        };
        generator.refill();
        generator
    }

    /// Smallest value [`next_u64`](Self::next_u64) can return.
    pub const fn min() -> u64 {
        0
    }

    /// Largest value [`next_u64`](Self::next_u64) can return.
    pub const fn max() -> u64 {
        u64::MAX
    }

    /// The counter of the block draws are currently taken from.
    pub fn counter(&self) -> u64 {
        join_u64(*self.state.view_as::<CounterField>().get())
    }

    /// Jump to the start of `block`, discarding any buffered draws.
    pub fn seek_block(&mut self, block: u64) {
        self.state.view_as_mut::<CounterField>().assign(&split_u64(block));
        self.refill();
    }

    pub fn next_u64(&mut self) -> u64 {
        if self.next_draw == DRAWS_PER_BLOCK {
            self.advance_counter();
            self.refill();
        }
        let draws: [FieldView<'_, u32, 2>; DRAWS_PER_BLOCK] = self.block.view_by_chunks();
        let value = join_u64(*draws[self.next_draw].get());
        self.next_draw += 1;
        value
    }

    fn advance_counter(&mut self) {
        let mut counter = self.state.view_as_mut::<CounterField>();
        counter[0] = counter[0].wrapping_add(1);
        if counter[0] == 0 {
            counter[1] = counter[1].wrapping_add(1);
        }
    }

    fn refill(&mut self) {
        let mut working = self.state;
        for _ in 0..DOUBLE_ROUNDS {
            quarter_round(&mut working, 0, 4, 8, 12);
            quarter_round(&mut working, 1, 5, 9, 13);
            quarter_round(&mut working, 2, 6, 10, 14);
            quarter_round(&mut working, 3, 7, 11, 15);
            quarter_round(&mut working, 0, 5, 10, 15);
            quarter_round(&mut working, 1, 6, 11, 12);
            quarter_round(&mut working, 2, 7, 8, 13);
            quarter_round(&mut working, 3, 4, 9, 14);
        }
        for (out, (mixed, input)) in self.block.iter_mut().zip(working.iter().zip(&self.state)) {
            *out = mixed.wrapping_add(*input);
        }
        self.next_draw = 0;
        tracing::trace!(counter = self.counter(), "generated block");
    }
}

impl Iterator for Generator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_u64())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("counter", &self.counter())
            .field("next_draw", &self.next_draw)
            .finish_non_exhaustive()
    }
}

#[inline]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(16);
    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(12);
    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(8);
    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(7);
}

/// `[low, high]` words of a 64-bit value.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn split_u64(value: u64) -> [u32; 2] {
    [value as u32, (value >> 32) as u32]
}

#[inline]
fn join_u64([low, high]: [u32; 2]) -> u64 {
    u64::from(low) | (u64::from(high) << 32)
}
