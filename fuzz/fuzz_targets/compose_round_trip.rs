// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the composition operations on arbitrary contents.
//!
//! Splitting and joining are inverse copies; any mismatch means a planned
//! offset is wrong.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rose::{copy_into, join, Buffer, FieldView, Skip};

type Frame = ([u8; 4], Skip<4>, [u8; 16], [u8; 8]);

fuzz_target!(|data: [u8; 32]| {
    // Property 1: views match the corresponding slices
    let (head, body, tail) = data.view_as::<Frame>();
    assert_eq!(&head[..], &data[0..4]);
    assert_eq!(&body[..], &data[8..24]);
    assert_eq!(&tail[..], &data[24..32]);

    // Property 2: split with copy_into, join back
    let mut a = [0u8; 8];
    let mut b = [0u8; 16];
    let mut c = [0u8; 8];
    copy_into(&data, (&mut a, &mut b, &mut c));
    let joined: [u8; 32] = join((&a, &b, &c));
    assert_eq!(joined, data);

    // Property 3: chunks concatenate back to the buffer
    let chunks: [FieldView<'_, u8, 4>; 8] = data.view_by_chunks();
    let flat: Vec<u8> = chunks.iter().flat_map(|chunk| chunk.iter().copied()).collect();
    assert_eq!(&flat[..], &data[..]);

    // Property 4: overlapping in-buffer copy behaves like memmove
    let mut moved = data;
    moved.assign_within::<0, 4, 24>();
    assert_eq!(&moved[4..28], &data[0..24]);
    assert_eq!(&moved[..4], &data[..4]);
    assert_eq!(&moved[28..], &data[28..]);
});
