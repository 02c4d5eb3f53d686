//! Tests for the composition operations through the public API.

use super::common::sequential;
use rose::{copy_into, fill_from, join, Buffer, FieldView, FieldViewMut, Skip};

// ============================================================================
// VIEW_AS / EXTRACT
// ============================================================================

#[test]
fn test_view_as_full_cover() {
    let buf = [1u8, 2, 3, 4, 5, 6];
    let (a, b) = buf.view_as::<([u8; 2], [u8; 4])>();
    assert_eq!(a, [1, 2]);
    assert_eq!(b, [3, 4, 5, 6]);
}

#[test]
fn test_view_as_interleaved_offsets() {
    let buf = sequential::<10>();
    let (a, b, c) = buf.view_as::<(Skip<1>, [u8; 2], Skip<3>, [u8; 1], [u8; 2])>();
    assert_eq!(a, [1, 2]);
    assert_eq!(b, [6]);
    assert_eq!(c, [7, 8]);
}

#[test]
fn test_view_as_eight_segments() {
    let buf = sequential::<8>();
    let views = buf.view_as::<(
        [u8; 1],
        [u8; 1],
        [u8; 1],
        [u8; 1],
        [u8; 1],
        [u8; 1],
        [u8; 1],
        [u8; 1],
    )>();
    assert_eq!(views.0, [0]);
    assert_eq!(views.7, [7]);
}

#[test]
fn test_extract_is_detached() {
    let mut buf = [1u8, 2, 3];
    let (mut first, rest) = buf.extract::<([u8; 1], [u8; 2])>();
    first[0] = 100;
    buf[2] = 0;
    assert_eq!(first, [100]);
    assert_eq!(rest, [2, 3]);
    assert_eq!(buf, [1, 2, 0]);
}

#[test]
fn test_extract_non_copy_elements() {
    let buf = [vec![1], vec![2, 2], vec![3, 3, 3]];
    let last: [Vec<i32>; 1] = buf.extract::<(Skip<2>, [Vec<i32>; 1])>();
    assert_eq!(last, [vec![3, 3, 3]]);
    assert_eq!(buf[2], vec![3, 3, 3]);
}

#[test]
fn test_view_typed_segments_act_as_ranges() {
    let buf = [1u8, 2, 3, 4];
    let (a, b) = buf.view_as::<(FieldView<'_, u8, 2>, [u8; 2])>();
    assert_eq!(a, [1, 2]);
    assert_eq!(b, [3, 4]);

    let (head, tail) = buf.extract::<(&[u8; 1], Skip<1>, FieldViewMut<'_, u8, 2>)>();
    assert_eq!(head, [1]);
    assert_eq!(tail, [3, 4]);
}

#[test]
fn test_reference_segments_view_mutably() {
    let mut buf = [0u8; 4];
    {
        let (mut a, mut b) = buf.view_as_mut::<(&mut [u8; 1], Skip<1>, &[u8; 2])>();
        a[0] = 7;
        b.assign(&[8, 9]);
    }
    assert_eq!(buf, [7, 0, 8, 9]);
}

// ============================================================================
// CHUNKS
// ============================================================================

#[test]
fn test_chunks_are_adjacent() {
    let buf = sequential::<12>();
    let chunks: [FieldView<'_, u8, 4>; 3] = buf.view_by_chunks();
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.as_ptr(), buf[i * 4..].as_ptr());
    }
}

#[test]
fn test_chunk_of_one() {
    let buf = [9u8, 8, 7];
    let chunks: [FieldView<'_, u8, 1>; 3] = buf.view_by_chunks();
    assert_eq!(chunks.map(|chunk| chunk[0]), [9, 8, 7]);
}

#[test]
fn test_mutable_chunks_swap_halves() {
    let mut buf = [1u8, 2, 3, 4];
    let [mut left, mut right]: [FieldViewMut<'_, u8, 2>; 2] = buf.view_by_chunks_mut();
    std::mem::swap(&mut *left, &mut *right);
    assert_eq!(buf, [3, 4, 1, 2]);
}

// ============================================================================
// COPY_INTO / FILL_FROM / JOIN
// ============================================================================

#[test]
fn test_copy_into_prefix_only() {
    let source = sequential::<6>();
    let mut a = [0u8; 2];
    copy_into(&source, (&mut a,));
    assert_eq!(a, [0, 1]);
}

#[test]
fn test_copy_into_offsets_only() {
    let source = sequential::<6>();
    copy_into(&source, (Skip::<6>,));
}

#[test]
fn test_fill_from_preserves_gaps() {
    let mut target = [0xEEu8; 6];
    fill_from(&mut target, (&[1u8], Skip::<2>, &[2u8, 3]));
    assert_eq!(target, [1, 0xEE, 0xEE, 2, 3, 0xEE]);
}

#[test]
fn test_join_two_halves() {
    let joined: [u8; 6] = join((&[1u8, 2, 3], &[4u8, 5, 6]));
    assert_eq!(joined, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_join_single_source_copies() {
    let source = [String::from("only")];
    let joined: [String; 1] = join((&source,));
    assert_eq!(joined, source);
}

#[test]
fn test_join_many_sources() {
    let joined: [u16; 8] = join((
        [0u16],
        [1u16],
        [2u16],
        [3u16],
        [4u16],
        [5u16],
        [6u16],
        [7u16],
    ));
    assert_eq!(joined, [0, 1, 2, 3, 4, 5, 6, 7]);
}
