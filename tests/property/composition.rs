//! Composition properties over arbitrary buffer contents.

use super::common::concat;
use proptest::prelude::*;
use rose::{copy_into, join, Buffer, FieldView, Skip};

proptest! {
    /// Property: splitting with `copy_into` then joining reproduces the buffer.
    #[test]
    fn prop_split_join_round_trip(buf in prop::array::uniform12(any::<u8>())) {
        let mut a = [0u8; 3];
        let mut b = [0u8; 4];
        let mut c = [0u8; 5];
        copy_into(&buf, (&mut a, &mut b, &mut c));
        let joined: [u8; 12] = join((&a, &b, &c));
        prop_assert_eq!(joined, buf);
    }

    /// Property: joining then viewing yields the original parts.
    #[test]
    fn prop_join_then_view(
        a in prop::array::uniform2(any::<i32>()),
        b in prop::array::uniform5(any::<i32>()),
        c in prop::array::uniform1(any::<i32>()),
    ) {
        let joined: [i32; 8] = join((a, &b, FieldView::new(&c)));
        let (va, vb, vc) = joined.view_as::<([i32; 2], [i32; 5], [i32; 1])>();
        prop_assert_eq!(va, a);
        prop_assert_eq!(vb, b);
        prop_assert_eq!(vc, c);
    }

    /// Property: extracted parts concatenate back to the covered prefix.
    #[test]
    fn prop_extract_concatenates(buf in prop::array::uniform16(any::<u16>())) {
        let (head, tail) = buf.extract::<([u16; 6], [u16; 10])>();
        prop_assert_eq!(concat(&[&head[..], &tail[..]]), buf.to_vec());
    }

    /// Property: offsets in `extract` drop exactly the skipped elements.
    #[test]
    fn prop_extract_skips(buf in prop::array::uniform10(any::<u8>())) {
        let (a, b) = buf.extract::<(Skip<1>, [u8; 3], Skip<2>, [u8; 4])>();
        prop_assert_eq!(&a[..], &buf[1..4]);
        prop_assert_eq!(&b[..], &buf[6..10]);
    }

    /// Property: chunks concatenate back to the buffer, in order.
    #[test]
    fn prop_chunks_concatenate(buf in prop::array::uniform24(any::<u8>())) {
        let by_two: [FieldView<'_, u8, 2>; 12] = buf.view_by_chunks();
        let by_eight: [FieldView<'_, u8, 8>; 3] = buf.view_by_chunks();
        let from_two: Vec<u8> = by_two.iter().flat_map(|chunk| chunk.iter().copied()).collect();
        let from_eight: Vec<u8> = by_eight.iter().flat_map(|chunk| chunk.iter().copied()).collect();
        prop_assert_eq!(&from_two[..], &buf[..]);
        prop_assert_eq!(&from_eight[..], &buf[..]);
    }

    /// Property: assigning a region to itself leaves the buffer unchanged.
    #[test]
    fn prop_self_assignment_is_identity(buf in prop::array::uniform8(any::<u8>())) {
        let mut copy = buf;
        copy.assign_within::<3, 3, 5>();
        prop_assert_eq!(copy, buf);
    }

    /// Property: overlapping in-buffer copies behave like copying through a
    /// temporary.
    #[test]
    fn prop_overlapping_copy_is_memmove(buf in prop::array::uniform8(any::<u8>())) {
        let mut forward = buf;
        forward.assign_within::<0, 2, 6>();
        let mut expected = buf;
        expected[2..8].copy_from_slice(&buf[0..6]);
        prop_assert_eq!(forward, expected);

        let mut backward = buf;
        backward.assign_within::<2, 0, 6>();
        let mut expected = buf;
        expected[0..6].copy_from_slice(&buf[2..8]);
        prop_assert_eq!(backward, expected);
    }

    /// Property: `fill_from` writes exactly the range regions.
    #[test]
    fn prop_fill_from_touches_only_ranges(
        background in any::<u8>(),
        a in prop::array::uniform3(any::<u8>()),
        b in prop::array::uniform2(any::<u8>()),
    ) {
        let mut target = [background; 8];
        target.fill_from((&a, Skip::<2>, &b));
        prop_assert_eq!(&target[0..3], &a[..]);
        prop_assert_eq!(&target[3..5], &[background; 2][..]);
        prop_assert_eq!(&target[5..7], &b[..]);
        prop_assert_eq!(target[7], background);
    }
}
