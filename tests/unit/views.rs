//! Tests for field views and in-buffer assignment.

use rose::{assign_within, Buffer, FieldView, FieldViewMut, Skip};

#[test]
fn test_view_aliases_the_buffer() {
    let buf = [10u8, 20, 30, 40];
    let tail = buf.view_as::<(Skip<1>, [u8; 3])>();
    assert_eq!(tail.as_ptr(), buf[1..].as_ptr());
    assert_eq!(tail.get(), &[20, 30, 40]);
}

#[test]
fn test_views_are_copy() {
    let buf = [1u8, 2];
    let view = FieldView::new(&buf);
    let copy = view;
    assert_eq!(view, copy);
    assert_eq!(view.to_array(), [1, 2]);
}

#[test]
fn test_view_iterates_elements() {
    let buf = [3u32, 4, 5];
    let view = FieldView::new(&buf);
    let doubled: Vec<u32> = view.into_iter().map(|x| x * 2).collect();
    assert_eq!(doubled, [6, 8, 10]);
}

#[test]
fn test_mutable_views_from_one_buffer_are_independent() {
    let mut buf = [0u8; 6];
    let (mut a, mut b, mut c) = buf.view_as_mut::<([u8; 2], [u8; 2], [u8; 2])>();
    a.assign(&[1, 1]);
    b.assign_view(FieldView::new(&[2, 2]));
    c[1] = 3;
    assert_eq!(buf, [1, 1, 2, 2, 0, 3]);
}

#[test]
fn test_assignment_leaves_source_untouched() {
    let source = [7u8, 8, 9];
    let mut target = [0u8; 3];
    FieldViewMut::new(&mut target).assign(&source);
    assert_eq!(target, source);
    assert_eq!(source, [7, 8, 9]);
}

#[test]
fn test_reborrowed_view_as_target() {
    let mut storage = [0u8; 2];
    let mut view = FieldViewMut::new(&mut storage);
    [5u8, 6].copy_into((view.reborrow(),));
    assert_eq!(view.as_view(), FieldView::new(&[5, 6]));
    let back: &mut [u8; 2] = view.into_mut();
    back[0] = 0;
    assert_eq!(storage, [0, 6]);
}

#[test]
fn test_assign_within_disjoint_regions() {
    let mut buf = [1, 2, 3, 4, 5, 6];
    assign_within::<0, 4, 2, _, 6>(&mut buf);
    assert_eq!(buf, [1, 2, 3, 4, 1, 2]);
}

#[test]
fn test_assign_within_self_is_identity() {
    let mut buf = *b"stable";
    buf.assign_within::<2, 2, 4>();
    assert_eq!(&buf, b"stable");
}

#[test]
fn test_assign_within_zero_length() {
    let mut buf = [1u8, 2];
    buf.assign_within::<0, 2, 0>();
    assert_eq!(buf, [1, 2]);
}
