//! Tests for size arithmetic, segment classification and the planner.

use super::common::{assert_table_well_formed, list};
use rose::{
    checked_sum, try_plan, try_plan_exact, try_sum, Described, Entry, Layout, LayoutError,
    Segment, SegmentDesc, SegmentKind, Skip,
};

// ============================================================================
// SIZE ARITHMETIC
// ============================================================================

#[test]
fn test_sum_of_small_sizes() {
    assert_eq!(checked_sum(1, &[2, 3]), 6);
    assert_eq!(try_sum(0, &[]), Ok(0));
}

#[test]
fn test_sum_at_the_edge() {
    assert_eq!(try_sum(usize::MAX - 1, &[1]), Ok(usize::MAX));
    assert_eq!(try_sum(usize::MAX, &[0, 0]), Ok(usize::MAX));
}

#[test]
fn test_sum_wraps_detected() {
    assert_eq!(try_sum(usize::MAX, &[1]), Err(LayoutError::SizeOverflow));
    assert_eq!(try_sum(1, &[usize::MAX]), Err(LayoutError::SizeOverflow));
    assert_eq!(
        try_sum(0, &[usize::MAX / 2 + 1, usize::MAX / 2 + 1]),
        Err(LayoutError::SizeOverflow)
    );
}

#[test]
fn test_checked_sum_in_constants() {
    const TOTAL: usize = checked_sum(4, &[4, 8]);
    assert_eq!(TOTAL, 16);
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

#[test]
fn test_every_segment_type_classified() {
    assert_eq!(<[u8; 3]>::DESC.kind, SegmentKind::Range);
    assert_eq!(<rose::FieldView<'static, u8, 3>>::DESC.kind, SegmentKind::Range);
    assert_eq!(<rose::FieldViewMut<'static, u8, 3>>::DESC.kind, SegmentKind::Range);
    assert_eq!(<Skip<3>>::DESC.kind, SegmentKind::Offset);
    assert_eq!(<Skip<3>>::DESC.len, 3);
}

#[test]
fn test_tuple_descriptors_in_order() {
    type Frame = (Skip<1>, [u16; 2], [u16; 0]);
    let segments = <Frame as Described>::SEGMENTS;
    assert_eq!(
        segments.as_slice(),
        &[
            SegmentDesc::offset(1),
            SegmentDesc::range(2),
            SegmentDesc::range(0)
        ]
    );
}

// ============================================================================
// PLANNER
// ============================================================================

#[test]
fn test_plan_worked_example() {
    let descs = [
        SegmentDesc::offset(2),
        SegmentDesc::range(3),
        SegmentDesc::offset(1),
        SegmentDesc::range(2),
    ];
    let table = try_plan(&list(&descs), 8).unwrap();
    assert_table_well_formed(&descs, &table);
    assert_eq!(table.entry(0), Entry { offset: 2, size: 3 });
    assert_eq!(table.entry(1), Entry { offset: 6, size: 2 });
}

#[test]
fn test_zero_length_ranges_keep_entries() {
    let descs = [SegmentDesc::range(0), SegmentDesc::range(0)];
    let table = try_plan(&list(&descs), 0).unwrap();
    assert_eq!(table.len(), 2);
    assert!(table.iter().all(|entry| entry.offset == 0 && entry.size == 0));
}

#[test]
fn test_empty_list_plans_against_anything() {
    let table = try_plan(&list(&[]), 10).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.remaining(), 10);
}

#[test]
fn test_exceeding_source_reports_totals() {
    let descs = [SegmentDesc::range(5), SegmentDesc::offset(5)];
    assert_eq!(
        try_plan(&list(&descs), 9),
        Err(LayoutError::ExceedsSource {
            consumed: 10,
            available: 9
        })
    );
}

#[test]
fn test_exact_plan_for_join() {
    let descs = [SegmentDesc::range(2), SegmentDesc::range(2)];
    let table = try_plan_exact(&list(&descs), 4).unwrap();
    assert_eq!(table.source_len(), 4);
    assert_eq!(table.remaining(), 0);
    assert_eq!(
        try_plan_exact(&list(&descs), 3),
        Err(LayoutError::LengthMismatch {
            consumed: 4,
            expected: 3
        })
    );
}

#[test]
fn test_layout_constant_matches_runtime_plan() {
    type Header = ([u8; 4], Skip<2>, [u8; 2]);
    let runtime = try_plan(&<Header as Described>::SEGMENTS, 10).unwrap();
    assert_eq!(Layout::<Header, 10>::TABLE, runtime);
}

#[test]
fn test_table_json_shape() {
    let table = Layout::<(Skip<2>, [u8; 3]), 5>::TABLE;
    let json = serde_json::to_value(table).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "entries": [{ "offset": 2, "size": 3 }],
            "consumed": 5,
            "source_len": 5
        })
    );
}
