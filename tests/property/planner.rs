//! Planner properties over arbitrary segment lists.

use super::common::{assert_table_well_formed, list};
use proptest::prelude::*;
use rose::config::MAX_SEGMENTS;
use rose::{try_plan, try_plan_exact, try_sum, LayoutError, SegmentDesc};

// ============================================================================
// STRATEGIES
// ============================================================================

/// One segment with a small length.
fn desc_strategy() -> impl Strategy<Value = SegmentDesc> {
    (any::<bool>(), 0usize..64).prop_map(|(range, len)| {
        if range {
            SegmentDesc::range(len)
        } else {
            SegmentDesc::offset(len)
        }
    })
}

/// A segment list that fits the planner's capacity.
fn descs_strategy() -> impl Strategy<Value = Vec<SegmentDesc>> {
    prop::collection::vec(desc_strategy(), 0..=MAX_SEGMENTS)
}

/// One segment whose length is near `usize::MAX`.
fn huge_desc_strategy() -> impl Strategy<Value = SegmentDesc> {
    (usize::MAX / 2..=usize::MAX).prop_map(SegmentDesc::range)
}

proptest! {
    /// Property: a list plans against a source iff its total fits.
    #[test]
    fn prop_plan_succeeds_iff_total_fits(descs in descs_strategy(), source_len in 0usize..600) {
        let total: usize = descs.iter().map(|desc| desc.len).sum();
        let planned = try_plan(&list(&descs), source_len);
        if total <= source_len {
            let table = planned.unwrap();
            assert_table_well_formed(&descs, &table);
            prop_assert_eq!(table.remaining(), source_len - total);
        } else {
            prop_assert_eq!(
                planned,
                Err(LayoutError::ExceedsSource { consumed: total, available: source_len })
            );
        }
    }

    /// Property: entry offsets are prefix sums over every segment.
    #[test]
    fn prop_offsets_are_prefix_sums(descs in descs_strategy()) {
        let total: usize = descs.iter().map(|desc| desc.len).sum();
        let table = try_plan(&list(&descs), total).unwrap();

        let mut expected = Vec::new();
        let mut offset = 0;
        for desc in &descs {
            if desc.is_range() {
                expected.push((offset, desc.len));
            }
            offset += desc.len;
        }
        let actual: Vec<(usize, usize)> =
            table.iter().map(|entry| (entry.offset, entry.size)).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: offsets never produce entries; removing them only shifts.
    #[test]
    fn prop_offsets_only_shift_entries(descs in descs_strategy()) {
        let ranges: Vec<SegmentDesc> = descs.iter().copied().filter(|d| d.is_range()).collect();
        let with_offsets = try_plan(&list(&descs), usize::MAX).unwrap();
        let without = try_plan(&list(&ranges), usize::MAX).unwrap();
        prop_assert_eq!(with_offsets.len(), without.len());
        for (a, b) in with_offsets.iter().zip(without.iter()) {
            prop_assert_eq!(a.size, b.size);
            prop_assert!(a.offset >= b.offset);
        }
    }

    /// Property: the exact planner accepts only full, range-only covers.
    #[test]
    fn prop_exact_plan(descs in descs_strategy(), slack in 0usize..3) {
        let total: usize = descs.iter().map(|desc| desc.len).sum();
        let has_offset = descs.iter().any(|desc| desc.is_offset());
        let exact = try_plan_exact(&list(&descs), total + slack);
        prop_assert_eq!(exact.is_ok(), !has_offset && slack == 0);
    }

    /// Property: overflow is reported, never wrapped.
    #[test]
    fn prop_overflow_detected(a in huge_desc_strategy(), b in huge_desc_strategy()) {
        let result = try_plan(&list(&[a, b]), usize::MAX);
        let sum = try_sum(a.len, &[b.len]);
        match sum {
            Ok(total) => prop_assert_eq!(result.map(|t| t.consumed()), Ok(total)),
            Err(err) => prop_assert_eq!(result, Err(err)),
        }
        prop_assert_eq!(sum.is_err(), a.len.checked_add(b.len).is_none());
    }
}
