// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the run-time layout planner.
//!
//! Tooling feeds segment lists in as data, so the planner must reject bad
//! lists with an error and never hand back a table that points outside the
//! source.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rose::{try_plan, try_plan_exact, LayoutError, SegmentDesc, SegmentList};

#[derive(Debug, Arbitrary)]
struct PlanInput {
    segments: Vec<(bool, usize)>,
    source_len: usize,
}

fuzz_target!(|input: PlanInput| {
    let descs: Vec<SegmentDesc> = input
        .segments
        .iter()
        .map(|&(range, len)| {
            if range {
                SegmentDesc::range(len)
            } else {
                SegmentDesc::offset(len)
            }
        })
        .collect();

    // Property 1: over-capacity lists are refused, never truncated
    let list = match SegmentList::try_new(&descs) {
        Ok(list) => list,
        Err(err) => {
            assert!(matches!(err, LayoutError::TooManySegments { .. }));
            return;
        }
    };
    assert_eq!(list.as_slice(), &descs[..]);

    let total = descs
        .iter()
        .try_fold(0usize, |acc, desc| acc.checked_add(desc.len));

    match try_plan(&list, input.source_len) {
        Ok(table) => {
            // Property 2: success means the true total fits
            assert_eq!(total, Some(table.consumed()));
            assert!(table.consumed() <= input.source_len);
            assert_eq!(table.len(), list.range_count());

            // Property 3: entries ascend and stay inside the consumed prefix
            let mut previous_end = 0;
            for entry in table.iter() {
                assert!(entry.offset >= previous_end, "entries overlap");
                let end = entry
                    .offset
                    .checked_add(entry.size)
                    .expect("planned entry end overflowed");
                assert!(end <= table.consumed(), "entry past consumed prefix");
                previous_end = end;
            }
        }
        Err(LayoutError::SizeOverflow) => assert!(total.is_none()),
        Err(LayoutError::ExceedsSource {
            consumed,
            available,
        }) => {
            assert_eq!(total, Some(consumed));
            assert_eq!(available, input.source_len);
            assert!(consumed > available);
        }
        Err(other) => panic!("unexpected planner error: {other}"),
    }

    // Property 4: the exact planner accepts only range-only full covers
    let exact = try_plan_exact(&list, input.source_len);
    let expected = list.as_slice().iter().all(|desc| desc.is_range())
        && total == Some(input.source_len);
    assert_eq!(exact.is_ok(), expected);
});
