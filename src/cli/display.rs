// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the rose CLI.
//!
//! Box-drawn layout tables with a little color. Respects `NO_COLOR`, and
//! drops styling when stdout is not a terminal so piped output stays plain.
//! Renderers return strings and take the styling decision as an argument, so
//! they are testable without a terminal.

use std::fmt::Write as _;
use std::io::IsTerminal;

use rose::{LayoutTable, SegmentDesc, SegmentKind};

/// Width between │ and │ (excluding border chars).
pub const BOX_WIDTH: usize = 60;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const GRAY: &str = "\x1b[90m";

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Apply styles when `styled`, otherwise return plain text
pub fn paint(styled: bool, styles: &[&str], text: &str) -> String {
    if styled {
        format!("{}{}{}", styles.concat(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn top(out: &mut String, styled: bool, label: &str) {
    let label_part = format!("─ {} ", paint(styled, &[BOLD, CYAN], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let _ = writeln!(out, "┌{}{}┐", label_part, "─".repeat(remaining));
}

fn row(out: &mut String, content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let _ = writeln!(out, "│{}{}│", content, " ".repeat(pad));
}

fn bottom(out: &mut String) {
    let _ = writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// LAYOUT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

fn kind_badge(styled: bool, kind: SegmentKind) -> String {
    match kind {
        SegmentKind::Range => paint(styled, &[GREEN], "range "),
        SegmentKind::Offset => paint(styled, &[GRAY], "offset"),
    }
}

/// Render a planned segment list: one row per segment with its span, then
/// the totals.
pub fn render_plan(styled: bool, segments: &[SegmentDesc], table: &LayoutTable) -> String {
    let mut out = String::new();
    top(&mut out, styled, "LAYOUT");
    row(
        &mut out,
        &paint(styled, &[DIM], "  #  kind      offset      size   entry"),
    );

    let mut offset = 0;
    let mut entry = 0;
    for (i, desc) in segments.iter().enumerate() {
        let slot = if desc.is_range() {
            entry += 1;
            format!("{:>5}", entry - 1)
        } else {
            format!("{:>5}", "-")
        };
        row(
            &mut out,
            &format!(
                " {:>2}  {}  {:>8}  {:>8}   {}",
                i,
                kind_badge(styled, desc.kind),
                offset,
                desc.len,
                slot
            ),
        );
        offset += desc.len;
    }

    row(&mut out, "");
    row(
        &mut out,
        &format!(
            " consumed {} of {} ({} remaining)",
            table.consumed(),
            table.source_len(),
            table.remaining()
        ),
    );
    bottom(&mut out);
    out
}

/// Render generator output, one value per line with its index.
pub fn render_draws(values: &[u64]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        let _ = writeln!(out, "{:>4}  0x{:016x}", i, value);
    }
    out
}
