// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rose command-line interface.
//!
//! Three subcommands: `plan` to print the offset table of a segment list,
//! `draw` to print generator output, and `size` to print a file's length.
//! Segment lists that the library takes as types are given here as tokens:
//! `r4` for a range of four elements, `o2` for an offset of two.

pub mod display;

use clap::{Parser, Subcommand};
use rose::SegmentDesc;

#[derive(Parser)]
#[command(
    name = "rose",
    about = "Inspect build-time buffer layouts and the counter-based generator",
    version
)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the offset table for a segment list
    Plan {
        /// Segments in declaration order: r<len> for a range, o<len> for an offset
        #[arg(required = true, value_parser = parse_segment)]
        segments: Vec<SegmentDesc>,

        /// Length of the source buffer (defaults to the total of all segments)
        #[arg(short, long)]
        source_len: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print values from the generator
    Draw {
        /// 64-bit seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Key words, comma separated (at most 8; missing words are zero)
        #[arg(long, value_delimiter = ',', num_args = 1..=8)]
        key: Vec<u32>,

        /// Block to start from
        #[arg(long, default_value = "0")]
        block: u64,

        /// Number of values to print
        #[arg(short = 'n', long, default_value = "8")]
        count: usize,
    },

    /// Print the length of a file in bytes
    Size {
        /// Path to the file
        file: String,
    },
}

/// Parse one segment token: `r<len>` or `o<len>`.
pub fn parse_segment(token: &str) -> Result<SegmentDesc, String> {
    let mut chars = token.chars();
    let kind = chars.next();
    let len: usize = chars
        .as_str()
        .parse()
        .map_err(|_| format!("invalid segment length in '{}'", token))?;
    match kind {
        Some('r' | 'R') => Ok(SegmentDesc::range(len)),
        Some('o' | 'O') => Ok(SegmentDesc::offset(len)),
        _ => Err(format!(
            "segment '{}' must start with 'r' (range) or 'o' (offset)",
            token
        )),
    }
}
