// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rose::config::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use rose::{try_plan, try_sum, Generator, LayoutTable, SegmentDesc, SegmentList};

mod cli;
use cli::{display, Cli, Commands};

/// JSON shape of `rose plan --json`.
#[derive(Serialize)]
struct PlanReport<'a> {
    segments: &'a [SegmentDesc],
    table: &'a LayoutTable,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        None => Ok(()),
        Some(Commands::Plan {
            segments,
            source_len,
            json,
        }) => run_plan(&segments, source_len, json),
        Some(Commands::Draw {
            seed,
            key,
            block,
            count,
        }) => run_draw(seed, &key, block, count),
        Some(Commands::Size { file }) => run_size(&file),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_plan(segments: &[SegmentDesc], source_len: Option<usize>, json: bool) -> Result<()> {
    let list = SegmentList::try_new(segments)?;
    let lengths: Vec<usize> = segments.iter().map(|desc| desc.len).collect();
    let total = try_sum(0, &lengths)?;
    let source_len = source_len.unwrap_or(total);
    tracing::debug!(segments = segments.len(), total, source_len, "planning layout");

    let table = try_plan(&list, source_len)?;
    if json {
        let report = PlanReport {
            segments,
            table: &table,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!(
            "{}",
            display::render_plan(display::use_colors(), segments, &table)
        );
    }
    Ok(())
}

fn run_draw(seed: u64, key_words: &[u32], block: u64, count: usize) -> Result<()> {
    if key_words.len() > 8 {
        bail!("key has {} words, at most 8 allowed", key_words.len());
    }
    let mut key = [0u32; 8];
    key[..key_words.len()].copy_from_slice(key_words);

    let mut generator = Generator::new(seed, key);
    generator.seek_block(block);
    tracing::debug!(seed, block, count, "drawing values");

    let values: Vec<u64> = generator.take(count).collect();
    print!("{}", display::render_draws(&values));
    Ok(())
}

fn run_size(file: &str) -> Result<()> {
    let len = rose::fs::file_size(file).with_context(|| format!("cannot size {}", file))?;
    println!("{}", len);
    Ok(())
}
