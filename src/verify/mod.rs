// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: build-time plans and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Build-time plans** ([`crate::Layout`]) that make an invalid layout
//!    unbuildable. If it compiles, every offset is in bounds.
//!
//! 2. **Runtime contracts** that panic in debug builds when a planned table
//!    disagrees with its own invariants. Zero-cost in release, but catch
//!    planner bugs while the tests run.

pub mod contracts;
