// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

/// Serializes tests that mutate the process environment.
pub static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
