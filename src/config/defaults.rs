// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Reconciliation**: Periodic drift correction interval and thresholds
//! - **Initialization**: Deferred first-frame forcing after mount and load
//! - **Playback**: Speed bounds for animation handles
//! - **Presentation**: Icon footprint and badge count

// ==========================================================================
// Reconciliation Defaults
// ==========================================================================

/// Default interval between periodic drift corrections (in milliseconds).
pub const DEFAULT_RECONCILE_INTERVAL_MS: u64 = 1000;

/// Minimum reconcile interval (in milliseconds).
pub const MIN_RECONCILE_INTERVAL_MS: u64 = 100;

/// Maximum reconcile interval (in milliseconds).
pub const MAX_RECONCILE_INTERVAL_MS: u64 = 10_000;

/// Frame position above which an inactive icon counts as drifted.
pub const DEFAULT_FRAME_EPSILON: f64 = 0.1;

/// Time position above which an inactive icon counts as drifted.
pub const DEFAULT_TIME_EPSILON: f64 = 0.01;

// ==========================================================================
// Initialization Defaults
// ==========================================================================

/// Delay of the retry scheduled when a handle is registered (ms).
pub const DEFAULT_REGISTER_RETRY_MS: u64 = 100;

/// Delay of the re-check that follows the registration force and its
/// retry (ms). Registration therefore forces at 0, 50, 100 and 150 ms.
pub const DEFAULT_REGISTER_RECHECK_MS: u64 = 50;

/// Delays of the retries scheduled when an asset reports ready (ms).
/// An immediate force always precedes these.
pub const DEFAULT_READY_RETRY_MS: [u64; 3] = [10, 50, 100];

/// Upper bound for any single deferred retry delay (ms).
pub const MAX_RETRY_DELAY_MS: u64 = 1000;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Normal playback speed multiplier.
pub const DEFAULT_PLAYBACK_SPEED: f64 = 1.0;

/// Minimum playback speed multiplier.
pub const MIN_PLAYBACK_SPEED: f64 = 0.1;

/// Maximum playback speed multiplier.
pub const MAX_PLAYBACK_SPEED: f64 = 8.0;

/// Interval between animation frame ticks while any icon is playing (ms).
pub const FRAME_TICK_MS: u64 = 16;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Default edge length of an icon's animation footprint (logical pixels).
pub const DEFAULT_ICON_SIZE: f32 = 28.0;

/// Minimum icon size.
pub const MIN_ICON_SIZE: f32 = 16.0;

/// Maximum icon size.
pub const MAX_ICON_SIZE: f32 = 64.0;

/// Static count shown on the "Positions" badge.
pub const POSITIONS_BADGE_COUNT: u32 = 8;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_RECONCILE_INTERVAL_MS > 0);
    assert!(DEFAULT_RECONCILE_INTERVAL_MS >= MIN_RECONCILE_INTERVAL_MS);
    assert!(DEFAULT_RECONCILE_INTERVAL_MS <= MAX_RECONCILE_INTERVAL_MS);

    assert!(DEFAULT_REGISTER_RETRY_MS <= MAX_RETRY_DELAY_MS);
    assert!(DEFAULT_REGISTER_RECHECK_MS <= MAX_RETRY_DELAY_MS);
    assert!(DEFAULT_REGISTER_RECHECK_MS < DEFAULT_REGISTER_RETRY_MS);

    assert!(MIN_PLAYBACK_SPEED > 0.0);
    assert!(DEFAULT_PLAYBACK_SPEED >= MIN_PLAYBACK_SPEED);
    assert!(DEFAULT_PLAYBACK_SPEED <= MAX_PLAYBACK_SPEED);

    assert!(MIN_ICON_SIZE > 0.0);
    assert!(DEFAULT_ICON_SIZE >= MIN_ICON_SIZE);
    assert!(DEFAULT_ICON_SIZE <= MAX_ICON_SIZE);

    assert!(DEFAULT_FRAME_EPSILON > 0.0);
    assert!(DEFAULT_TIME_EPSILON > 0.0);
};
