// SPDX-License-Identifier: MPL-2.0
//! Playback speed domain type for animation handles.

use crate::config::{DEFAULT_PLAYBACK_SPEED, MAX_PLAYBACK_SPEED, MIN_PLAYBACK_SPEED};

/// Playback speed multiplier, guaranteed to be within the valid range (0.1x - 8.0x).
///
/// # Example
///
/// ```
/// use animated_tabs::animation::PlaybackSpeed;
///
/// let speed = PlaybackSpeed::new(2.0);
/// assert_eq!(speed.value(), 2.0);
///
/// // Values outside range are clamped
/// let too_fast = PlaybackSpeed::new(100.0);
/// assert_eq!(too_fast.value(), 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Normal speed (1.0x).
    pub const NORMAL: Self = Self(DEFAULT_PLAYBACK_SPEED);

    /// Creates a new playback speed, clamping to valid range.
    /// Non-finite input falls back to normal speed.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        if !speed.is_finite() {
            return Self::NORMAL;
        }
        Self(speed.clamp(MIN_PLAYBACK_SPEED, MAX_PLAYBACK_SPEED))
    }

    /// Returns the speed value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self::NORMAL
    }
}
