// SPDX-License-Identifier: MPL-2.0
//! Concrete animation handle driving one icon widget.

use super::{AnimationAsset, AnimationHandle, PlaybackDirection, PlaybackSpeed};
use std::time::Duration;

/// Non-looping playhead over an [`AnimationAsset`].
///
/// A player starts paused at the first frame without an asset. Until
/// [`Player::load`] is called it is inert: commands are recorded but
/// [`Player::advance`] never moves the playhead.
#[derive(Debug, Clone)]
pub struct Player {
    asset: Option<AnimationAsset>,
    /// Playhead in seconds, relative to the asset's in-point.
    time_secs: f64,
    paused: bool,
    direction: PlaybackDirection,
    speed: PlaybackSpeed,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self {
            asset: None,
            time_secs: 0.0,
            paused: true,
            direction: PlaybackDirection::Forward,
            speed: PlaybackSpeed::NORMAL,
        }
    }

    /// Attaches a parsed asset, keeping the playhead inside its range.
    pub fn load(&mut self, asset: AnimationAsset) {
        self.asset = Some(asset);
        self.time_secs = self.clamp_time(self.time_secs);
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.asset.is_some()
    }

    #[must_use]
    pub fn asset(&self) -> Option<&AnimationAsset> {
        self.asset.as_ref()
    }

    /// Whether the playhead will move on the next [`Player::advance`].
    #[must_use]
    pub fn is_playing(&self) -> bool {
        !self.paused && self.asset.is_some()
    }

    /// Playback progress in `[0, 1]`; `0` when no asset is loaded.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match &self.asset {
            Some(asset) => (self.time_secs / asset.duration_secs()).clamp(0.0, 1.0) as f32,
            None => 0.0,
        }
    }

    /// Moves the playhead by `elapsed` wall-clock time.
    ///
    /// Playback stops at either end of the range (no looping). Returns
    /// whether the player is still playing afterwards.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(duration) = self.asset.as_ref().map(AnimationAsset::duration_secs) else {
            return false;
        };
        if self.paused {
            return false;
        }

        let delta = elapsed.as_secs_f64() * self.speed.value() * self.direction.factor();
        self.time_secs += delta;

        if self.time_secs >= duration {
            self.time_secs = duration;
            self.paused = true;
        } else if self.time_secs <= 0.0 {
            self.time_secs = 0.0;
            self.paused = true;
        }

        !self.paused
    }

    fn clamp_time(&self, seconds: f64) -> f64 {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        match &self.asset {
            Some(asset) => seconds.min(asset.duration_secs()),
            None => seconds,
        }
    }
}

impl AnimationHandle for Player {
    fn current_frame(&self) -> f64 {
        match &self.asset {
            Some(asset) => self.time_secs * asset.frame_rate,
            None => 0.0,
        }
    }

    fn current_time(&self) -> f64 {
        self.time_secs
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.time_secs = self.clamp_time(seconds);
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_direction(&mut self, direction: PlaybackDirection) {
        self.direction = direction;
    }

    fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
    }
}
