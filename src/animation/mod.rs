// SPDX-License-Identifier: MPL-2.0
//! Animation playback capability and a minimal playhead engine.
//!
//! The tab bar only ever talks to animations through [`AnimationHandle`],
//! so the reconciler can be exercised against a fake in tests. [`Player`]
//! is the concrete handle used by the icon widgets: it reads the timing
//! header of a Lottie-style JSON asset and advances a playhead, while the
//! drawing itself is left to [`crate::ui::widgets::AnimatedIcon`].

pub mod asset;
mod direction;
mod player;
mod speed;

pub use asset::AnimationAsset;
pub use direction::PlaybackDirection;
pub use player::Player;
pub use speed::PlaybackSpeed;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Control surface of one animation instance.
///
/// Positions are measured from the asset's in-point: time `0` is always
/// the first frame.
pub trait AnimationHandle {
    /// Current playhead position in frames.
    fn current_frame(&self) -> f64;

    /// Current playhead position in seconds.
    fn current_time(&self) -> f64;

    /// Seeks the playhead to `seconds` (`0.0` = first frame).
    fn set_current_time(&mut self, seconds: f64);

    /// Resumes playback in the configured direction.
    fn play(&mut self);

    /// Stops advancing the playhead.
    fn pause(&mut self);

    /// Whether the playhead is currently stopped.
    fn is_paused(&self) -> bool;

    fn set_direction(&mut self, direction: PlaybackDirection);

    fn set_speed(&mut self, speed: PlaybackSpeed);
}

/// Owning reference held by an icon widget.
pub type SharedHandle = Rc<RefCell<dyn AnimationHandle>>;

/// Non-owning reference held by the handle registry.
pub type WeakHandle = Weak<RefCell<dyn AnimationHandle>>;
