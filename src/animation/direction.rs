// SPDX-License-Identifier: MPL-2.0
/// Playback direction of an animation handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackDirection {
    #[default]
    Forward,
    Reverse,
}

impl PlaybackDirection {
    /// Builds a direction from a signed value; negative means reverse.
    #[must_use]
    pub fn from_sign(sign: i32) -> Self {
        if sign < 0 {
            Self::Reverse
        } else {
            Self::Forward
        }
    }

    /// Returns `1.0` for forward and `-1.0` for reverse playback.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_sign_maps_negative_to_reverse() {
        assert_eq!(PlaybackDirection::from_sign(1), PlaybackDirection::Forward);
        assert_eq!(PlaybackDirection::from_sign(0), PlaybackDirection::Forward);
        assert_eq!(PlaybackDirection::from_sign(-1), PlaybackDirection::Reverse);
    }

    #[test]
    fn factor_matches_direction() {
        assert_eq!(PlaybackDirection::Forward.factor(), 1.0);
        assert_eq!(PlaybackDirection::Reverse.factor(), -1.0);
    }
}
