// SPDX-License-Identifier: MPL-2.0
//! Animation asset loading.
//!
//! Assets are Lottie-style JSON documents. Only the timing header is
//! interpreted (`fr`, `ip`, `op`, `w`, `h`, `nm`); layer data is ignored.
//! References such as `/home.json` resolve against an optional on-disk
//! directory first, then against the assets embedded in the binary.

use crate::error::AssetError;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/animations/"]
struct Embedded;

/// Timing header of an animation asset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimationAsset {
    #[serde(rename = "nm", default)]
    pub name: String,
    /// Frames per second.
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    /// First frame of the animation.
    #[serde(rename = "ip")]
    pub in_point: f64,
    /// Frame at which the animation ends (exclusive).
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(rename = "w", default)]
    pub width: u32,
    #[serde(rename = "h", default)]
    pub height: u32,
}

impl AnimationAsset {
    /// Parses and validates an asset from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AssetError> {
        let asset: Self = serde_json::from_slice(bytes)?;
        asset.validate()?;
        Ok(asset)
    }

    fn validate(&self) -> Result<(), AssetError> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(AssetError::InvalidTiming(format!(
                "frame rate must be positive, got {}",
                self.frame_rate
            )));
        }
        if !self.in_point.is_finite()
            || !self.out_point.is_finite()
            || self.out_point <= self.in_point
        {
            return Err(AssetError::InvalidTiming(format!(
                "empty frame range {}..{}",
                self.in_point, self.out_point
            )));
        }
        Ok(())
    }

    /// Number of frames between the in-point and the out-point.
    #[must_use]
    pub fn duration_frames(&self) -> f64 {
        self.out_point - self.in_point
    }

    /// Playback length in seconds at normal speed.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_frames() / self.frame_rate
    }
}

/// Resolves `reference` and parses the asset it points to.
///
/// A leading `/` is ignored. When `assets_dir` is given and contains the
/// file, the on-disk copy wins over the embedded one.
pub fn load(reference: &str, assets_dir: Option<&Path>) -> Result<AnimationAsset, AssetError> {
    let name = reference.trim_start_matches('/');
    if name.is_empty() || name.contains("..") {
        return Err(AssetError::NotFound(reference.to_string()));
    }

    if let Some(dir) = assets_dir {
        let path = dir.join(name);
        if path.is_file() {
            let bytes = std::fs::read(&path)
                .map_err(|err| AssetError::NotFound(format!("{}: {}", path.display(), err)))?;
            return AnimationAsset::from_slice(&bytes);
        }
    }

    let file = Embedded::get(name).ok_or_else(|| AssetError::NotFound(reference.to_string()))?;
    AnimationAsset::from_slice(file.data.as_ref())
}
