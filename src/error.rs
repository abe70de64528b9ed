// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Asset(AssetError),
}

/// Failures reported by the animation collaborator while loading an icon.
///
/// These never reach the user: the tab bar discards them at the boundary
/// and leaves the affected icon inert.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    /// No embedded or on-disk asset matches the reference.
    NotFound(String),

    /// The asset is not valid animation JSON.
    Parse(String),

    /// The timing header is unusable (non-positive frame rate, empty range).
    InvalidTiming(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound(reference) => write!(f, "Asset not found: {}", reference),
            AssetError::Parse(msg) => write!(f, "Invalid animation data: {}", msg),
            AssetError::InvalidTiming(msg) => write!(f, "Invalid animation timing: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Error::Asset(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AssetError {
    fn from(err: serde_json::Error) -> Self {
        AssetError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
