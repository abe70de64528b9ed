// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[animation]` - Reconciliation interval, retry schedule, drift thresholds, icon size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set the `ANIMATED_TABS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use animated_tabs::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow down the periodic correction pass
//! config.animation.reconcile_interval_ms = Some(2000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Animation timing and drift-correction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Interval between periodic drift corrections (milliseconds).
    #[serde(
        default = "default_reconcile_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reconcile_interval_ms: Option<u64>,

    /// Delay of the retry scheduled when a handle is registered (milliseconds).
    #[serde(
        default = "default_register_retry_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub register_retry_ms: Option<u64>,

    /// Delay of the re-check after the registration force and after its
    /// retry (milliseconds).
    #[serde(
        default = "default_register_recheck_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub register_recheck_ms: Option<u64>,

    /// Delays of the retries scheduled when an asset reports ready (milliseconds).
    #[serde(
        default = "default_ready_retry_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub ready_retry_ms: Option<Vec<u64>>,

    /// Frame position above which an inactive icon is reset.
    #[serde(
        default = "default_frame_epsilon",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_epsilon: Option<f64>,

    /// Time position above which an inactive icon is reset.
    #[serde(
        default = "default_time_epsilon",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_epsilon: Option<f64>,

    /// Edge length of each icon's animation footprint.
    #[serde(default = "default_icon_size", skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<f32>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reconcile_interval_ms: default_reconcile_interval_ms(),
            register_retry_ms: default_register_retry_ms(),
            register_recheck_ms: default_register_recheck_ms(),
            ready_retry_ms: default_ready_retry_ms(),
            frame_epsilon: default_frame_epsilon(),
            time_epsilon: default_time_epsilon(),
            icon_size: default_icon_size(),
        }
    }
}

impl AnimationConfig {
    /// Periodic reconcile interval, clamped to the supported range.
    #[must_use]
    pub fn reconcile_interval(&self) -> Duration {
        let ms = self
            .reconcile_interval_ms
            .unwrap_or(DEFAULT_RECONCILE_INTERVAL_MS)
            .clamp(MIN_RECONCILE_INTERVAL_MS, MAX_RECONCILE_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Retry delay used after registering a handle.
    #[must_use]
    pub fn register_retry(&self) -> Duration {
        let ms = self
            .register_retry_ms
            .unwrap_or(DEFAULT_REGISTER_RETRY_MS)
            .min(MAX_RETRY_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Re-check delay following each registration force.
    #[must_use]
    pub fn register_recheck(&self) -> Duration {
        let ms = self
            .register_recheck_ms
            .unwrap_or(DEFAULT_REGISTER_RECHECK_MS)
            .min(MAX_RETRY_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Retry delays used after an asset reports ready, sorted ascending.
    #[must_use]
    pub fn ready_retries(&self) -> Vec<Duration> {
        let mut delays: Vec<u64> = self
            .ready_retry_ms
            .clone()
            .unwrap_or_else(|| DEFAULT_READY_RETRY_MS.to_vec())
            .into_iter()
            .map(|ms| ms.min(MAX_RETRY_DELAY_MS))
            .collect();
        delays.sort_unstable();
        delays.dedup();
        delays.into_iter().map(Duration::from_millis).collect()
    }

    /// Frame drift threshold; non-positive or non-finite values fall back to the default.
    #[must_use]
    pub fn frame_epsilon(&self) -> f64 {
        positive_or(self.frame_epsilon, DEFAULT_FRAME_EPSILON)
    }

    /// Time drift threshold; non-positive or non-finite values fall back to the default.
    #[must_use]
    pub fn time_epsilon(&self) -> f64 {
        positive_or(self.time_epsilon, DEFAULT_TIME_EPSILON)
    }

    /// Icon footprint, clamped to the supported range.
    #[must_use]
    pub fn icon_size(&self) -> f32 {
        self.icon_size
            .unwrap_or(DEFAULT_ICON_SIZE)
            .clamp(MIN_ICON_SIZE, MAX_ICON_SIZE)
    }
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => fallback,
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Animation and reconciliation settings.
    #[serde(default)]
    pub animation: AnimationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_reconcile_interval_ms() -> Option<u64> {
    Some(DEFAULT_RECONCILE_INTERVAL_MS)
}

fn default_register_retry_ms() -> Option<u64> {
    Some(DEFAULT_REGISTER_RETRY_MS)
}

fn default_register_recheck_ms() -> Option<u64> {
    Some(DEFAULT_REGISTER_RECHECK_MS)
}

fn default_ready_retry_ms() -> Option<Vec<u64>> {
    Some(DEFAULT_READY_RETRY_MS.to_vec())
}

fn default_frame_epsilon() -> Option<f64> {
    Some(DEFAULT_FRAME_EPSILON)
}

fn default_time_epsilon() -> Option<f64> {
    Some(DEFAULT_TIME_EPSILON)
}

fn default_icon_size() -> Option<f32> {
    Some(DEFAULT_ICON_SIZE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key describing what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("warning-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            animation: AnimationConfig {
                reconcile_interval_ms: Some(2500),
                ready_retry_ms: Some(vec![5, 20]),
                ..AnimationConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[animation\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("warning-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("valid toml");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.animation, AnimationConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid toml");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn default_animation_config_matches_defaults() {
        let animation = AnimationConfig::default();
        assert_eq!(animation.reconcile_interval(), Duration::from_secs(1));
        assert_eq!(animation.register_retry(), Duration::from_millis(100));
        assert_eq!(animation.register_recheck(), Duration::from_millis(50));
        assert_eq!(
            animation.ready_retries(),
            vec![
                Duration::from_millis(10),
                Duration::from_millis(50),
                Duration::from_millis(100)
            ]
        );
        assert_eq!(animation.icon_size(), DEFAULT_ICON_SIZE);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let animation = AnimationConfig {
            reconcile_interval_ms: Some(1),
            register_retry_ms: Some(60_000),
            register_recheck_ms: Some(5_000),
            ready_retry_ms: Some(vec![100, 10, 10, 99_999]),
            frame_epsilon: Some(-1.0),
            time_epsilon: Some(f64::NAN),
            icon_size: Some(500.0),
        };

        assert_eq!(
            animation.reconcile_interval(),
            Duration::from_millis(MIN_RECONCILE_INTERVAL_MS)
        );
        assert_eq!(
            animation.register_retry(),
            Duration::from_millis(MAX_RETRY_DELAY_MS)
        );
        assert_eq!(
            animation.register_recheck(),
            Duration::from_millis(MAX_RETRY_DELAY_MS)
        );
        assert_eq!(
            animation.ready_retries(),
            vec![
                Duration::from_millis(10),
                Duration::from_millis(100),
                Duration::from_millis(MAX_RETRY_DELAY_MS)
            ]
        );
        assert_eq!(animation.frame_epsilon(), DEFAULT_FRAME_EPSILON);
        assert_eq!(animation.time_epsilon(), DEFAULT_TIME_EPSILON);
        assert_eq!(animation.icon_size(), MAX_ICON_SIZE);
    }
}
