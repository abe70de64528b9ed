// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection and the colors derived from it.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Colors used by the tab bar for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface: Color,
    pub separator: Color,
    /// Glyph and caption color of inactive tabs.
    pub inactive: Color,
    /// Glyph and caption color of the active tab.
    pub active: Color,
    pub badge_background: Color,
    pub badge_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            separator: palette::GRAY_100,
            inactive: palette::GRAY_400,
            active: palette::PRIMARY_600,
            badge_background: palette::ERROR_500,
            badge_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            separator: palette::GRAY_700,
            inactive: palette::GRAY_200,
            active: palette::PRIMARY_400,
            badge_background: palette::ERROR_500,
            badge_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn new(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}
