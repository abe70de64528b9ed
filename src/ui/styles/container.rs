// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface behind the whole tab bar, with a thin top separator color.
pub fn tab_bar(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = Color {
        a: opacity::SURFACE,
        ..colors.surface
    };
    let separator = colors.separator;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: separator,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Pill-shaped notification badge drawn over an icon.
pub fn badge(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.badge_background;
    let text_color = colors.badge_text;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
