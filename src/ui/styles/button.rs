// SPDX-License-Identifier: MPL-2.0
//! Tab button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for one tab of the bar.
///
/// The tab itself stays flat; the active state is carried by the glyph and
/// caption color. Pressing shows a subtle brand-tinted background.
pub fn tab(colors: &ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text_color = if active { colors.active } else { colors.inactive };

    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            })),
            button::Status::Hovered if !active => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE * opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
