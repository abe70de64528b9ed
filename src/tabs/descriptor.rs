// SPDX-License-Identifier: MPL-2.0
//! Static description of the icons shown in the tab bar.

use crate::config::POSITIONS_BADGE_COUNT;
use std::fmt;

/// Stable identifier of an icon, used as the registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconId(&'static str);

impl IconId {
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Vector shape drawn for an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Home,
    Positions,
    Points,
    Account,
}

/// One tab of the bar. Immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDescriptor {
    pub id: IconId,
    /// Asset reference passed through to the animation loader.
    pub asset: &'static str,
    /// Display title, also the caption fallback when no translation exists.
    pub title: &'static str,
    /// Fluent key of the translated caption.
    pub title_key: &'static str,
    pub glyph: Glyph,
    /// Static count rendered as a badge over the icon.
    pub badge: Option<u32>,
}

/// The four icons of the tab bar, in display order.
#[must_use]
pub fn default_icons() -> Vec<IconDescriptor> {
    vec![
        IconDescriptor {
            id: IconId::new("icon1"),
            asset: "/home.json",
            title: "Home",
            title_key: "tab-home",
            glyph: Glyph::Home,
            badge: None,
        },
        IconDescriptor {
            id: IconId::new("icon2"),
            asset: "/positions.json",
            title: "Positions",
            title_key: "tab-positions",
            glyph: Glyph::Positions,
            badge: Some(POSITIONS_BADGE_COUNT),
        },
        IconDescriptor {
            id: IconId::new("icon3"),
            asset: "/points.json",
            title: "Points",
            title_key: "tab-points",
            glyph: Glyph::Points,
            badge: None,
        },
        IconDescriptor {
            id: IconId::new("icon4"),
            asset: "/account.json",
            title: "Account",
            title_key: "tab-account",
            glyph: Glyph::Account,
            badge: None,
        },
    ]
}
