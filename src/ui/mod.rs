// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`tab_bar`] - The animated four-icon tab bar
//! - [`widgets`] - Custom Iced widgets (animated icon canvas)
//! - [`styles`] - Centralized styling (tab buttons, bar surface, badge)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod tab_bar;
pub mod theming;
pub mod widgets;
