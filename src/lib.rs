// SPDX-License-Identifier: MPL-2.0
//! `animated_tabs` is a four-icon tab bar with vector icon animations, built
//! with the Iced GUI framework.
//!
//! The interesting part lives in [`tabs`]: a small reconciler that keeps
//! each icon's animation playhead consistent with the tab selection, through
//! click handling, startup forcing with deferred retries, and a periodic
//! drift correction pass.

#![doc(html_root_url = "https://docs.rs/animated_tabs/0.1.0")]

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod tabs;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
