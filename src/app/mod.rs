// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, the persisted
//! configuration and the tab bar, and owns the window lifecycle: the tab bar
//! is mounted at boot and unmounted when the window is asked to close.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::tabs::{default_icons, Tuning};
use crate::ui::tab_bar;
use crate::ui::theming::ColorScheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Theme resolved once at boot; `System` is detected then.
    dark: bool,
    colors: ColorScheme,
    tab_bar: tab_bar::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("dark", &self.dark)
            .field("tab_bar", &self.tab_bar)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 160;

/// Builds the window settings.
///
/// Closing is intercepted so the tab bar can be unmounted first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences, mounts the tab bar and applies the optional
    /// startup selection.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr_or(&key, &key));
        }

        let dark = config.general.theme_mode.is_dark();
        let mut tab_bar = tab_bar::State::new(
            default_icons(),
            Tuning::from(&config.animation),
            config.animation.icon_size(),
            flags.assets_dir.map(PathBuf::from),
        );

        let mut tasks = vec![tab_bar.mount().map(Message::TabBar)];
        if let Some(index) = flags.select {
            tasks.push(
                tab_bar
                    .update(tab_bar::Message::TabPressed(index))
                    .map(Message::TabBar),
            );
        }

        let app = Self {
            i18n,
            dark,
            colors: ColorScheme::new(dark),
            tab_bar,
        };
        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr_or("window-title", "Animated Tabs")
    }

    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.tab_bar.subscription().map(Message::TabBar),
            subscription::close_requests(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabBar(message) => self.tab_bar.update(message).map(Message::TabBar),
            Message::WindowCloseRequested(id) => {
                self.tab_bar.unmount();
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.colors,
            tab_bar: &self.tab_bar,
        })
    }
}
