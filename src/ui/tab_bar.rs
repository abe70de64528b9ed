// SPDX-License-Identifier: MPL-2.0
//! Four-icon tab bar with animated icons.
//!
//! The component owns one [`Player`] per icon (the widgets' handles) and
//! drives the [`reconciler`] from Iced messages:
//!
//! - clicks go through [`reconciler::select_tab`]
//! - mounting registers every handle and dispatches the asset loads
//! - a loaded asset forces its icon to rest, then replays the selection if
//!   that icon was clicked before it was ready
//! - deferred first-frame forces come back as [`Message::ForceFirstFrame`]
//! - a periodic [`Message::Reconcile`] runs the drift correction
//!
//! Unmounting drops the players. Every registry entry then stops resolving,
//! and the subscription goes quiet, so nothing touches a handle afterwards.

use crate::animation::{asset, AnimationAsset, AnimationHandle, Player, SharedHandle};
use crate::config::FRAME_TICK_MS;
use crate::error::AssetError;
use crate::i18n::fluent::I18n;
use crate::tabs::{
    reconciler, DeferredForce, HandleRegistry, IconDescriptor, IconId, Selection, Tuning,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedIcon;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Row, Stack, Text};
use iced::{time, Element, Length, Subscription, Task};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Contextual data needed to render the tab bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

/// Messages handled by the tab bar.
#[derive(Debug, Clone)]
pub enum Message {
    /// The tab at this index was clicked.
    TabPressed(usize),
    /// An icon's asset finished loading (or failed to).
    AssetLoaded(IconId, Result<AnimationAsset, AssetError>),
    /// A deferred first-frame force came due.
    ForceFirstFrame(IconId),
    /// Periodic drift correction tick.
    Reconcile(Instant),
    /// Animation frame tick while some icon is playing.
    Frame(Instant),
}

/// Tab bar state.
pub struct State {
    icons: Vec<IconDescriptor>,
    selection: Selection,
    registry: HandleRegistry,
    /// One player per icon, in display order. Empty while unmounted.
    players: Vec<Rc<RefCell<Player>>>,
    mounted: bool,
    tuning: Tuning,
    icon_size: f32,
    assets_dir: Option<PathBuf>,
    last_frame: Option<Instant>,
    /// Selected icon whose asset was not loaded when it was pressed.
    pending_play: Option<IconId>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("tab_bar::State")
            .field("selection", &self.selection)
            .field("mounted", &self.mounted)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(
        icons: Vec<IconDescriptor>,
        tuning: Tuning,
        icon_size: f32,
        assets_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            icons,
            selection: Selection::None,
            registry: HandleRegistry::new(),
            players: Vec::new(),
            mounted: false,
            tuning,
            icon_size,
            assets_dir,
            last_frame: None,
            pending_play: None,
        }
    }

    /// Creates the icon players, registers their handles and starts loading
    /// the assets. Calling it on a mounted bar does nothing.
    pub fn mount(&mut self) -> Task<Message> {
        if self.mounted {
            return Task::none();
        }
        self.mounted = true;
        tracing::info!(icons = self.icons.len(), "mounting tab bar");

        let mut tasks = Vec::with_capacity(self.icons.len() * 2);
        for descriptor in &self.icons {
            let player = Rc::new(RefCell::new(Player::new()));
            let handle: SharedHandle = player.clone();
            self.players.push(player);

            let deferred = reconciler::register_handle(
                &mut self.registry,
                descriptor.id,
                Some(&handle),
                &self.tuning,
            );
            tasks.push(schedule(deferred));
            tasks.push(load_asset(
                descriptor.id,
                descriptor.asset,
                self.assets_dir.clone(),
            ));
        }

        Task::batch(tasks)
    }

    /// Tears the bar down: players are dropped and the periodic work stops.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        tracing::info!("unmounting tab bar");
        self.mounted = false;
        self.players.clear();
        self.last_frame = None;
        self.pending_play = None;
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if !self.mounted {
            // Late asset loads, retries and ticks after teardown
            return Task::none();
        }

        match message {
            Message::TabPressed(index) => {
                self.selection =
                    reconciler::select_tab(&self.registry, &self.icons, self.selection, index);
                self.last_frame = None;
                self.pending_play = self
                    .selection
                    .index()
                    .filter(|&selected| !self.is_loaded(selected))
                    .and_then(|selected| self.icons.get(selected))
                    .map(|descriptor| descriptor.id);
                Task::none()
            }
            Message::AssetLoaded(icon, Ok(animation)) => {
                let Some(player) = self.player(icon) else {
                    return Task::none();
                };
                match player.try_borrow_mut() {
                    Ok(mut player) => player.load(animation),
                    Err(_) => {
                        tracing::debug!(%icon, "player busy, dropping loaded asset");
                        return Task::none();
                    }
                }
                tracing::debug!(%icon, "animation ready");
                let retries = reconciler::on_ready(&self.registry, icon, &self.tuning);

                if self.pending_play == Some(icon) {
                    self.pending_play = None;
                    if let Some(index) = self.selection.index() {
                        tracing::debug!(%icon, "replaying selection made before load");
                        self.selection = reconciler::select_tab(
                            &self.registry,
                            &self.icons,
                            self.selection,
                            index,
                        );
                    }
                }
                schedule(retries)
            }
            Message::AssetLoaded(icon, Err(err)) => {
                tracing::debug!(%icon, error = %err, "animation failed to load");
                Task::none()
            }
            Message::ForceFirstFrame(icon) => {
                reconciler::apply_deferred(&self.registry, &self.icons, self.selection, icon);
                Task::none()
            }
            Message::Reconcile(_) => {
                let report = reconciler::correct_drift(
                    &self.registry,
                    &self.icons,
                    self.selection,
                    &self.tuning,
                );
                if report.corrected > 0 {
                    tracing::debug!(
                        inspected = report.inspected,
                        corrected = report.corrected,
                        "drift corrected"
                    );
                }
                Task::none()
            }
            Message::Frame(now) => {
                let elapsed = self
                    .last_frame
                    .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
                self.advance(elapsed);
                self.last_frame = self.is_playing().then_some(now);
                Task::none()
            }
        }
    }

    /// Moves every playing icon forward by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        for player in &self.players {
            if let Ok(mut player) = player.try_borrow_mut() {
                player.advance(elapsed);
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if !self.has_periodic_task() {
            return Subscription::none();
        }

        // Keyed on the selection and icon count so the timer restarts
        // whenever either changes.
        let reconcile = time::every(self.tuning.reconcile_interval)
            .with((self.selection, self.icons.len()))
            .map(|(_, at)| Message::Reconcile(at));

        if self.is_playing() {
            let frames = time::every(Duration::from_millis(FRAME_TICK_MS)).map(Message::Frame);
            Subscription::batch([reconcile, frames])
        } else {
            reconcile
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let tabs = self
            .icons
            .iter()
            .enumerate()
            .fold(Row::new().spacing(spacing::XS), |row, (index, descriptor)| {
                row.push(self.view_tab(&ctx, index, descriptor))
            });

        container(tabs.align_y(Vertical::Center))
            .padding(spacing::XS)
            .style(styles::container::tab_bar(ctx.colors))
            .into()
    }

    fn view_tab<'a>(
        &'a self,
        ctx: &ViewContext<'a>,
        index: usize,
        descriptor: &'a IconDescriptor,
    ) -> Element<'a, Message> {
        let active = self.selection.is_selected(index);
        let color = if active {
            ctx.colors.active
        } else {
            ctx.colors.inactive
        };

        let icon = AnimatedIcon::new(descriptor.glyph, color, self.icon_size)
            .with_progress(self.progress(index))
            .into_element();

        // Large icons grow the slot so the badge still overhangs the corner
        let slot_size = sizing::ICON_SLOT.max(self.icon_size + spacing::SM);
        let mut slot = Stack::new()
            .width(Length::Fixed(slot_size))
            .height(Length::Fixed(slot_size))
            .push(container(icon).center(Length::Fill));

        if let Some(count) = descriptor.badge {
            let badge = container(Text::new(count.to_string()).size(typography::BADGE))
                .padding([0.0, spacing::XXS])
                .height(Length::Fixed(sizing::BADGE_HEIGHT))
                .align_y(Vertical::Center)
                .style(styles::container::badge(ctx.colors));
            slot = slot.push(
                container(badge)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Right)
                    .align_y(Vertical::Top),
            );
        }

        let caption = Text::new(ctx.i18n.tr_or(descriptor.title_key, descriptor.title))
            .size(typography::CAPTION);

        let content = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(slot)
            .push(caption);

        button(content)
            .width(Length::Fixed(sizing::TAB_MIN_WIDTH.max(slot_size + spacing::MD)))
            .padding(spacing::XXS)
            .on_press(Message::TabPressed(index))
            .style(styles::button::tab(ctx.colors, active))
            .into()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the periodic drift correction is subscribed.
    #[must_use]
    pub fn has_periodic_task(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn icons(&self) -> &[IconDescriptor] {
        &self.icons
    }

    /// Whether any icon is currently animating.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.try_borrow().is_ok_and(|player| player.is_playing()))
    }

    /// Playback progress of the icon at `index`, `0.0` when unavailable.
    #[must_use]
    pub fn progress(&self, index: usize) -> f32 {
        self.players
            .get(index)
            .and_then(|player| player.try_borrow().ok().map(|player| player.progress()))
            .unwrap_or(0.0)
    }

    /// Current frame of the icon at `index`, if it has a live player.
    #[must_use]
    pub fn current_frame(&self, index: usize) -> Option<f64> {
        let descriptor = self.icons.get(index)?;
        let handle = self.registry.get(descriptor.id)?;
        let frame = handle.try_borrow().ok()?.current_frame();
        Some(frame)
    }

    /// Whether the icon at `index` is paused, if it has a live player.
    #[must_use]
    pub fn is_paused(&self, index: usize) -> Option<bool> {
        let descriptor = self.icons.get(index)?;
        let handle = self.registry.get(descriptor.id)?;
        let paused = handle.try_borrow().ok()?.is_paused();
        Some(paused)
    }

    fn is_loaded(&self, index: usize) -> bool {
        self.players
            .get(index)
            .is_some_and(|player| player.try_borrow().is_ok_and(|player| player.is_loaded()))
    }

    fn player(&self, icon: IconId) -> Option<&Rc<RefCell<Player>>> {
        let index = self.icons.iter().position(|d| d.id == icon)?;
        self.players.get(index)
    }
}

/// Turns deferred forces into timer tasks.
fn schedule(deferred: Vec<DeferredForce>) -> Task<Message> {
    Task::batch(deferred.into_iter().map(|force| {
        let DeferredForce { icon, delay } = force;
        Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::ForceFirstFrame(icon),
        )
    }))
}

fn load_asset(icon: IconId, reference: &'static str, assets_dir: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move { asset::load(reference, assets_dir.as_deref()) },
        move |result| Message::AssetLoaded(icon, result),
    )
}
