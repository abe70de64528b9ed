// SPDX-License-Identifier: MPL-2.0
//! Keeps animation playheads consistent with the tab selection.
//!
//! Every function here is synchronous and talks to handles only through
//! the registry, so each call runs to completion before the next UI event.
//! Deferred work is returned as [`DeferredForce`] values for the caller to
//! schedule; applying one is idempotent, so late or duplicated retries
//! converge on the same paused-at-first-frame state.

use super::{HandleRegistry, IconDescriptor, IconId, Selection};
use crate::animation::{AnimationHandle, PlaybackDirection, PlaybackSpeed, SharedHandle};
use crate::config::{
    AnimationConfig, DEFAULT_FRAME_EPSILON, DEFAULT_READY_RETRY_MS,
    DEFAULT_RECONCILE_INTERVAL_MS, DEFAULT_REGISTER_RECHECK_MS, DEFAULT_REGISTER_RETRY_MS,
    DEFAULT_TIME_EPSILON,
};
use std::time::Duration;

/// Timing and threshold knobs of the reconciler.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    pub reconcile_interval: Duration,
    pub register_retry: Duration,
    /// Follow-up check after the registration force and after its retry.
    pub register_recheck: Duration,
    pub ready_retries: Vec<Duration>,
    pub frame_epsilon: f64,
    pub time_epsilon: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            reconcile_interval: Duration::from_millis(DEFAULT_RECONCILE_INTERVAL_MS),
            register_retry: Duration::from_millis(DEFAULT_REGISTER_RETRY_MS),
            register_recheck: Duration::from_millis(DEFAULT_REGISTER_RECHECK_MS),
            ready_retries: DEFAULT_READY_RETRY_MS
                .iter()
                .copied()
                .map(Duration::from_millis)
                .collect(),
            frame_epsilon: DEFAULT_FRAME_EPSILON,
            time_epsilon: DEFAULT_TIME_EPSILON,
        }
    }
}

impl From<&AnimationConfig> for Tuning {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            reconcile_interval: config.reconcile_interval(),
            register_retry: config.register_retry(),
            register_recheck: config.register_recheck(),
            ready_retries: config.ready_retries(),
            frame_epsilon: config.frame_epsilon(),
            time_epsilon: config.time_epsilon(),
        }
    }
}

/// A first-frame force to apply to `icon` once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredForce {
    pub icon: IconId,
    pub delay: Duration,
}

/// Outcome of one periodic correction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DriftReport {
    /// Icons whose handle resolved and was read.
    pub inspected: usize,
    /// Inactive icons that had drifted and were reset.
    pub corrected: usize,
}

/// Seeks the handle for `icon` to the first frame and pauses it.
///
/// Returns whether a handle was touched. A missing handle or one that is
/// already borrowed elsewhere is skipped silently.
pub fn force_to_first_frame(registry: &HandleRegistry, icon: IconId) -> bool {
    let Some(handle) = registry.get(icon) else {
        return false;
    };
    let Ok(mut handle) = handle.try_borrow_mut() else {
        tracing::debug!(%icon, "handle busy, skipping first-frame force");
        return false;
    };
    rest(&mut *handle);
    true
}

fn rest(handle: &mut dyn AnimationHandle) {
    handle.set_current_time(0.0);
    handle.pause();
}

/// Activates the tab at `new_index` and returns the selection to commit.
///
/// The previous tab (if any, and if different) snaps back to its first
/// frame before the new tab restarts from frame 0 at normal speed.
/// Selecting the already active tab restarts its animation. An index
/// outside `icons` leaves everything untouched.
pub fn select_tab(
    registry: &HandleRegistry,
    icons: &[IconDescriptor],
    previous: Selection,
    new_index: usize,
) -> Selection {
    let Some(target) = icons.get(new_index) else {
        tracing::debug!(new_index, count = icons.len(), "ignoring out-of-range tab");
        return previous;
    };

    if let Some(prev) = previous.index().filter(|&prev| prev != new_index) {
        if let Some(descriptor) = icons.get(prev) {
            force_to_first_frame(registry, descriptor.id);
        }
    }

    let selection = Selection::Tab(new_index);
    let Some(handle) = registry.get(target.id) else {
        tracing::debug!(icon = %target.id, "no handle registered yet");
        return selection;
    };
    if let Ok(mut handle) = handle.try_borrow_mut() {
        handle.set_direction(PlaybackDirection::Forward);
        handle.set_speed(PlaybackSpeed::NORMAL);
        handle.set_current_time(0.0);
        handle.play();
    } else {
        tracing::debug!(icon = %target.id, "handle busy, skipping play");
    }

    selection
}

/// Registers a freshly produced handle and forces it to rest.
///
/// The force is unconditional, even for the selected icon. Returns the
/// deferred forces to schedule: a re-check, the retry, and the retry's own
/// re-check, in ascending order. Passing `None` (widget teardown) does
/// nothing.
pub fn register_handle(
    registry: &mut HandleRegistry,
    icon: IconId,
    handle: Option<&SharedHandle>,
    tuning: &Tuning,
) -> Vec<DeferredForce> {
    if !registry.register(icon, handle) {
        return Vec::new();
    }
    force_to_first_frame(registry, icon);

    let mut delays = vec![
        tuning.register_recheck,
        tuning.register_retry,
        tuning.register_retry + tuning.register_recheck,
    ];
    delays.sort_unstable();
    delays.dedup();
    delays
        .into_iter()
        .map(|delay| DeferredForce { icon, delay })
        .collect()
}

/// Reacts to the asset of `icon` becoming ready.
///
/// Forces rest immediately, whatever the selection, and returns the retry
/// schedule. Unregistered icons are ignored.
pub fn on_ready(registry: &HandleRegistry, icon: IconId, tuning: &Tuning) -> Vec<DeferredForce> {
    if !registry.contains(icon) {
        return Vec::new();
    }
    force_to_first_frame(registry, icon);
    tuning
        .ready_retries
        .iter()
        .map(|&delay| DeferredForce { icon, delay })
        .collect()
}

/// Applies a scheduled first-frame force once its delay has elapsed.
///
/// Unlike the immediate forces of [`register_handle`] and [`on_ready`],
/// this one skips the selected icon: a retry landing after a click must
/// not stop the animation the click started. Returns whether a handle was
/// touched.
pub fn apply_deferred(
    registry: &HandleRegistry,
    icons: &[IconDescriptor],
    selection: Selection,
    icon: IconId,
) -> bool {
    let selected = selection
        .index()
        .and_then(|index| icons.get(index))
        .is_some_and(|descriptor| descriptor.id == icon);
    if selected {
        return false;
    }
    force_to_first_frame(registry, icon)
}

/// Periodic safety net: resets every inactive icon that drifted away from rest.
///
/// The active icon is never touched, whatever its position.
pub fn correct_drift(
    registry: &HandleRegistry,
    icons: &[IconDescriptor],
    selection: Selection,
    tuning: &Tuning,
) -> DriftReport {
    let mut report = DriftReport::default();

    for (index, descriptor) in icons.iter().enumerate() {
        let Some(handle) = registry.get(descriptor.id) else {
            continue;
        };
        let Ok(mut handle) = handle.try_borrow_mut() else {
            continue;
        };
        report.inspected += 1;

        if selection.is_selected(index) {
            continue;
        }

        let frame = handle.current_frame();
        let time = handle.current_time();
        if frame > tuning.frame_epsilon || time > tuning.time_epsilon {
            tracing::debug!(icon = %descriptor.id, frame, time, "correcting drift");
            rest(&mut *handle);
            report.corrected += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::default_icons;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Handle that records commands and reports whatever position it is given.
    #[derive(Debug, Default)]
    struct FakeHandle {
        time: f64,
        frame: f64,
        paused: bool,
        direction: Option<PlaybackDirection>,
        speed: Option<PlaybackSpeed>,
        plays: usize,
    }

    impl FakeHandle {
        fn drifted(time: f64) -> Self {
            Self {
                time,
                frame: time * 30.0,
                ..Self::default()
            }
        }
    }

    impl AnimationHandle for FakeHandle {
        fn current_frame(&self) -> f64 {
            self.frame
        }
        fn current_time(&self) -> f64 {
            self.time
        }
        fn set_current_time(&mut self, seconds: f64) {
            self.time = seconds;
            self.frame = seconds * 30.0;
        }
        fn play(&mut self) {
            self.paused = false;
            self.plays += 1;
        }
        fn pause(&mut self) {
            self.paused = true;
        }
        fn is_paused(&self) -> bool {
            self.paused
        }
        fn set_direction(&mut self, direction: PlaybackDirection) {
            self.direction = Some(direction);
        }
        fn set_speed(&mut self, speed: PlaybackSpeed) {
            self.speed = Some(speed);
        }
    }

    struct Fixture {
        icons: Vec<IconDescriptor>,
        registry: HandleRegistry,
        handles: Vec<Rc<RefCell<FakeHandle>>>,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with(|_| FakeHandle::default())
        }

        fn with(make: impl Fn(usize) -> FakeHandle) -> Self {
            let icons = default_icons();
            let mut registry = HandleRegistry::new();
            let handles: Vec<_> = (0..icons.len())
                .map(|index| Rc::new(RefCell::new(make(index))))
                .collect();
            for (icon, handle) in icons.iter().zip(&handles) {
                let shared: SharedHandle = handle.clone();
                registry.register(icon.id, Some(&shared));
            }
            Self {
                icons,
                registry,
                handles,
            }
        }

        fn at_rest(&self, index: usize) -> bool {
            let handle = self.handles[index].borrow();
            handle.time == 0.0 && handle.paused
        }
    }

    #[test]
    fn select_tab_plays_new_tab_from_first_frame() {
        let fx = Fixture::with(|_| FakeHandle::drifted(0.4));
        let selection = select_tab(&fx.registry, &fx.icons, Selection::None, 1);

        assert_eq!(selection, Selection::Tab(1));
        let handle = fx.handles[1].borrow();
        assert_eq!(handle.time, 0.0);
        assert!(!handle.paused);
        assert_eq!(handle.direction, Some(PlaybackDirection::Forward));
        assert_eq!(handle.speed, Some(PlaybackSpeed::NORMAL));
        assert_eq!(handle.plays, 1);
    }

    #[test]
    fn select_tab_snaps_previous_tab_back() {
        let fx = Fixture::new();
        let selection = select_tab(&fx.registry, &fx.icons, Selection::None, 1);
        fx.handles[1].borrow_mut().set_current_time(0.6);

        let selection = select_tab(&fx.registry, &fx.icons, selection, 2);

        assert_eq!(selection, Selection::Tab(2));
        assert!(fx.at_rest(1));
        assert!(!fx.handles[2].borrow().paused);
    }

    #[test]
    fn reselecting_same_tab_restarts_it() {
        let fx = Fixture::new();
        let selection = select_tab(&fx.registry, &fx.icons, Selection::None, 0);
        fx.handles[0].borrow_mut().set_current_time(0.8);

        let selection = select_tab(&fx.registry, &fx.icons, selection, 0);

        assert_eq!(selection, Selection::Tab(0));
        let handle = fx.handles[0].borrow();
        assert_eq!(handle.time, 0.0);
        assert!(!handle.paused);
        assert_eq!(handle.plays, 2);
    }

    #[test]
    fn select_tab_tolerates_missing_handles() {
        let icons = default_icons();
        let registry = HandleRegistry::new();
        let selection = select_tab(&registry, &icons, Selection::Tab(0), 3);
        assert_eq!(selection, Selection::Tab(3));
    }

    #[test]
    fn out_of_range_index_keeps_previous_selection() {
        let fx = Fixture::new();
        let selection = select_tab(&fx.registry, &fx.icons, Selection::Tab(1), 9);
        assert_eq!(selection, Selection::Tab(1));
        assert_eq!(fx.handles[1].borrow().plays, 0);
    }

    #[test]
    fn busy_handle_is_skipped_without_panicking() {
        let fx = Fixture::new();
        let _guard = fx.handles[2].borrow_mut();
        assert!(!force_to_first_frame(&fx.registry, fx.icons[2].id));
        let selection = select_tab(&fx.registry, &fx.icons, Selection::None, 2);
        assert_eq!(selection, Selection::Tab(2));
    }

    #[test]
    fn register_handle_forces_rest_and_schedules_rechecks() {
        let icons = default_icons();
        let mut registry = HandleRegistry::new();
        let fake = Rc::new(RefCell::new(FakeHandle::drifted(0.5)));
        let shared: SharedHandle = fake.clone();
        let tuning = Tuning::default();

        let deferred = register_handle(&mut registry, icons[0].id, Some(&shared), &tuning);

        let delays: Vec<_> = deferred.iter().map(|force| force.delay.as_millis()).collect();
        assert_eq!(delays, vec![50, 100, 150]);
        assert!(deferred.iter().all(|force| force.icon == icons[0].id));
        assert_eq!(fake.borrow().time, 0.0);
        assert!(fake.borrow().paused);
    }

    #[test]
    fn register_schedule_collapses_when_recheck_matches_retry() {
        let icons = default_icons();
        let mut registry = HandleRegistry::new();
        let shared: SharedHandle = Rc::new(RefCell::new(FakeHandle::default()));
        let tuning = Tuning {
            register_retry: Duration::from_millis(40),
            register_recheck: Duration::from_millis(40),
            ..Tuning::default()
        };

        let deferred = register_handle(&mut registry, icons[1].id, Some(&shared), &tuning);

        let delays: Vec<_> = deferred.iter().map(|force| force.delay.as_millis()).collect();
        assert_eq!(delays, vec![40, 80]);
    }

    #[test]
    fn registering_the_selected_icon_still_forces_rest() {
        let icons = default_icons();
        let mut registry = HandleRegistry::new();
        let fake = Rc::new(RefCell::new(FakeHandle::drifted(0.5)));
        let shared: SharedHandle = fake.clone();
        let tuning = Tuning::default();
        let selection = Selection::Tab(0);

        let deferred = register_handle(&mut registry, icons[0].id, Some(&shared), &tuning);
        assert_eq!(fake.borrow().time, 0.0);
        assert!(fake.borrow().paused);

        // Playback resumes behind the reconciler's back before the asset is ready
        fake.borrow_mut().set_current_time(0.5);
        fake.borrow_mut().play();
        for force in deferred {
            apply_deferred(&registry, &icons, selection, force.icon);
        }
        for force in on_ready(&registry, icons[0].id, &tuning) {
            apply_deferred(&registry, &icons, selection, force.icon);
        }

        assert_eq!(fake.borrow().time, 0.0);
        assert!(fake.borrow().paused);
    }

    #[test]
    fn register_handle_with_none_is_a_no_op() {
        let icons = default_icons();
        let mut registry = HandleRegistry::new();
        let deferred = register_handle(&mut registry, icons[0].id, None, &Tuning::default());
        assert!(deferred.is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn on_ready_forces_immediately_and_schedules_retries() {
        let fx = Fixture::with(|_| FakeHandle::drifted(0.3));
        let tuning = Tuning::default();

        let deferred = on_ready(&fx.registry, fx.icons[3].id, &tuning);

        assert!(fx.at_rest(3));
        let delays: Vec<_> = deferred.iter().map(|force| force.delay).collect();
        assert_eq!(delays, tuning.ready_retries);
        assert!(deferred.iter().all(|force| force.icon == fx.icons[3].id));
    }

    #[test]
    fn repeated_on_ready_keeps_handle_at_rest() {
        let fx = Fixture::new();
        let tuning = Tuning::default();
        for _ in 0..3 {
            fx.handles[0].borrow_mut().set_current_time(0.2);
            for force in on_ready(&fx.registry, fx.icons[0].id, &tuning) {
                apply_deferred(&fx.registry, &fx.icons, Selection::None, force.icon);
            }
            assert!(fx.at_rest(0));
        }
    }

    #[test]
    fn on_ready_for_unregistered_icon_does_nothing() {
        let icons = default_icons();
        let registry = HandleRegistry::new();
        let deferred = on_ready(&registry, icons[0].id, &Tuning::default());
        assert!(deferred.is_empty());
    }

    #[test]
    fn on_ready_forces_selected_icon_too() {
        let fx = Fixture::new();
        let selection = select_tab(&fx.registry, &fx.icons, Selection::None, 1);
        fx.handles[1].borrow_mut().set_current_time(0.05);

        let deferred = on_ready(&fx.registry, fx.icons[1].id, &Tuning::default());

        assert!(!deferred.is_empty());
        assert!(fx.at_rest(1));
        assert_eq!(selection, Selection::Tab(1));
    }

    #[test]
    fn scheduled_retry_skips_selected_icon() {
        let fx = Fixture::new();
        let selection = select_tab(&fx.registry, &fx.icons, Selection::None, 1);
        fx.handles[1].borrow_mut().set_current_time(0.05);

        assert!(!apply_deferred(&fx.registry, &fx.icons, selection, fx.icons[1].id));
        assert!(!fx.handles[1].borrow().paused);
        assert!(apply_deferred(&fx.registry, &fx.icons, selection, fx.icons[0].id));
    }

    #[test]
    fn deferred_force_after_handle_dropped_is_harmless() {
        let mut fx = Fixture::new();
        fx.handles.clear();
        assert!(!apply_deferred(&fx.registry, &fx.icons, Selection::None, fx.icons[0].id));
        assert_eq!(
            correct_drift(&fx.registry, &fx.icons, Selection::None, &Tuning::default()),
            DriftReport::default()
        );
    }

    #[test]
    fn correct_drift_resets_only_inactive_drifted_icons() {
        let fx = Fixture::with(|index| match index {
            0 => FakeHandle::drifted(0.5),
            1 => FakeHandle::drifted(0.5),
            2 => FakeHandle::drifted(0.003),
            _ => FakeHandle::default(),
        });
        fx.handles[1].borrow_mut().paused = false;

        let report = correct_drift(&fx.registry, &fx.icons, Selection::Tab(1), &Tuning::default());

        assert_eq!(
            report,
            DriftReport {
                inspected: 4,
                corrected: 1
            }
        );
        assert!(fx.at_rest(0));
        let active = fx.handles[1].borrow();
        assert_eq!(active.time, 0.5);
        assert!(!active.paused);
        // Below both thresholds: left alone.
        assert_eq!(fx.handles[2].borrow().time, 0.003);
    }

    #[test]
    fn correct_drift_uses_frame_threshold_independently() {
        let fx = Fixture::with(|index| {
            if index == 0 {
                FakeHandle {
                    time: 0.0,
                    frame: 0.5,
                    ..FakeHandle::default()
                }
            } else {
                FakeHandle::default()
            }
        });

        let report = correct_drift(&fx.registry, &fx.icons, Selection::None, &Tuning::default());

        assert_eq!(report.corrected, 1);
        assert_eq!(fx.handles[0].borrow().frame, 0.0);
    }

    #[test]
    fn correct_drift_never_touches_freshly_selected_icon() {
        let fx = Fixture::new();
        let selection = select_tab(&fx.registry, &fx.icons, Selection::None, 2);

        let report = correct_drift(&fx.registry, &fx.icons, selection, &Tuning::default());

        assert_eq!(report.corrected, 0);
        assert!(!fx.handles[2].borrow().paused);
    }

    #[test]
    fn tuning_from_config_uses_config_values() {
        let config = AnimationConfig {
            reconcile_interval_ms: Some(250),
            register_recheck_ms: Some(20),
            ready_retry_ms: Some(vec![5]),
            ..AnimationConfig::default()
        };
        let tuning = Tuning::from(&config);
        assert_eq!(tuning.register_recheck, Duration::from_millis(20));
        assert_eq!(tuning.reconcile_interval, Duration::from_millis(250));
        assert_eq!(tuning.ready_retries, vec![Duration::from_millis(5)]);
        assert_eq!(Tuning::from(&AnimationConfig::default()), Tuning::default());
    }
}
