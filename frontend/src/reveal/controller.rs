use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, warn};

use crate::config;
use crate::error::HostError;

// Browsers report ratios like 0.0999 for an observer thresholded at 0.1.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }

    /// CSS classes for the wrapper element; the transition itself lives in the stylesheet.
    pub fn class(self) -> &'static str {
        match self {
            RevealState::Hidden => "reveal",
            RevealState::Revealed => "reveal revealed",
        }
    }
}

/// How much of a region is on screen, as reported by the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    #[cfg(test)]
    pub fn offscreen() -> Self {
        Self { intersecting: false, ratio: 0.0 }
    }

    #[cfg(test)]
    pub fn partial(ratio: f64) -> Self {
        Self { intersecting: ratio > 0.0, ratio }
    }

    pub fn meets(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

/// A live viewport registration. Must stop delivering callbacks once disconnected.
pub trait Observation {
    fn disconnect(&mut self);
}

/// Host facility reporting when an element crosses a visibility threshold.
///
/// Implementations deliver an initial notification for the target's current
/// visibility, so a region that is already on screen still triggers.
pub trait Viewport {
    type Target: ?Sized;
    type Observation: Observation;

    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_change: Box<dyn FnMut(Visibility)>,
    ) -> Result<Self::Observation, HostError>;
}

/// Host facility for one-shot timers. Dropping the returned handle cancels it.
pub trait Scheduler {
    type Timer;

    fn schedule(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>) -> Self::Timer;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Observing,
    Scheduled,
    // Revealed, or the viewport refused the registration.
    Settled,
    Unmounted,
}

struct Slots<V: Viewport, S: Scheduler> {
    state: RevealState,
    phase: Phase,
    observation: Option<V::Observation>,
    timer: Option<S::Timer>,
    on_reveal: Option<Box<dyn FnOnce()>>,
}

struct Shared<V: Viewport, S: Scheduler> {
    label: String,
    delay: Duration,
    threshold: f64,
    viewport: V,
    scheduler: S,
    slots: RefCell<Slots<V, S>>,
}

/// Drives one region from `Hidden` to `Revealed`, exactly once.
///
/// Host callbacks only hold weak references, and no borrow of the internal
/// state is held while calling into the host, so hosts are free to notify
/// synchronously from inside `observe`.
pub struct RevealController<V, S>
where
    V: Viewport + 'static,
    S: Scheduler + 'static,
{
    shared: Rc<Shared<V, S>>,
}

impl<V, S> RevealController<V, S>
where
    V: Viewport + 'static,
    S: Scheduler + 'static,
{
    pub fn new(
        label: impl Into<String>,
        delay: Duration,
        viewport: V,
        scheduler: S,
        on_reveal: impl FnOnce() + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                label: label.into(),
                delay,
                threshold: config::REVEAL_THRESHOLD,
                viewport,
                scheduler,
                slots: RefCell::new(Slots {
                    state: RevealState::Hidden,
                    phase: Phase::Idle,
                    observation: None,
                    timer: None,
                    on_reveal: Some(Box::new(on_reveal)),
                }),
            }),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.shared.slots.borrow().state
    }

    /// Starts watching `target`. Only the first call has any effect.
    pub fn mount(&self, target: &V::Target) {
        {
            let mut slots = self.shared.slots.borrow_mut();
            if slots.phase != Phase::Idle {
                debug!("reveal region {} already mounted", self.shared.label);
                return;
            }
            slots.phase = Phase::Observing;
        }

        let weak = Rc::downgrade(&self.shared);
        let result = self.shared.viewport.observe(
            target,
            self.shared.threshold,
            Box::new(move |visibility: Visibility| {
                if let Some(shared) = weak.upgrade() {
                    shared.on_visibility(visibility);
                }
            }),
        );

        match result {
            Ok(mut observation) => {
                let phase = self.shared.slots.borrow().phase;
                if phase != Phase::Observing {
                    // Already triggered during registration.
                    observation.disconnect();
                }
                if phase == Phase::Unmounted {
                    return;
                }
                self.shared.slots.borrow_mut().observation = Some(observation);
            }
            Err(e) => {
                warn!("reveal region {} stays hidden: {}", self.shared.label, e);
                let mut slots = self.shared.slots.borrow_mut();
                if slots.phase == Phase::Observing {
                    slots.phase = Phase::Settled;
                }
            }
        }
    }

    /// Cancels the observation and any pending timer. The current state is kept.
    pub fn unmount(&self) {
        let (observation, timer) = {
            let mut slots = self.shared.slots.borrow_mut();
            if slots.phase == Phase::Unmounted {
                return;
            }
            slots.phase = Phase::Unmounted;
            slots.on_reveal = None;
            (slots.observation.take(), slots.timer.take())
        };
        if let Some(mut observation) = observation {
            observation.disconnect();
        }
        drop(timer);
        debug!("reveal region {} unmounted", self.shared.label);
    }
}

impl<V, S> Drop for RevealController<V, S>
where
    V: Viewport + 'static,
    S: Scheduler + 'static,
{
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<V, S> Shared<V, S>
where
    V: Viewport + 'static,
    S: Scheduler + 'static,
{
    fn on_visibility(self: Rc<Self>, visibility: Visibility) {
        let observation = {
            let mut slots = self.slots.borrow_mut();
            if slots.phase != Phase::Observing || !visibility.meets(self.threshold) {
                return;
            }
            slots.phase = Phase::Scheduled;
            slots.observation.take()
        };

        // One-shot: no further visibility changes matter once triggered.
        // The observation is kept alive until unmount so the host callback
        // currently running is never freed from under itself.
        if let Some(mut observation) = observation {
            observation.disconnect();
            self.slots.borrow_mut().observation = Some(observation);
        }

        debug!(
            "reveal region {} in view ({:.2}), revealing in {}ms",
            self.label,
            visibility.ratio,
            self.delay.as_millis()
        );

        let weak = Rc::downgrade(&self);
        let timer = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.on_elapsed();
                }
            }),
        );

        let mut slots = self.slots.borrow_mut();
        if slots.phase != Phase::Unmounted {
            slots.timer = Some(timer);
        }
    }

    fn on_elapsed(&self) {
        let on_reveal = {
            let mut slots = self.slots.borrow_mut();
            if slots.phase != Phase::Scheduled {
                return;
            }
            slots.phase = Phase::Settled;
            slots.state = RevealState::Revealed;
            slots.on_reveal.take()
        };
        debug!("reveal region {} revealed", self.label);
        if let Some(on_reveal) = on_reveal {
            on_reveal();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::reveal::fake::{ManualClock, ScriptedViewport};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn controller(
        delay: u64,
        viewport: &ScriptedViewport,
        clock: &ManualClock,
        fired: &Rc<Cell<u32>>,
    ) -> RevealController<ScriptedViewport, ManualClock> {
        let fired = fired.clone();
        RevealController::new(
            "test",
            ms(delay),
            viewport.clone(),
            clock.clone(),
            move || fired.set(fired.get() + 1),
        )
    }

    #[test]
    fn test_visible_at_mount_reveals_within_one_tick() {
        let viewport = ScriptedViewport::default();
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));
        viewport.set_visibility(1, Visibility::partial(1.0));

        let region = controller(0, &viewport, &clock, &fired);
        region.mount(&1);
        assert_eq!(region.state(), RevealState::Hidden);

        clock.advance(Duration::ZERO);
        assert_eq!(region.state(), RevealState::Revealed);
        assert_eq!(fired.get(), 1);
        assert_eq!(viewport.active_observations(), 0);
    }

    #[test]
    fn test_delay_is_honored_from_entry_time() {
        let viewport = ScriptedViewport::default();
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));

        let region = controller(400, &viewport, &clock, &fired);
        region.mount(&1);
        viewport.set_visibility(1, Visibility::partial(0.5));

        clock.advance_to(ms(100));
        assert_eq!(region.state(), RevealState::Hidden);
        clock.advance_to(ms(399));
        assert_eq!(region.state(), RevealState::Hidden);
        clock.advance_to(ms(500));
        assert_eq!(region.state(), RevealState::Revealed);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_late_entry_is_anchored_to_its_own_visibility() {
        let viewport = ScriptedViewport::default();
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));

        let region = controller(400, &viewport, &clock, &fired);
        region.mount(&1);
        clock.advance_to(ms(1_000));
        assert_eq!(region.state(), RevealState::Hidden);

        viewport.set_visibility(1, Visibility::partial(0.3));
        clock.advance_to(ms(1_399));
        assert_eq!(region.state(), RevealState::Hidden);
        clock.advance_to(ms(1_400));
        assert_eq!(region.state(), RevealState::Revealed);
    }

    #[test]
    fn test_below_threshold_does_not_trigger() {
        let viewport = ScriptedViewport::default();
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));

        let region = controller(0, &viewport, &clock, &fired);
        region.mount(&1);

        viewport.set_visibility(1, Visibility::partial(0.05));
        clock.advance_to(ms(1_000));
        assert_eq!(region.state(), RevealState::Hidden);
        assert_eq!(viewport.active_observations(), 1);

        viewport.set_visibility(1, Visibility::partial(0.1));
        clock.advance_to(ms(1_001));
        assert_eq!(region.state(), RevealState::Revealed);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let viewport = ScriptedViewport::default();
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));

        let region = controller(100, &viewport, &clock, &fired);
        region.mount(&1);
        viewport.set_visibility(1, Visibility::partial(1.0));
        clock.advance_to(ms(100));
        assert_eq!(region.state(), RevealState::Revealed);

        viewport.set_visibility(1, Visibility::offscreen());
        viewport.set_visibility(1, Visibility::partial(1.0));
        clock.advance_to(ms(1_000));

        assert_eq!(region.state(), RevealState::Revealed);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_unmount_before_timer_cancels_everything() {
        let viewport = ScriptedViewport::default();
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));

        let region = controller(400, &viewport, &clock, &fired);
        region.mount(&1);
        viewport.set_visibility(1, Visibility::partial(1.0));
        clock.advance_to(ms(100));
        assert_eq!(clock.pending(), 1);

        region.unmount();
        assert_eq!(clock.pending(), 0);
        clock.advance_to(ms(1_000));

        assert_eq!(fired.get(), 0);
        assert_eq!(region.state(), RevealState::Hidden);
        assert_eq!(viewport.active_observations(), 0);
    }

    #[test]
    fn test_unmount_before_visible_drops_observation() {
        let viewport = ScriptedViewport::default();
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));

        let region = controller(0, &viewport, &clock, &fired);
        region.mount(&1);
        assert_eq!(viewport.active_observations(), 1);

        region.unmount();
        assert_eq!(viewport.active_observations(), 0);

        viewport.set_visibility(1, Visibility::partial(1.0));
        clock.advance_to(ms(100));
        assert_eq!(fired.get(), 0);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_dropping_controller_cancels_pending_timer() {
        let viewport = ScriptedViewport::default();
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));

        let region = controller(300, &viewport, &clock, &fired);
        region.mount(&1);
        viewport.set_visibility(1, Visibility::partial(1.0));
        drop(region);

        clock.advance_to(ms(1_000));
        assert_eq!(fired.get(), 0);
        assert_eq!(clock.pending(), 0);
        assert_eq!(viewport.active_observations(), 0);
    }

    #[test]
    fn test_unavailable_viewport_stays_hidden() {
        let viewport = ScriptedViewport::default();
        viewport.set_unavailable(true);
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));

        let region = controller(0, &viewport, &clock, &fired);
        region.mount(&1);
        viewport.set_visibility(1, Visibility::partial(1.0));
        clock.advance_to(ms(1_000));

        assert_eq!(region.state(), RevealState::Hidden);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_second_mount_is_ignored() {
        let viewport = ScriptedViewport::default();
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));

        let region = controller(0, &viewport, &clock, &fired);
        region.mount(&1);
        region.mount(&2);
        assert_eq!(viewport.active_observations(), 1);

        viewport.set_visibility(2, Visibility::partial(1.0));
        clock.advance_to(ms(10));
        assert_eq!(region.state(), RevealState::Hidden);
    }

    #[test]
    fn test_simultaneous_entries_fire_in_delay_order() {
        let viewport = ScriptedViewport::default();
        let clock = ManualClock::default();
        let order = Rc::new(RefCell::new(Vec::new()));

        let regions: Vec<_> = [600u64, 0, 400, 200]
            .iter()
            .enumerate()
            .map(|(i, &delay)| {
                let order = order.clone();
                let target = i as u32;
                let region = RevealController::new(
                    format!("region-{}", i),
                    ms(delay),
                    viewport.clone(),
                    clock.clone(),
                    move || order.borrow_mut().push(delay),
                );
                region.mount(&target);
                region
            })
            .collect();

        for target in 0..regions.len() as u32 {
            viewport.set_visibility(target, Visibility::partial(1.0));
        }
        clock.advance_to(ms(1_000));

        assert_eq!(*order.borrow(), vec![0, 200, 400, 600]);
        assert!(regions.iter().all(|r| r.state().is_revealed()));
    }

    #[test]
    fn test_staggered_entries_are_not_ordered_by_delay_alone() {
        let viewport = ScriptedViewport::default();
        let clock = ManualClock::default();
        let order = Rc::new(RefCell::new(Vec::new()));

        let make = |name: &'static str, delay: u64, target: u32| {
            let order = order.clone();
            let region = RevealController::new(
                name,
                ms(delay),
                viewport.clone(),
                clock.clone(),
                move || order.borrow_mut().push(name),
            );
            region.mount(&target);
            region
        };
        let slow = make("slow", 600, 1);
        let fast = make("fast", 200, 2);

        viewport.set_visibility(1, Visibility::partial(1.0));
        clock.advance_to(ms(500));
        viewport.set_visibility(2, Visibility::partial(1.0));
        clock.advance_to(ms(2_000));

        assert_eq!(*order.borrow(), vec!["slow", "fast"]);
        assert!(slow.state().is_revealed() && fast.state().is_revealed());
    }

    #[test]
    fn test_state_classes() {
        assert_eq!(RevealState::Hidden.class(), "reveal");
        assert_eq!(RevealState::Revealed.class(), "reveal revealed");
        assert!(!Visibility::offscreen().meets(0.1));
        assert!(Visibility::partial(0.0999).meets(0.1));
    }
}
