//! Deterministic stand-ins for the browser viewport and timers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::controller::{Observation, Scheduler, Viewport, Visibility};
use crate::error::HostError;

struct PendingTimer {
    id: u64,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

/// A clock that only moves when told to. Timers fire in due order, ties in
/// scheduling order.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<ClockState>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            if let Ok(mut state) = clock.try_borrow_mut() {
                state.pending.retain(|t| t.id != self.id);
            }
        }
    }
}

impl ManualClock {
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.advance_to(target);
    }

    pub fn advance_to(&self, target: Duration) {
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let timer = state.pending.remove(i);
                        state.now = state.now.max(timer.due);
                        Some(timer.callback)
                    }
                    None => None,
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        let mut state = self.state.borrow_mut();
        state.now = state.now.max(target);
    }
}

impl Scheduler for ManualClock {
    type Timer = ManualTimer;

    fn schedule(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>) -> ManualTimer {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.pending.push(PendingTimer { id, due, callback: on_elapsed });
        ManualTimer { id, clock: Rc::downgrade(&self.state) }
    }
}

type Listener = Rc<RefCell<Box<dyn FnMut(Visibility)>>>;

struct Registration {
    id: u64,
    target: u32,
    connected: bool,
    listener: Listener,
}

#[derive(Default)]
struct ViewportState {
    unavailable: bool,
    next_id: u64,
    visibility: HashMap<u32, Visibility>,
    registrations: Vec<Registration>,
}

/// A viewport whose regions are numbered and moved on and off screen by the test.
#[derive(Clone, Default)]
pub struct ScriptedViewport {
    state: Rc<RefCell<ViewportState>>,
}

pub struct ScriptedObservation {
    id: u64,
    viewport: Weak<RefCell<ViewportState>>,
}

impl Observation for ScriptedObservation {
    fn disconnect(&mut self) {
        if let Some(viewport) = self.viewport.upgrade() {
            for registration in viewport.borrow_mut().registrations.iter_mut() {
                if registration.id == self.id {
                    registration.connected = false;
                }
            }
        }
    }
}

impl Drop for ScriptedObservation {
    fn drop(&mut self) {
        if let Some(viewport) = self.viewport.upgrade() {
            if let Ok(mut state) = viewport.try_borrow_mut() {
                state.registrations.retain(|r| r.id != self.id);
            }
        }
    }
}

impl ScriptedViewport {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.borrow_mut().unavailable = unavailable;
    }

    pub fn active_observations(&self) -> usize {
        self.state
            .borrow()
            .registrations
            .iter()
            .filter(|r| r.connected)
            .count()
    }

    pub fn set_visibility(&self, target: u32, visibility: Visibility) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.borrow_mut();
            state.visibility.insert(target, visibility);
            state
                .registrations
                .iter()
                .filter(|r| r.connected && r.target == target)
                .map(|r| r.listener.clone())
                .collect()
        };
        for listener in listeners {
            (listener.borrow_mut())(visibility);
        }
    }
}

impl Viewport for ScriptedViewport {
    type Target = u32;
    type Observation = ScriptedObservation;

    fn observe(
        &self,
        target: &u32,
        _threshold: f64,
        on_change: Box<dyn FnMut(Visibility)>,
    ) -> Result<ScriptedObservation, HostError> {
        let (id, listener, current) = {
            let mut state = self.state.borrow_mut();
            if state.unavailable {
                return Err(HostError::ViewportUnavailable("scripted".to_string()));
            }
            let id = state.next_id;
            state.next_id += 1;
            let listener: Listener = Rc::new(RefCell::new(on_change));
            state.registrations.push(Registration {
                id,
                target: *target,
                connected: true,
                listener: listener.clone(),
            });
            let current = state
                .visibility
                .get(target)
                .copied()
                .unwrap_or_else(Visibility::offscreen);
            (id, listener, current)
        };

        // Mirrors the browser's initial notification on observe.
        (listener.borrow_mut())(current);

        Ok(ScriptedObservation { id, viewport: Rc::downgrade(&self.state) })
    }
}
