use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::controller::{Observation, Scheduler, Viewport, Visibility};
use crate::error::HostError;

// setTimeout treats anything above i32::MAX as zero.
const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

pub struct BrowserViewport;

pub struct BrowserObservation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    connected: bool,
}

impl Observation for BrowserObservation {
    fn disconnect(&mut self) {
        if self.connected {
            self.observer.disconnect();
            self.connected = false;
        }
    }
}

impl Drop for BrowserObservation {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl Viewport for BrowserViewport {
    type Target = Element;
    type Observation = BrowserObservation;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        mut on_change: Box<dyn FnMut(Visibility)>,
    ) -> Result<BrowserObservation, HostError> {
        if !target.is_connected() {
            return Err(HostError::DetachedTarget);
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(Visibility {
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| HostError::ViewportUnavailable(format!("{:?}", e)))?;
        observer.observe(target);

        Ok(BrowserObservation {
            observer,
            _callback: callback,
            connected: true,
        })
    }
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Timer = Timeout;

    fn schedule(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis())
            .unwrap_or(MAX_TIMEOUT_MS)
            .min(MAX_TIMEOUT_MS);
        Timeout::new(millis, on_elapsed)
    }
}
