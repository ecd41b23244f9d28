//! Browser timers behind the `Scheduler` seam, and view-owned handles.

use std::time::Duration;

use contracts::shared::scheduler::{Scheduler, TaskHandle};
use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// `setTimeout`-backed scheduler
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TaskHandle {
        let timeout = Timeout::new(millis(delay), callback);
        // Dropping a gloo Timeout clears it
        TaskHandle::new(move || drop(timeout))
    }
}

/// Repeating timer; stops when the handle is dropped
pub fn every(period: Duration, tick: impl FnMut() + 'static) -> TaskHandle {
    let interval = Interval::new(millis(period), tick);
    TaskHandle::new(move || drop(interval))
}

/// Holds at most one timer for the current component and cancels it when
/// the component is torn down. Setting a new timer cancels the previous one.
#[derive(Clone, Copy)]
pub struct TimerSlot(StoredValue<Option<TaskHandle>, LocalStorage>);

impl TimerSlot {
    pub fn new() -> Self {
        let slot = Self(StoredValue::new_local(None));
        on_cleanup(move || slot.clear());
        slot
    }

    pub fn set(&self, handle: TaskHandle) {
        let previous = self.0.try_update_value(|h| h.replace(handle)).flatten();
        drop(previous);
    }

    pub fn clear(&self) {
        let previous = self.0.try_update_value(|h| h.take()).flatten();
        drop(previous);
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}
