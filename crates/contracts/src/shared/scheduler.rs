//! Cancellable delayed callbacks.
//!
//! Every timer a view starts is represented by a [`TaskHandle`]. Dropping
//! the handle cancels the timer, so a view that keeps its handles and lets
//! them go on teardown can never be updated after it is gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Owner of a scheduled callback. Cancels it on drop.
#[must_use = "dropping a TaskHandle cancels the scheduled callback"]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Source of one-shot timers
pub trait Scheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TaskHandle;
}

/// A group of handles cancelled together, e.g. the stages of a chained flow.
///
/// Callbacks hold only a [`Weak`] reference, so scheduling the next stage
/// from inside a callback does not keep the group alive.
#[derive(Default)]
pub struct HandleGroup {
    handles: Rc<RefCell<Vec<TaskHandle>>>,
}

impl HandleGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, handle: TaskHandle) {
        self.handles.borrow_mut().push(handle);
    }

    pub fn downgrade(&self) -> WeakHandleGroup {
        WeakHandleGroup(Rc::downgrade(&self.handles))
    }

    /// Collapse the group into a single handle
    pub fn into_handle(self) -> TaskHandle {
        let handles = self.handles;
        TaskHandle::new(move || {
            let drained: Vec<TaskHandle> = handles.borrow_mut().drain(..).collect();
            drop(drained);
        })
    }
}

#[derive(Clone)]
pub struct WeakHandleGroup(Weak<RefCell<Vec<TaskHandle>>>);

impl WeakHandleGroup {
    /// Store `handle` if the group still exists, otherwise cancel it at once.
    pub fn push(&self, handle: TaskHandle) -> bool {
        match self.0.upgrade() {
            Some(handles) => {
                handles.borrow_mut().push(handle);
                true
            }
            None => false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

// ============================================================================
// Manual scheduler
// ============================================================================

struct Pending {
    id: u64,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Used by tests and anywhere time must be stepped explicitly.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Move the clock forward, firing due callbacks in deadline order.
    /// Callbacks scheduled while advancing fire too if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let earliest = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.id))
                    .map(|(i, _)| i);
                earliest.map(|i| {
                    let pending = state.pending.remove(i);
                    state.now = pending.due;
                    pending.callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TaskHandle {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + delay;
            state.pending.push(Pending { id, due, callback });
            id
        };
        let state = Rc::downgrade(&self.state);
        TaskHandle::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().pending.retain(|p| p.id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        (hits, move || {
            let h = h.clone();
            Box::new(move || h.set(h.get() + 1)) as Box<dyn FnOnce()>
        })
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let sched = ManualScheduler::new();
        let (hits, cb) = counter();
        let _handle = sched.schedule(Duration::from_millis(2000), cb());

        sched.advance(Duration::from_millis(1999));
        assert_eq!(hits.get(), 0);
        sched.advance(Duration::from_millis(1));
        assert_eq!(hits.get(), 1);
        sched.advance(Duration::from_secs(10));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_drop_cancels() {
        let sched = ManualScheduler::new();
        let (hits, cb) = counter();
        let handle = sched.schedule(Duration::from_millis(10), cb());
        drop(handle);
        assert_eq!(sched.pending_count(), 0);
        sched.advance(Duration::from_secs(1));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_cancel_after_fire_is_harmless() {
        let sched = ManualScheduler::new();
        let (hits, cb) = counter();
        let handle = sched.schedule(Duration::ZERO, cb());
        sched.advance(Duration::ZERO);
        handle.cancel();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_chained_callbacks_fire_within_window() {
        let sched = ManualScheduler::new();
        let group = HandleGroup::new();
        let weak = group.downgrade();
        let (hits, cb) = counter();
        let second = cb();

        let inner_sched = sched.clone();
        group.push(sched.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                weak.push(inner_sched.schedule(Duration::from_millis(100), second));
            }),
        ));
        let _handle = group.into_handle();

        sched.advance(Duration::from_millis(250));
        assert_eq!(hits.get(), 1);
        assert_eq!(sched.now(), Duration::from_millis(250));
    }

    #[test]
    fn test_group_handle_cancels_later_stage() {
        let sched = ManualScheduler::new();
        let group = HandleGroup::new();
        let weak = group.downgrade();
        let (hits, cb) = counter();
        let second = cb();

        let inner_sched = sched.clone();
        group.push(sched.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                weak.push(inner_sched.schedule(Duration::from_millis(100), second));
            }),
        ));
        let handle = group.into_handle();

        sched.advance(Duration::from_millis(150));
        assert_eq!(sched.pending_count(), 1);
        handle.cancel();
        assert_eq!(sched.pending_count(), 0);
        sched.advance(Duration::from_secs(1));
        assert_eq!(hits.get(), 0);
    }
}
