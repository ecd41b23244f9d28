//! Timed UI state: the simulated form submission and the auto-dismissed
//! acknowledgment flag. Both report state through a callback and stop
//! reporting as soon as their handle is dropped.

use std::rc::Rc;
use std::time::Duration;

use super::scheduler::{HandleGroup, Scheduler, TaskHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Request "in flight"; the submit button is disabled
    Loading,
    /// Confirmation visible
    Submitted,
}

impl SubmitPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmitPhase::Loading)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitPhase::Submitted)
    }
}

/// Idle -> Loading -> (processing) -> Submitted -> (confirmation) -> Idle
#[derive(Debug, Clone, Copy)]
pub struct SubmissionFlow {
    processing: Duration,
    confirmation: Duration,
}

impl SubmissionFlow {
    pub fn new(processing: Duration, confirmation: Duration) -> Self {
        Self {
            processing,
            confirmation,
        }
    }

    pub fn start<S>(&self, scheduler: &S, on_phase: impl Fn(SubmitPhase) + 'static) -> TaskHandle
    where
        S: Scheduler + Clone + 'static,
    {
        let on_phase: Rc<dyn Fn(SubmitPhase)> = Rc::new(on_phase);
        on_phase(SubmitPhase::Loading);

        let group = HandleGroup::new();
        let weak = group.downgrade();
        let confirmation = self.confirmation;
        let next_scheduler = scheduler.clone();
        let sink = on_phase.clone();

        group.push(scheduler.schedule(
            self.processing,
            Box::new(move || {
                sink(SubmitPhase::Submitted);
                let sink = sink.clone();
                weak.push(
                    next_scheduler.schedule(confirmation, Box::new(move || sink(SubmitPhase::Idle))),
                );
            }),
        ));
        group.into_handle()
    }
}

/// Raise a flag now and lower it after `visible_for`.
pub fn flash<S>(scheduler: &S, visible_for: Duration, set: impl Fn(bool) + 'static) -> TaskHandle
where
    S: Scheduler + ?Sized,
{
    set(true);
    scheduler.schedule(visible_for, Box::new(move || set(false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::scheduler::ManualScheduler;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<SubmitPhase>>>, impl Fn(SubmitPhase) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |p| sink.borrow_mut().push(p))
    }

    fn flow() -> SubmissionFlow {
        SubmissionFlow::new(Duration::from_millis(2500), Duration::from_millis(3000))
    }

    #[test]
    fn test_phases_follow_schedule() {
        let sched = ManualScheduler::new();
        let (log, sink) = recorder();
        let _handle = flow().start(&sched, sink);
        assert_eq!(*log.borrow(), vec![SubmitPhase::Loading]);

        sched.advance(Duration::from_millis(2499));
        assert_eq!(log.borrow().len(), 1);

        sched.advance(Duration::from_millis(1));
        assert_eq!(log.borrow().last(), Some(&SubmitPhase::Submitted));

        sched.advance(Duration::from_millis(3000));
        assert_eq!(
            *log.borrow(),
            vec![SubmitPhase::Loading, SubmitPhase::Submitted, SubmitPhase::Idle]
        );
    }

    #[test]
    fn test_cancel_while_loading_freezes_state() {
        let sched = ManualScheduler::new();
        let (log, sink) = recorder();
        let handle = flow().start(&sched, sink);
        sched.advance(Duration::from_millis(1000));
        drop(handle);
        sched.advance(Duration::from_secs(10));
        assert_eq!(*log.borrow(), vec![SubmitPhase::Loading]);
    }

    #[test]
    fn test_cancel_while_confirming_stops_auto_clear() {
        let sched = ManualScheduler::new();
        let (log, sink) = recorder();
        let handle = flow().start(&sched, sink);
        sched.advance(Duration::from_millis(2600));
        handle.cancel();
        sched.advance(Duration::from_secs(10));
        assert_eq!(log.borrow().last(), Some(&SubmitPhase::Submitted));
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn test_flash_clears_itself() {
        let sched = ManualScheduler::new();
        let flag = Rc::new(RefCell::new(false));
        let f = flag.clone();
        let _handle = flash(&sched, Duration::from_secs(2), move |v| *f.borrow_mut() = v);

        assert!(*flag.borrow());
        sched.advance(Duration::from_secs(2));
        assert!(!*flag.borrow());
    }
}
