use std::cell::RefCell;
use std::rc::Rc;

use crate::scheduler::Scheduler;

/// Trailing-edge throttle.
///
/// The first call of a burst runs right away. Calls that land inside the
/// window after a run are folded into a single trailing run at
/// `last_run + window`, which receives the most recent argument. So `func`
/// runs at most once per window and the last argument of a burst is never
/// lost.
pub struct Throttle<T: 'static, S: Scheduler + 'static> {
    inner: Rc<RefCell<Inner<T, S::Handle>>>,
    scheduler: Rc<S>,
    func: Rc<dyn Fn(T)>,
}

struct Inner<T, H> {
    window_ms: f64,
    last_ran: Option<f64>,
    latest: Option<T>,
    // kept after firing; replaced (and so dropped) on the next arm
    timer: Option<H>,
    armed: bool,
}

impl<T: 'static, S: Scheduler + 'static> Throttle<T, S> {
    pub fn new(scheduler: Rc<S>, window_ms: u32, func: impl Fn(T) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                window_ms: f64::from(window_ms),
                last_ran: None,
                latest: None,
                timer: None,
                armed: false,
            })),
            scheduler,
            func: Rc::new(func),
        }
    }

    pub fn invoke(&self, arg: T) {
        let now = self.scheduler.now();
        let mut inner = self.inner.borrow_mut();

        let window = inner.window_ms;
        let previous = inner.last_ran;
        let last_ran = match previous {
            Some(t) if now - t < window => t,
            _ => {
                inner.timer = None;
                inner.armed = false;
                inner.latest = None;
                inner.last_ran = Some(now);
                drop(inner);
                (self.func)(arg);
                return;
            }
        };

        inner.latest = Some(arg);
        if inner.armed {
            return;
        }

        let wait = (last_ran + window - now).max(0.0).ceil() as u32;
        let weak = Rc::downgrade(&self.inner);
        let scheduler = Rc::clone(&self.scheduler);
        let func = Rc::clone(&self.func);

        inner.armed = true;
        drop(inner);

        let timer = self.scheduler.schedule(
            wait,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let arg = {
                    let mut inner = inner.borrow_mut();
                    if !inner.armed {
                        return;
                    }
                    inner.armed = false;
                    inner.last_ran = Some(scheduler.now());
                    inner.latest.take()
                };
                if let Some(arg) = arg {
                    func(arg);
                }
            }),
        );

        self.inner.borrow_mut().timer = Some(timer);
    }

    /// Drops the pending trailing call and forgets the last run, so the next
    /// `invoke` runs immediately.
    pub fn cancel(&self) {
        let timer = {
            let mut inner = self.inner.borrow_mut();
            inner.armed = false;
            inner.latest = None;
            inner.last_ran = None;
            inner.timer.take()
        };
        drop(timer);
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        self.inner.borrow().armed
    }
}

impl<T: 'static, S: Scheduler + 'static> Drop for Throttle<T, S> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.armed = false;
            inner.timer = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ManualScheduler;
    use std::cell::RefCell;

    fn recording(scheduler: &Rc<ManualScheduler>, window: u32) -> (Throttle<u32, ManualScheduler>, Rc<RefCell<Vec<(f64, u32)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let clock = Rc::clone(scheduler);
        let throttle = Throttle::new(Rc::clone(scheduler), window, move |v| {
            sink.borrow_mut().push((clock.now(), v));
        });
        (throttle, calls)
    }

    #[test]
    fn first_call_runs_immediately() {
        let sched = Rc::new(ManualScheduler::default());
        let (throttle, calls) = recording(&sched, 100);

        throttle.invoke(1);
        assert_eq!(*calls.borrow(), vec![(0.0, 1)]);
        assert!(!throttle.is_pending());
    }

    #[test]
    fn burst_collapses_into_one_trailing_call_with_latest_arg() {
        let sched = Rc::new(ManualScheduler::default());
        let (throttle, calls) = recording(&sched, 100);

        throttle.invoke(1);
        for v in 2..=5 {
            sched.advance(10);
            throttle.invoke(v);
        }
        assert_eq!(calls.borrow().len(), 1);
        assert!(throttle.is_pending());

        sched.advance(59);
        assert_eq!(calls.borrow().len(), 1);

        sched.advance(1);
        assert_eq!(*calls.borrow(), vec![(0.0, 1), (100.0, 5)]);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn continuous_stream_runs_at_most_once_per_window() {
        let sched = Rc::new(ManualScheduler::default());
        let (throttle, calls) = recording(&sched, 100);

        // one event every 7ms for a second
        for i in 0..143 {
            throttle.invoke(i);
            sched.advance(7);
        }
        sched.advance(200);

        let calls = calls.borrow();
        for pair in calls.windows(2) {
            assert!(pair[1].0 - pair[0].0 >= 100.0, "{pair:?}");
        }
        assert_eq!(calls.last().map(|c| c.1), Some(142));
        assert!(calls.len() <= 11);
    }

    #[test]
    fn call_after_quiet_window_is_leading_again() {
        let sched = Rc::new(ManualScheduler::default());
        let (throttle, calls) = recording(&sched, 100);

        throttle.invoke(1);
        sched.advance(250);
        throttle.invoke(2);

        assert_eq!(*calls.borrow(), vec![(0.0, 1), (250.0, 2)]);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn cancel_drops_the_trailing_call() {
        let sched = Rc::new(ManualScheduler::default());
        let (throttle, calls) = recording(&sched, 100);

        throttle.invoke(1);
        sched.advance(20);
        throttle.invoke(2);
        throttle.cancel();
        sched.advance(500);

        assert_eq!(*calls.borrow(), vec![(0.0, 1)]);

        throttle.invoke(3);
        assert_eq!(calls.borrow().last(), Some(&(520.0, 3)));
    }

    #[test]
    fn dropping_the_throttle_cancels_pending_work() {
        let sched = Rc::new(ManualScheduler::default());
        let (throttle, calls) = recording(&sched, 100);

        throttle.invoke(1);
        sched.advance(10);
        throttle.invoke(2);
        drop(throttle);
        sched.advance(500);

        assert_eq!(calls.borrow().len(), 1);
    }
}
