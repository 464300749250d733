use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::scheduler::Scheduler;
use crate::throttle::Throttle;

/// Whether the page is scrolled past the header threshold.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTracker {
    threshold: f64,
    past: bool,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            past: false,
        }
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past
    }

    /// Feeds a scroll offset; returns the new value only when it flips.
    pub fn observe(&mut self, offset: f64) -> Option<bool> {
        let past = offset > self.threshold;
        if past == self.past {
            return None;
        }
        self.past = past;
        Some(past)
    }
}

/// Rate-limited tracker: offsets go in through [`Throttle::invoke`],
/// `publish` sees each flip of the threshold state.
pub fn throttled_tracker<S: Scheduler + 'static>(
    scheduler: Rc<S>,
    cfg: &SiteConfig,
    publish: impl Fn(bool) + 'static,
) -> Throttle<f64, S> {
    let tracker = RefCell::new(ScrollTracker::new(cfg.scroll_threshold_px));

    Throttle::new(scheduler, cfg.scroll_throttle_ms, move |offset| {
        let flipped = tracker.borrow_mut().observe(offset);
        if let Some(past) = flipped {
            log::trace!("header scrolled state -> {past} at {offset}px");
            publish(past);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ManualScheduler;

    #[test]
    fn threshold_is_exclusive() {
        let mut t = ScrollTracker::new(20.0);
        for offset in [0.0, 5.5, 19.9, 20.0] {
            assert_eq!(t.observe(offset), None, "{offset}");
            assert!(!t.is_past_threshold());
        }
        assert_eq!(t.observe(20.5), Some(true));
        assert_eq!(t.observe(400.0), None);
        assert!(t.is_past_threshold());
        assert_eq!(t.observe(20.0), Some(false));
    }

    fn published(sched: &Rc<ManualScheduler>) -> (Throttle<f64, ManualScheduler>, Rc<RefCell<Vec<(f64, bool)>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let clock = Rc::clone(sched);
        let throttle = throttled_tracker(Rc::clone(sched), &SiteConfig::default(), move |past| {
            sink.borrow_mut().push((clock.now(), past));
        });
        (throttle, log)
    }

    #[test]
    fn jittery_burst_publishes_at_most_once_per_window() {
        let sched = Rc::new(ManualScheduler::default());
        let (throttle, log) = published(&sched);

        // flick across the threshold every 4ms for 600ms
        for i in 0..150 {
            throttle.invoke(if i % 2 == 0 { 30.0 } else { 10.0 });
            sched.advance(4);
        }
        sched.advance(200);

        let log = log.borrow();
        assert!(!log.is_empty());
        for pair in log.windows(2) {
            assert!(pair[1].0 - pair[0].0 >= 100.0, "{pair:?}");
        }
    }

    #[test]
    fn burst_ending_below_threshold_settles_false() {
        let sched = Rc::new(ManualScheduler::default());
        let (throttle, log) = published(&sched);

        throttle.invoke(50.0);
        for offset in [60.0, 80.0, 40.0, 12.0] {
            sched.advance(15);
            throttle.invoke(offset);
        }
        assert_eq!(*log.borrow(), vec![(0.0, true)]);

        sched.advance(100);
        assert_eq!(*log.borrow(), vec![(0.0, true), (100.0, false)]);
    }

    #[test]
    fn unchanged_state_is_not_republished() {
        let sched = Rc::new(ManualScheduler::default());
        let (throttle, log) = published(&sched);

        for offset in [0.0, 3.0, 8.0, 15.0, 20.0] {
            throttle.invoke(offset);
            sched.advance(150);
        }
        assert!(log.borrow().is_empty());
    }
}
