//! Deterministic stand-ins for the browser surfaces.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::contact::ContactForm;
use crate::nav::{Location, Routing, Viewport};
use crate::notify::Notifier;
use crate::scheduler::Scheduler;

/// Virtual clock. Timers only fire inside [`ManualScheduler::advance`].
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<f64>,
    next_id: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
}

struct Timer {
    id: u64,
    due: f64,
    task: Box<dyn FnOnce()>,
    cancelled: Rc<Cell<bool>>,
}

pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn advance(&self, ms: u32) {
        let target = self.now.get() + f64::from(ms);

        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                timers.retain(|t| !t.cancelled.get());
                let idx = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)))
                    .map(|(i, _)| i);
                idx.map(|i| timers.remove(i))
            };

            let Some(timer) = next else { break };
            self.now.set(timer.due.max(self.now.get()));
            (timer.task)();
        }

        self.now.set(target);
    }

    /// Live (not fired, not cancelled) timers.
    pub fn pending(&self) -> usize {
        self.timers
            .borrow()
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn now(&self) -> f64 {
        self.now.get()
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let cancelled = Rc::new(Cell::new(false));
        self.timers.borrow_mut().push(Timer {
            id,
            due: self.now.get() + f64::from(delay_ms),
            task,
            cancelled: cancelled.clone(),
        });
        ManualHandle { cancelled }
    }
}

/// Page with a scroll position and a few named regions, measured relative to
/// the top of the document.
#[derive(Default)]
pub struct FakeViewport {
    pub scroll_y: Cell<f64>,
    pub regions: RefCell<HashMap<String, f64>>,
    pub scrolls: RefCell<Vec<f64>>,
}

impl FakeViewport {
    pub fn with_region(self, id: &str, doc_top: f64) -> Self {
        self.regions.borrow_mut().insert(id.to_owned(), doc_top);
        self
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
        self.scroll_y.set(top);
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let doc_top = *self.regions.borrow().get(id)?;
        Some(doc_top - self.scroll_y.get())
    }
}

/// Router that records navigations and moves to the new location.
pub struct FakeRouter {
    pub location: RefCell<Location>,
    pub navigations: RefCell<Vec<(String, bool)>>,
}

impl FakeRouter {
    pub fn at(href: &str) -> Self {
        Self {
            location: RefCell::new(Location::from_href(href)),
            navigations: RefCell::default(),
        }
    }
}

impl Routing for FakeRouter {
    fn location(&self) -> Location {
        self.location.borrow().clone()
    }

    fn navigate(&self, path: &str, replace: bool) {
        self.navigations.borrow_mut().push((path.to_owned(), replace));
        *self.location.borrow_mut() = Location::from_href(path);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

/// Every required field set, phone left blank.
pub fn filled_form() -> ContactForm {
    ContactForm {
        first_name: "Asha".into(),
        last_name: "Rao".into(),
        email: "asha@example.com".into(),
        phone: String::new(),
        subject: "Travel kit".into(),
        message: "Do you ship to Pune?".into(),
    }
}
