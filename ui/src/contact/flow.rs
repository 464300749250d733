use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use super::form::{ContactForm, FormError};
use crate::notify::Notifier;
use crate::scheduler::Scheduler;

pub const SENT_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        self == SubmissionState::Submitting
    }

    pub fn is_submitted(self) -> bool {
        self == SubmissionState::Submitted
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error("a message is already being sent")]
    InFlight,
    #[error("message already sent")]
    AlreadySent,
}

/// Identifies one submit; a completion only lands if its ticket is current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Transitions of the contact form, without timers.
#[derive(Debug, Default)]
pub struct Submission {
    state: SubmissionState,
    current: u64,
}

impl Submission {
    #[cfg(test)]
    pub(crate) fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn begin(&mut self, form: &ContactForm) -> Result<Ticket, SubmitError> {
        match self.state {
            SubmissionState::Submitting => return Err(SubmitError::InFlight),
            SubmissionState::Submitted => return Err(SubmitError::AlreadySent),
            SubmissionState::Idle => {}
        }
        form.validate()?;

        self.current += 1;
        self.state = SubmissionState::Submitting;
        Ok(Ticket(self.current))
    }

    /// `false` for stale tickets and for anything but `Submitting`.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.state != SubmissionState::Submitting || ticket.0 != self.current {
            return false;
        }
        self.state = SubmissionState::Submitted;
        true
    }

    /// Back to idle; invalidates any outstanding ticket.
    pub fn reset(&mut self) {
        self.current += 1;
        self.state = SubmissionState::Idle;
    }
}

/// Contact form submission against a simulated backend: completes after a
/// fixed delay, always successfully.
pub struct ContactFlow<S: Scheduler + 'static, N: Notifier + 'static> {
    inner: Rc<RefCell<FlowInner<S::Handle>>>,
    scheduler: Rc<S>,
    notifier: Rc<N>,
    delay_ms: u32,
    on_change: Rc<dyn Fn(SubmissionState)>,
}

struct FlowInner<H> {
    submission: Submission,
    // left in place after firing; replaced by the next submit or dropped on reset
    completion: Option<H>,
}

impl<S: Scheduler + 'static, N: Notifier + 'static> ContactFlow<S, N> {
    pub fn new(
        scheduler: Rc<S>,
        notifier: Rc<N>,
        delay_ms: u32,
        on_change: impl Fn(SubmissionState) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FlowInner {
                submission: Submission::default(),
                completion: None,
            })),
            scheduler,
            notifier,
            delay_ms,
            on_change: Rc::new(on_change),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> SubmissionState {
        self.inner.borrow().submission.state()
    }

    pub fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let ticket = self.inner.borrow_mut().submission.begin(form)?;
        log::info!("sending contact message: {:?}", form.subject);

        let weak = Rc::downgrade(&self.inner);
        let notifier = Rc::clone(&self.notifier);
        let on_change = Rc::clone(&self.on_change);

        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if !inner.borrow_mut().submission.complete(ticket) {
                    return;
                }
                log::info!("contact message sent");
                on_change(SubmissionState::Submitted);
                notifier.success(SENT_MESSAGE);
            }),
        );
        self.inner.borrow_mut().completion = Some(handle);

        (self.on_change)(SubmissionState::Submitting);
        Ok(())
    }

    /// "Send another message": back to idle, nothing left in flight.
    pub fn reset(&self) {
        let completion = {
            let mut inner = self.inner.borrow_mut();
            inner.submission.reset();
            inner.completion.take()
        };
        drop(completion);
        (self.on_change)(SubmissionState::Idle);
    }
}

impl<S: Scheduler + 'static, N: Notifier + 'static> Drop for ContactFlow<S, N> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.completion = None;
        }
    }
}
