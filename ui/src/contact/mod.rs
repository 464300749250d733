//! Contact form: field model, validation, and the simulated send.

mod flow;
mod form;

pub use flow::{ContactFlow, SENT_MESSAGE, Submission, SubmissionState, SubmitError, Ticket};
pub use form::{ContactForm, FormError, FormField};
