/// Clock plus one-shot timers.
///
/// Dropping a [`Scheduler::Handle`] cancels its timer if it has not fired yet.
/// Dropping it after it fired is a no-op.
pub trait Scheduler {
    type Handle: 'static;

    /// Milliseconds on a monotonic clock.
    fn now(&self) -> f64;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[cfg(feature = "web")]
pub use browser::BrowserScheduler;

#[cfg(feature = "web")]
mod browser {
    use gloo_timers::callback::Timeout;

    use super::Scheduler;

    /// `setTimeout` + `performance.now()`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserScheduler;

    impl Scheduler for BrowserScheduler {
        type Handle = Timeout;

        fn now(&self) -> f64 {
            web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
                .unwrap_or_default()
        }

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
            Timeout::new(delay_ms, task)
        }
    }
}
