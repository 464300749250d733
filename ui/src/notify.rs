use std::cell::RefCell;
use std::rc::Rc;

use crate::scheduler::Scheduler;

/// Where user-facing confirmations go.
pub trait Notifier {
    fn success(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for std::rc::Rc<N> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Oldest toasts beyond this are dropped.
    pub const MAX_VISIBLE: usize = 3;

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > Self::MAX_VISIBLE {
            let overflow = self.items.len() - Self::MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// A [`ToastQueue`] whose toasts expire `ttl_ms` after they were pushed.
///
/// `on_change` receives a snapshot after every push, dismissal and expiry.
pub struct ToastStack<S: Scheduler + 'static> {
    inner: Rc<RefCell<StackInner<S::Handle>>>,
    scheduler: Rc<S>,
    ttl_ms: u32,
    on_change: Rc<dyn Fn(ToastQueue)>,
}

struct StackInner<H> {
    queue: ToastQueue,
    // fired handles stay until their toast is gone from the queue
    expiries: Vec<(u64, H)>,
}

impl<S: Scheduler + 'static> ToastStack<S> {
    pub fn new(scheduler: Rc<S>, ttl_ms: u32, on_change: impl Fn(ToastQueue) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StackInner {
                queue: ToastQueue::default(),
                expiries: Vec::new(),
            })),
            scheduler,
            ttl_ms,
            on_change: Rc::new(on_change),
        }
    }

    pub fn push(&self, kind: ToastKind, message: &str) -> u64 {
        let (id, evicted) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.queue.push(kind, message);
            let StackInner { queue, expiries } = &mut *inner;
            let (kept, evicted): (Vec<_>, Vec<_>) = expiries
                .drain(..)
                .partition(|(e, _)| queue.items().iter().any(|t| t.id == *e));
            *expiries = kept;
            (id, evicted)
        };
        drop(evicted);

        let weak = Rc::downgrade(&self.inner);
        let on_change = Rc::clone(&self.on_change);
        let handle = self.scheduler.schedule(
            self.ttl_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let snapshot = {
                    let mut inner = inner.borrow_mut();
                    inner.queue.dismiss(id);
                    inner.queue.clone()
                };
                on_change(snapshot);
            }),
        );
        self.inner.borrow_mut().expiries.push((id, handle));

        self.publish();
        id
    }

    /// Removes the toast now and cancels its expiry.
    pub fn dismiss(&self, id: u64) {
        let expiry = {
            let mut inner = self.inner.borrow_mut();
            inner.queue.dismiss(id);
            let at = inner.expiries.iter().position(|(e, _)| *e == id);
            at.map(|i| inner.expiries.remove(i))
        };
        drop(expiry);
        self.publish();
    }

    pub fn snapshot(&self) -> ToastQueue {
        self.inner.borrow().queue.clone()
    }

    fn publish(&self) {
        (self.on_change)(self.snapshot());
    }
}

impl<S: Scheduler + 'static> Notifier for ToastStack<S> {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }
}

impl<S: Scheduler + 'static> Drop for ToastStack<S> {
    fn drop(&mut self) {
        let expiries = match self.inner.try_borrow_mut() {
            Ok(mut inner) => std::mem::take(&mut inner.expiries),
            Err(_) => return,
        };
        drop(expiries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ManualScheduler;

    type Seen = Rc<RefCell<Vec<ToastQueue>>>;

    fn stack(sched: &Rc<ManualScheduler>) -> (ToastStack<ManualScheduler>, Seen) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let stack = ToastStack::new(Rc::clone(sched), 4000, move |q| sink.borrow_mut().push(q));
        (stack, seen)
    }

    fn messages(q: &ToastQueue) -> Vec<&str> {
        q.items().iter().map(|t| t.message.as_str()).collect()
    }

    #[test]
    fn push_and_dismiss() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Success, "sent");
        let b = q.push(ToastKind::Success, "sent again");
        assert_ne!(a, b);

        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].message, "sent again");

        // unknown ids are ignored
        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
    }

    #[test]
    fn keeps_only_the_newest() {
        let mut q = ToastQueue::default();
        for i in 0..5 {
            q.push(ToastKind::Success, format!("#{i}"));
        }
        let shown: Vec<_> = q.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(shown, ["#2", "#3", "#4"]);
    }

    #[test]
    fn toast_expires_exactly_at_its_ttl() {
        let sched = Rc::new(ManualScheduler::default());
        let (stack, seen) = stack(&sched);

        stack.success("sent");
        sched.advance(3999);
        assert_eq!(messages(&stack.snapshot()), ["sent"]);

        sched.advance(1);
        assert!(stack.snapshot().items().is_empty());
        assert!(seen.borrow().last().is_some_and(|q| q.items().is_empty()));
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn each_toast_keeps_its_own_deadline() {
        let sched = Rc::new(ManualScheduler::default());
        let (stack, _) = stack(&sched);

        let a = stack.push(ToastKind::Success, "a");
        sched.advance(1000);
        stack.push(ToastKind::Success, "b");
        assert_eq!(sched.pending(), 2);

        stack.dismiss(a);
        assert_eq!(messages(&stack.snapshot()), ["b"]);
        assert_eq!(sched.pending(), 1);

        sched.advance(3999);
        assert_eq!(messages(&stack.snapshot()), ["b"]);
        sched.advance(1);
        assert!(stack.snapshot().items().is_empty());
    }

    #[test]
    fn evicted_toasts_drop_their_timers() {
        let sched = Rc::new(ManualScheduler::default());
        let (stack, _) = stack(&sched);

        for i in 0..5 {
            stack.push(ToastKind::Success, &format!("#{i}"));
        }
        assert_eq!(messages(&stack.snapshot()), ["#2", "#3", "#4"]);
        assert_eq!(sched.pending(), ToastQueue::MAX_VISIBLE);
    }

    #[test]
    fn dropping_the_stack_cancels_expiries() {
        let sched = Rc::new(ManualScheduler::default());
        let (stack, seen) = stack(&sched);

        stack.success("sent");
        drop(stack);
        let published = seen.borrow().len();

        sched.advance(5000);
        assert_eq!(sched.pending(), 0);
        assert_eq!(seen.borrow().len(), published);
    }
}
