use std::rc::Rc;

use leptos::prelude::*;

use super::icon::Icon;
use crate::config::use_config;
use crate::content::Glyph;
use crate::notify::{Notifier, ToastKind, ToastQueue, ToastStack};
use crate::scheduler::BrowserScheduler;

/// Handle to the page's toast stack.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: ReadSignal<ToastQueue>,
    stack: StoredValue<ToastStack<BrowserScheduler>, LocalStorage>,
}

impl Toasts {
    pub fn push(&self, kind: ToastKind, message: &str) {
        self.stack.try_with_value(|s| s.push(kind, message));
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.try_with_value(|s| s.dismiss(id));
    }
}

impl Notifier for Toasts {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }
}

pub fn provide_toasts(ttl_ms: u32) -> Toasts {
    let (items, set_items) = signal(ToastQueue::default());
    let stack = ToastStack::new(Rc::new(BrowserScheduler), ttl_ms, move |q| {
        set_items.try_set(q);
    });
    let toasts = Toasts {
        items,
        stack: StoredValue::new_local(stack),
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(|| provide_toasts(use_config().toast_ttl_ms))
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div
            class="fixed bottom-6 right-6 z-[60] flex flex-col gap-3 w-80 max-w-[calc(100vw-3rem)]"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || toasts.items.with(|q| q.items().to_vec())
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="flex items-start gap-3 rounded-xl bg-card border border-border shadow-card px-4 py-3 text-sm">
                            {match toast.kind {
                                ToastKind::Success => view! {
                                    <Icon glyph=Glyph::CheckCircle size=18 class="text-primary mt-0.5 shrink-0"/>
                                },
                            }}
                            <p class="flex-grow">{toast.message}</p>
                            <button
                                class="text-muted-foreground hover:text-foreground"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <Icon glyph=Glyph::X size=16/>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
