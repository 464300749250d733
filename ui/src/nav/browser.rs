//! Browser bindings for the navigation state: the window viewport, the
//! router, and the hooks components use.

use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::{
    LinkTarget, Location, MenuState, PageShell, Routing, SectionNavigator, Viewport,
    throttled_tracker,
};
use crate::config::use_config;
use crate::scheduler::BrowserScheduler;

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let el = document().get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top())
    }
}

/// `leptos_router` behind [`Routing`].
pub struct RouterHandle<N> {
    pathname: Memo<String>,
    hash: Memo<String>,
    navigate: N,
}

impl<N: Fn(&str, NavigateOptions)> Routing for RouterHandle<N> {
    fn location(&self) -> Location {
        Location::new(&self.pathname.get_untracked(), &self.hash.get_untracked())
    }

    fn navigate(&self, path: &str, replace: bool) {
        (self.navigate)(
            path,
            NavigateOptions {
                replace,
                // the page shell owns scroll restoration
                scroll: false,
                ..Default::default()
            },
        );
    }
}

pub fn use_current_location() -> Memo<Location> {
    let loc = use_location();
    Memo::new(move |_| Location::new(&loc.pathname.get(), &loc.hash.get()))
}

pub fn provide_menu() -> RwSignal<MenuState> {
    let menu = RwSignal::new(MenuState::default());
    provide_context(menu);
    menu
}

pub fn use_menu() -> RwSignal<MenuState> {
    use_context::<RwSignal<MenuState>>().unwrap_or_else(provide_menu)
}

/// Click handler for nav links: scroll in place or route, then close the
/// mobile menu.
pub fn use_follow_link() -> impl Fn(LinkTarget) + Copy + 'static {
    let cfg = use_config();
    let menu = use_menu();
    let loc = use_location();

    let routing = RouterHandle {
        pathname: loc.pathname,
        hash: loc.hash,
        navigate: use_navigate(),
    };
    let navigator = StoredValue::new_local(SectionNavigator::new(
        routing,
        WindowViewport,
        cfg.header_offset_px,
    ));

    move |target| {
        navigator.with_value(|nav| {
            let mut state = menu.get_untracked();
            nav.follow(&target, &mut state);
            menu.set(state);
        });
    }
}

/// Header "scrolled" flag. Listens to window scroll for the lifetime of the
/// calling component.
pub fn use_scrolled_past_threshold() -> ReadSignal<bool> {
    let cfg = use_config();
    let (scrolled, set_scrolled) = signal(false);

    let throttle = StoredValue::new_local(throttled_tracker(
        Rc::new(BrowserScheduler),
        &cfg,
        move |past| set_scrolled.set(past),
    ));

    // page may load already scrolled
    throttle.with_value(|t| t.invoke(WindowViewport.scroll_y()));

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        throttle.try_with_value(|t| t.invoke(WindowViewport.scroll_y()));
    });

    on_cleanup(move || {
        throttle.try_with_value(|t| t.cancel());
    });

    scrolled
}

/// Route-change effects for the page shell. Call once, inside the router.
pub fn use_page_shell(menu: RwSignal<MenuState>) {
    let cfg = use_config();
    let location = use_current_location();

    let shell = StoredValue::new_local(PageShell::new(
        Rc::new(BrowserScheduler),
        Rc::new(WindowViewport),
        cfg.header_offset_px,
        cfg.anchor_settle_ms,
    ));

    Effect::new(move |_| {
        let at = location.get();
        let mut state = menu.get_untracked();
        let changed = shell
            .try_update_value(|s| s.on_location(&at, &mut state))
            .unwrap_or(false);
        if changed {
            log::debug!("route -> {at:?}");
            menu.set(state);
        }
    });
}
