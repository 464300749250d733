use std::rc::Rc;

use super::link::Location;
use super::menu::MenuState;
use super::navigator::{Viewport, scroll_to_anchor};
use crate::scheduler::Scheduler;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellScroll {
    Top,
    /// Deferred until the new page has rendered.
    Anchor(String),
}

/// Tracks the last seen location and classifies each new one.
#[derive(Debug, Default)]
pub struct RouteWatcher {
    last: Option<Location>,
}

impl RouteWatcher {
    /// `None` when `at` is the location already seen. Otherwise the scroll
    /// the shell owes the new page, if any.
    pub fn observe(&mut self, at: &Location) -> Option<Option<ShellScroll>> {
        if self.last.as_ref() == Some(at) {
            return None;
        }
        let previous = self.last.replace(at.clone());

        let scroll = match &at.anchor {
            Some(id) if at.is_home() => Some(ShellScroll::Anchor(id.clone())),
            _ if previous.is_none_or(|p| p.path != at.path) => Some(ShellScroll::Top),
            _ => None,
        };
        Some(scroll)
    }
}

/// Route-change side effects of the page shell: close the menu, reset the
/// scroll position for a new page, and bring `/#anchor` targets into view
/// exactly once after they render.
pub struct PageShell<S: Scheduler + 'static, V: Viewport + 'static> {
    watcher: RouteWatcher,
    scheduler: Rc<S>,
    viewport: Rc<V>,
    header_offset: f64,
    settle_ms: u32,
    follow_up: Option<S::Handle>,
}

impl<S: Scheduler + 'static, V: Viewport + 'static> PageShell<S, V> {
    pub fn new(scheduler: Rc<S>, viewport: Rc<V>, header_offset: f64, settle_ms: u32) -> Self {
        Self {
            watcher: RouteWatcher::default(),
            scheduler,
            viewport,
            header_offset,
            settle_ms,
            follow_up: None,
        }
    }

    /// Returns `true` when `at` is a new location.
    pub fn on_location(&mut self, at: &Location, menu: &mut MenuState) -> bool {
        let Some(scroll) = self.watcher.observe(at) else {
            return false;
        };

        menu.close();
        // a newer route supersedes a follow-up that has not fired yet
        self.follow_up = None;

        match scroll {
            Some(ShellScroll::Top) => self.viewport.scroll_to(0.0),
            Some(ShellScroll::Anchor(id)) => {
                let viewport = Rc::clone(&self.viewport);
                let offset = self.header_offset;
                self.follow_up = Some(self.scheduler.schedule(
                    self.settle_ms,
                    Box::new(move || {
                        scroll_to_anchor(&*viewport, &id, offset);
                    }),
                ));
            }
            None => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{LinkTarget, Routing, SectionNavigator};
    use crate::test_support::{FakeRouter, FakeViewport, ManualScheduler};

    fn at(href: &str) -> Location {
        Location::from_href(href)
    }

    #[test]
    fn watcher_classifies_changes() {
        let mut w = RouteWatcher::default();

        assert_eq!(w.observe(&at("/")), Some(Some(ShellScroll::Top)));
        assert_eq!(w.observe(&at("/")), None);
        assert_eq!(
            w.observe(&at("/#products")),
            Some(Some(ShellScroll::Anchor("products".into())))
        );
        // dropping the hash on the same page keeps the scroll position
        assert_eq!(w.observe(&at("/")), Some(None));
        assert_eq!(w.observe(&at("/about")), Some(Some(ShellScroll::Top)));
        // anchors off the home page are not sections
        assert_eq!(w.observe(&at("/about#team")), Some(None));
    }

    #[test]
    fn anchor_from_another_route_scrolls_once_after_render() {
        let sched = Rc::new(ManualScheduler::default());
        let viewport = Rc::new(FakeViewport::default().with_region("products", 900.0));
        let router = FakeRouter::at("/about");
        let mut shell = PageShell::new(Rc::clone(&sched), Rc::clone(&viewport), 120.0, 100);
        let mut menu = MenuState::default();

        assert!(shell.on_location(&router.location(), &mut menu));
        viewport.scrolls.borrow_mut().clear();

        menu.toggle();
        let nav = SectionNavigator::new(&router, &*viewport, 120.0);
        nav.follow(&LinkTarget::Anchor("products"), &mut menu);
        assert_eq!(router.location(), at("/#products"));
        assert!(viewport.scrolls.borrow().is_empty());

        // the router reports the new location, possibly more than once
        assert!(shell.on_location(&router.location(), &mut menu));
        assert!(!shell.on_location(&router.location(), &mut menu));

        sched.advance(99);
        assert!(viewport.scrolls.borrow().is_empty());
        sched.advance(1);
        assert_eq!(*viewport.scrolls.borrow(), vec![780.0]);

        sched.advance(1_000);
        assert!(!shell.on_location(&router.location(), &mut menu));
        assert_eq!(viewport.scrolls.borrow().len(), 1);
        assert!(!menu.is_open());
    }

    #[test]
    fn newer_route_cancels_pending_anchor_scroll() {
        let sched = Rc::new(ManualScheduler::default());
        let viewport = Rc::new(FakeViewport::default().with_region("products", 900.0));
        let mut shell = PageShell::new(Rc::clone(&sched), Rc::clone(&viewport), 120.0, 100);
        let mut menu = MenuState::default();

        shell.on_location(&at("/#products"), &mut menu);
        sched.advance(50);
        shell.on_location(&at("/contact"), &mut menu);
        sched.advance(500);

        assert_eq!(*viewport.scrolls.borrow(), vec![0.0]);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn route_change_closes_menu_and_resets_scroll() {
        let sched = Rc::new(ManualScheduler::default());
        let viewport = Rc::new(FakeViewport::default());
        let mut shell = PageShell::new(Rc::clone(&sched), Rc::clone(&viewport), 120.0, 100);
        let mut menu = MenuState::default();

        shell.on_location(&at("/"), &mut menu);
        viewport.scroll_y.set(2400.0);
        menu.toggle();

        assert!(shell.on_location(&at("/about"), &mut menu));
        assert!(!menu.is_open());
        assert_eq!(viewport.scroll_y(), 0.0);
    }

    #[test]
    fn missing_section_after_route_change_is_a_no_op() {
        let sched = Rc::new(ManualScheduler::default());
        let viewport = Rc::new(FakeViewport::default());
        let mut shell = PageShell::new(Rc::clone(&sched), Rc::clone(&viewport), 120.0, 100);

        shell.on_location(&at("/#faq"), &mut MenuState::default());
        sched.advance(100);

        assert!(viewport.scrolls.borrow().is_empty());
    }
}
