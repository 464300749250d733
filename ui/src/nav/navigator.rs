use super::link::{HOME, LinkTarget, Location};
use super::menu::MenuState;

/// Scroll surface of the page.
pub trait Viewport {
    fn scroll_y(&self) -> f64;

    /// Smooth scroll to an absolute document offset.
    fn scroll_to(&self, top: f64);

    /// Top edge of the element with this id, relative to the viewport.
    fn element_top(&self, id: &str) -> Option<f64>;
}

pub trait Routing {
    fn location(&self) -> Location;

    fn navigate(&self, path: &str, replace: bool);
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn scroll_y(&self) -> f64 {
        (**self).scroll_y()
    }

    fn scroll_to(&self, top: f64) {
        (**self).scroll_to(top)
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        (**self).element_top(id)
    }
}

impl<R: Routing + ?Sized> Routing for &R {
    fn location(&self) -> Location {
        (**self).location()
    }

    fn navigate(&self, path: &str, replace: bool) {
        (**self).navigate(path, replace)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    ScrollToTop,
    ScrollToAnchor(String),
    Navigate { path: String, replace: bool },
}

pub fn resolve(target: &LinkTarget, at: &Location) -> NavAction {
    match *target {
        LinkTarget::Route(HOME) if at.is_home() => NavAction::ScrollToTop,
        LinkTarget::Route(HOME) => NavAction::Navigate {
            path: HOME.to_owned(),
            replace: true,
        },
        LinkTarget::Anchor(id) if at.is_home() => NavAction::ScrollToAnchor(id.to_owned()),
        LinkTarget::Anchor(_) => NavAction::Navigate {
            path: target.href(),
            replace: true,
        },
        LinkTarget::Route(path) => NavAction::Navigate {
            path: path.to_owned(),
            replace: false,
        },
    }
}

/// Smooth-scrolls so the section starts `header_offset` below the top of
/// the viewport. Returns `false` when no such section is rendered.
pub fn scroll_to_anchor(viewport: &impl Viewport, id: &str, header_offset: f64) -> bool {
    let Some(top) = viewport.element_top(id) else {
        log::debug!("no #{id} on this page, skipping scroll");
        return false;
    };
    viewport.scroll_to(top + viewport.scroll_y() - header_offset);
    true
}

pub struct SectionNavigator<R, V> {
    routing: R,
    viewport: V,
    header_offset: f64,
}

impl<R: Routing, V: Viewport> SectionNavigator<R, V> {
    pub fn new(routing: R, viewport: V, header_offset: f64) -> Self {
        Self {
            routing,
            viewport,
            header_offset,
        }
    }

    /// Performs the action for a clicked link and closes the menu.
    pub fn follow(&self, target: &LinkTarget, menu: &mut MenuState) -> NavAction {
        let at = self.routing.location();
        let action = resolve(target, &at);
        log::debug!("nav {target:?} from {} -> {action:?}", at.path);

        match &action {
            NavAction::ScrollToTop => self.viewport.scroll_to(0.0),
            NavAction::ScrollToAnchor(id) => {
                scroll_to_anchor(&self.viewport, id, self.header_offset);
            }
            NavAction::Navigate { path, replace } => self.routing.navigate(path, *replace),
        }

        menu.close();
        action
    }
}
