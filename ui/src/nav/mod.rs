//! Navbar behaviour: scroll tracking, link resolution, the mobile menu and
//! the page shell's reaction to route changes.

mod link;
mod menu;
mod navigator;
mod scroll;
mod shell;

#[cfg(feature = "web")]
pub mod browser;

pub use link::{HOME, LinkTarget, Location, NAV_LINKS, NavLink};
pub use menu::MenuState;
pub use navigator::{NavAction, Routing, SectionNavigator, Viewport, resolve, scroll_to_anchor};
pub use scroll::{ScrollTracker, throttled_tracker};
pub use shell::{PageShell, RouteWatcher, ShellScroll};
