/// Path of the home page; anchors only resolve here.
pub const HOME: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Top-level page, e.g. `/about`
    Route(&'static str),
    /// Section id on the home page, without the `#`
    Anchor(&'static str),
}

impl LinkTarget {
    /// `"#products"` is an anchor, anything else a route.
    #[cfg(test)]
    pub(crate) fn parse(href: &'static str) -> Self {
        match href.strip_prefix('#') {
            Some(id) => LinkTarget::Anchor(id),
            None => LinkTarget::Route(href),
        }
    }

    /// What goes into the `href` attribute.
    pub fn href(&self) -> String {
        match self {
            LinkTarget::Route(path) => (*path).to_owned(),
            LinkTarget::Anchor(id) => format!("{HOME}#{id}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: LinkTarget,
}

impl NavLink {
    pub const fn route(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            target: LinkTarget::Route(path),
        }
    }

    pub const fn anchor(label: &'static str, id: &'static str) -> Self {
        Self {
            label,
            target: LinkTarget::Anchor(id),
        }
    }

    /// At most one of [`NAV_LINKS`] is active for any location: the home
    /// route yields to an anchor link while an anchor is set.
    ///
    /// So Home is not active at `/#products`; only Products is.
    pub fn is_active(&self, at: &Location) -> bool {
        match self.target {
            LinkTarget::Anchor(id) => at.is_home() && at.anchor.as_deref() == Some(id),
            LinkTarget::Route(HOME) => at.is_home() && at.anchor.is_none(),
            LinkTarget::Route(path) => at.path == path,
        }
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink::route("Home", HOME),
    NavLink::anchor("Products", "products"),
    NavLink::route("About", "/about"),
    NavLink::route("Contact", "/contact"),
];

/// Current route plus in-page anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub anchor: Option<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: HOME.to_owned(),
            anchor: None,
        }
    }
}

impl Location {
    /// Builds a location from the router's `pathname` and `hash` (with or
    /// without the leading `#`).
    pub fn new(pathname: &str, hash: &str) -> Self {
        let path = match pathname.trim_end_matches('/') {
            "" => HOME.to_owned(),
            p if p.starts_with('/') => p.to_owned(),
            p => format!("/{p}"),
        };
        let anchor = hash.trim_start_matches('#');

        Self {
            path,
            anchor: (!anchor.is_empty()).then(|| anchor.to_owned()),
        }
    }

    /// `"/#products"` -> path `/`, anchor `products`. Query strings are ignored.
    pub fn from_href(href: &str) -> Self {
        let (rest, hash) = href.split_once('#').unwrap_or((href, ""));
        let path = rest.split_once('?').map_or(rest, |(p, _)| p);
        Self::new(path, hash)
    }

    pub fn is_home(&self) -> bool {
        self.path == HOME
    }
}
