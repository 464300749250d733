use leptos::prelude::use_context;
use log::Level;

/// Tunables for the page chrome. Provided once at the app root through
/// context; components fall back to the defaults when none is provided.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    /// Header switches to its compact style past this offset
    pub scroll_threshold_px: f64,
    pub scroll_throttle_ms: u32,
    /// Fixed header height kept clear when scrolling to a section. Not
    /// measured from the rendered header.
    pub header_offset_px: f64,
    /// Wait before scrolling to an anchor on a freshly routed page
    pub anchor_settle_ms: u32,
    /// Stand-in for the contact form's network round trip
    pub submit_delay_ms: u32,
    pub toast_ttl_ms: u32,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 20.0,
            scroll_throttle_ms: 100,
            header_offset_px: 120.0,
            anchor_settle_ms: 100,
            submit_delay_ms: 1500,
            toast_ttl_ms: 4000,
            log_level: if cfg!(debug_assertions) {
                Level::Debug
            } else {
                Level::Info
            },
        }
    }
}

pub fn use_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_builds_log_verbosely() {
        let cfg = SiteConfig::default();
        let expected = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
        assert_eq!(cfg.log_level, expected);
        assert!(cfg.log_level >= Level::Info);
    }
}
