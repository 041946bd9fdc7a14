//! Timings and thresholds shared by the page chrome and sections.

/// Fixed delays and scroll thresholds of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    /// How long the loading screen stays up after mount.
    pub loading_ms: u64,
    /// Fade-out of the loading screen once dismissed.
    pub loading_fade_ms: u64,
    /// Fake network delay of the contact form.
    pub submit_delay_ms: u64,
    /// How long the "message sent" banner stays visible.
    pub success_banner_ms: u64,
    /// Scroll offset past which the navbar switches to its solid variant.
    pub nav_scrolled_px: f64,
    /// Height of the fixed header, also the default anchor offset.
    pub header_px: f64,
    /// Scroll offset past which the scroll-to-top button shows.
    pub scroll_top_visible_px: f64,
    pub typewriter_tick_ms: u64,
    pub typewriter_hold_ms: u64,
}

pub static SITE: SiteConfig = SiteConfig {
    loading_ms: 2000,
    loading_fade_ms: 500,
    submit_delay_ms: 1500,
    success_banner_ms: 3000,
    nav_scrolled_px: 20.0,
    header_px: 70.0,
    scroll_top_visible_px: 400.0,
    typewriter_tick_ms: 60,
    typewriter_hold_ms: 2000,
};

impl Default for SiteConfig {
    fn default() -> Self {
        SITE
    }
}

impl SiteConfig {
    /// Number of typing ticks a finished word is held before deleting.
    pub fn typewriter_hold_ticks(&self) -> u32 {
        let ticks = self.typewriter_hold_ms / self.typewriter_tick_ms.max(1);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_ticks() {
        let cfg = SiteConfig {
            typewriter_tick_ms: 50,
            typewriter_hold_ms: 2000,
            ..SITE
        };
        assert_eq!(cfg.typewriter_hold_ticks(), 40);

        let zero_tick = SiteConfig {
            typewriter_tick_ms: 0,
            ..SITE
        };
        assert_eq!(zero_tick.typewriter_hold_ticks(), 2000);
    }
}
