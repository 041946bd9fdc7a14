//! Fixed-header navigation: scrolled variant, mobile menu and scroll-spy.

use crate::config::SiteConfig;
use crate::content::{NavItem, Section};

/// Where a navigation click wants the viewport to go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub target: Section,
    pub offset: f64,
}

impl From<&NavItem> for ScrollRequest {
    fn from(item: &NavItem) -> Self {
        Self {
            target: item.target,
            offset: item.offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    scrolled_px: f64,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            scrolled_px: config.nav_scrolled_px,
            scrolled: false,
            menu_open: false,
        }
    }

    pub fn on_scroll(&mut self, y: f64) {
        self.scrolled = y > self.scrolled_px;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Picking an entry always collapses the mobile menu.
    pub fn select(&mut self, item: &NavItem) -> ScrollRequest {
        self.menu_open = false;
        ScrollRequest::from(item)
    }
}

/// Absolute document y that puts a section's anchor `offset` px from the top.
///
/// `anchor_top` is the anchor's viewport-relative top, `page_y` the current
/// scroll position.
pub fn scroll_destination(anchor_top: f64, page_y: f64, offset: f64) -> f64 {
    (page_y + anchor_top + offset).max(0.0)
}

/// Scroll request for a section reached without a nav entry, e.g. from the
/// URL fragment. Home sits flush with the top, the rest clear the header.
pub fn section_request(section: Section, config: &SiteConfig) -> ScrollRequest {
    let offset = match section {
        Section::Home => 0.0,
        _ => -config.header_px,
    };
    ScrollRequest {
        target: section,
        offset,
    }
}

/// Viewport-relative extent of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

/// The section under the spy line, normally just below the fixed header.
pub fn active_section(bounds: &[SectionBounds], line: f64) -> Option<Section> {
    bounds
        .iter()
        .find(|b| b.top <= line && line < b.bottom)
        .map(|b| b.section)
}

/// Scroll-spy line for [`active_section`]: one pixel under the header.
pub fn spy_line(config: &SiteConfig) -> f64 {
    config.header_px + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SITE;
    use crate::content::NAV_ITEMS;

    fn bounds(stack: &[(Section, f64)]) -> Vec<SectionBounds> {
        // consecutive sections stacked from a starting viewport offset
        stack
            .windows(2)
            .map(|w| SectionBounds {
                section: w[0].0,
                top: w[0].1,
                bottom: w[1].1,
            })
            .collect()
    }

    #[test]
    fn test_section_request_matches_nav_entries() {
        for item in &NAV_ITEMS {
            assert_eq!(section_request(item.target, &SITE), ScrollRequest::from(item));
        }
        assert_eq!(section_request(Section::Achievements, &SITE).offset, -70.0);
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = NavState::new(&SITE);
        nav.on_scroll(0.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(20.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(21.0);
        assert!(nav.is_scrolled());
        nav.on_scroll(5.0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_select_closes_menu() {
        let mut nav = NavState::new(&SITE);
        nav.toggle_menu();
        assert!(nav.is_menu_open());

        let contact = NAV_ITEMS
            .iter()
            .find(|i| i.target == Section::Contact)
            .expect("contact entry");
        let req = nav.select(contact);
        assert!(!nav.is_menu_open());
        assert_eq!(
            req,
            ScrollRequest {
                target: Section::Contact,
                offset: -70.0
            }
        );

        // selecting with the menu closed keeps it closed
        nav.select(&NAV_ITEMS[0]);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_scroll_destination_applies_offset() {
        // anchor 900px below the viewport top, already scrolled 300px
        assert_eq!(scroll_destination(900.0, 300.0, -70.0), 1130.0);
        // anchor above the viewport
        assert_eq!(scroll_destination(-200.0, 1000.0, -70.0), 730.0);
        // never scrolls above the document
        assert_eq!(scroll_destination(10.0, 0.0, -70.0), 0.0);
        assert_eq!(scroll_destination(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_active_section() {
        let stack = bounds(&[
            (Section::Home, -1200.0),
            (Section::About, -400.0),
            (Section::Skills, 300.0),
            (Section::Projects, 1100.0),
        ]);
        let line = spy_line(&SITE);
        assert_eq!(active_section(&stack, line), Some(Section::About));
        assert_eq!(active_section(&stack, -1300.0), None);
        assert_eq!(active_section(&stack, 300.0), Some(Section::Skills));
    }
}
