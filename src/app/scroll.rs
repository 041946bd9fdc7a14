use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::content::Section;
use crate::nav::{scroll_destination, SectionBounds};

pub fn scroll_to_y(y: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(y);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Smooth-scrolls so `section` sits `offset` px from the top of the viewport.
pub fn scroll_to_section(section: Section, offset: f64) {
    let Some(el) = document().get_element_by_id(section.anchor()) else {
        log::warn!("no element with id #{}", section.anchor());
        return;
    };
    let top = el.get_bounding_client_rect().top();
    let page_y = window().scroll_y().unwrap_or_default();
    scroll_to_y(scroll_destination(top, page_y, offset));
}

/// Viewport-relative bounds of every section currently in the document.
pub fn section_bounds() -> Vec<SectionBounds> {
    let doc = document();
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let rect = doc
                .get_element_by_id(section.anchor())?
                .get_bounding_client_rect();
            Some(SectionBounds {
                section,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

/// Stops the page behind an overlay from scrolling.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let overflow = if locked { "hidden" } else { "auto" };
    if let Err(e) = body.style().set_property("overflow", overflow) {
        log::warn!("couldn't set body overflow: {e:?}");
    }
}
