//! Browser Helpers
//!
//! Thin wrappers over the `web-sys` window APIs the page needs:
//! viewport media queries, scroll position, smooth scrolling to a section,
//! opening links in a new tab and long-lived window event listeners.
//!
//! All of these are no-ops (or return defaults) when there is no window.

use crate::{console_debug, console_warn};
use crate::features::navigation::Section;
use wasm_bindgen::prelude::*;
use web_sys::{window, ScrollBehavior, ScrollToOptions};

/// Media query matching viewports at or below `breakpoint_px`
pub fn max_width_query(breakpoint_px: u32) -> String {
    format!("(max-width:{}px)", breakpoint_px)
}

/// Check if the viewport is at or below the mobile breakpoint
pub fn is_mobile_viewport(breakpoint_px: u32) -> bool {
    window()
        .and_then(|w| w.match_media(&max_width_query(breakpoint_px)).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Current vertical scroll position of the page
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smoothly scroll so the section lands just below the fixed navigation bar
pub fn scroll_to_section(section: Section) {
    let Some(win) = window() else {
        return;
    };

    let Some(element) = win
        .document()
        .and_then(|doc| doc.get_element_by_id(section.id()))
    else {
        console_warn!("Section #{} not found", section.id());
        return;
    };

    let top = section.scroll_target(element.get_bounding_client_rect().top(), scroll_y());
    console_debug!("Scrolling to #{} at {}", section.id(), top);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Open a link in a new browser tab
pub fn open_in_new_tab(url: &str) {
    let opened = window()
        .map(|w| w.open_with_url_and_target(url, "_blank").is_ok())
        .unwrap_or(false);

    if !opened {
        console_warn!("Could not open {}", url);
    }
}

/// Register a window event listener for the lifetime of the page.
///
/// The closure is leaked on purpose: the page never unmounts its root.
pub fn on_window_event(event: &str, handler: impl FnMut() + 'static) {
    let Some(win) = window() else {
        return;
    };

    let closure = Closure::<dyn FnMut()>::new(handler);
    if let Err(e) = win.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        console_warn!("Failed to listen for {}: {:?}", event, e);
        return;
    }
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_width_query() {
        assert_eq!(max_width_query(600), "(max-width:600px)");
        assert_eq!(max_width_query(350), "(max-width:350px)");
    }
}
