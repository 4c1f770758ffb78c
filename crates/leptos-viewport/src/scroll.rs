//! Scroll helpers: smooth in-page scrolling and body scroll lock.

use web_sys::{ScrollBehavior, ScrollToOptions};

/// Current vertical scroll offset, 0 when unavailable.
pub fn scroll_top() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smoothly scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    let Some(win) = web_sys::window() else { return };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Suspend background page scrolling.
pub fn lock_body_scroll() {
    set_body_overflow(Some("hidden"));
}

/// Restore background page scrolling.
pub fn unlock_body_scroll() {
    set_body_overflow(None);
}

fn set_body_overflow(value: Option<&str>) {
    let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let style = body.style();
    let result = match value {
        Some(value) => style.set_property("overflow", value),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if result.is_err() {
        log::warn!("could not update body overflow");
    }
}
