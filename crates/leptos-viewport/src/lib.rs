//! Leptos Viewport Utilities
//!
//! Browser plumbing shared by single-page sites: trailing debounce for
//! high-frequency events, one-shot scroll reveal, smooth scrolling and body
//! scroll lock. The state machines are plain Rust; only the binders touch
//! the DOM.

pub mod debounce;
pub mod reveal;
pub mod scroll;

use leptos::prelude::*;

pub use debounce::{debounce, Debouncer, Scheduled, Ticket};
pub use reveal::{bind_reveal_observer, RevealKind, RevealObserver, RevealOptions, RevealTracker, SkillWidth};
pub use scroll::{lock_body_scroll, scroll_top, smooth_scroll_to, unlock_body_scroll};

/// Run `on_scroll` with the current scroll offset, at most once per
/// `wait_ms` burst of window scroll events.
pub fn use_debounced_scroll<F>(wait_ms: u32, on_scroll: F)
where
    F: Fn(f64) + 'static,
{
    let debounced = debounce(wait_ms, on_scroll);
    let handle = window_event_listener(leptos::ev::scroll, move |_| debounced(scroll_top()));
    on_cleanup(move || handle.remove());
}

/// Start observing reveal markers once the view is mounted. The observer
/// lives until the owning component is cleaned up.
pub fn use_reveal_observer(options: RevealOptions) {
    let observer = StoredValue::new_local(None::<RevealObserver>);
    Effect::new(move |_| match bind_reveal_observer(&options) {
        Ok(bound) => observer.set_value(Some(bound)),
        Err(err) => log::warn!("reveal observer unavailable: {:?}", err),
    });
    on_cleanup(move || observer.set_value(None));
}
