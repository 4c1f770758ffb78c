//! Theme Toggle Button
//!
//! Applies the saved theme on mount and flips it on click.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::preferences::BrowserStore;
use crate::theme::{apply_to_document, ThemeController};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let key = ctx.config.with_value(|c| c.theme_storage_key.clone());
    let controller = StoredValue::new_local(ThemeController::load(BrowserStore::open(), key));
    let (theme, set_theme) = signal(controller.with_value(|c| c.theme()));

    Effect::new(move |_| apply_to_document(theme.get()));

    let toggle = move |_| {
        controller.update_value(|c| set_theme.set(c.toggle()));
    };

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            title=move || format!("Switch to {} theme", theme.get().toggled().as_str())
            on:click=toggle
        >
            <span class="theme-icon">{move || theme.get().icon()}</span>
        </button>
    }
}
