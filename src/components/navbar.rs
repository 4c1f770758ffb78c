//! Navigation Bar
//!
//! Mobile menu, smooth in-page links, active-link highlighting and
//! hide-on-scroll-down.

use leptos::prelude::*;
use leptos_viewport::{smooth_scroll_to, use_debounced_scroll};
use wasm_bindgen::JsCast;

use crate::components::ThemeToggle;
use crate::context::use_app_context;
use crate::navigation::{anchor_id, NavigationState, ScrollRules, SectionBounds};

/// In-page links, in document order
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

fn section_element(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Current layout of every linked section
fn measure_sections() -> Vec<SectionBounds> {
    NAV_LINKS
        .iter()
        .filter_map(|(href, _)| {
            let id = anchor_id(href)?;
            let el = section_element(id)?;
            Some(SectionBounds::new(id, el.offset_top() as f64, el.offset_height() as f64))
        })
        .collect()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let nav = RwSignal::new(NavigationState::default());
    let navbar_ref = NodeRef::<leptos::html::Nav>::new();

    let (debounce_ms, rules, header_fallback) = ctx.config.with_value(|c| {
        let rules = ScrollRules {
            hide_threshold: c.navigation.hide_threshold_px,
            lookahead: c.navigation.active_lookahead_px,
        };
        (c.navigation.scroll_debounce_ms, rules, c.navigation.header_offset_px)
    });

    use_debounced_scroll(debounce_ms, move |scroll_top| {
        let sections = measure_sections();
        nav.update(|state| state.on_scroll(scroll_top, &sections, rules));
    });

    let header_height = move || {
        navbar_ref
            .get_untracked()
            .map(|el| el.offset_height() as f64)
            .filter(|h| *h > 0.0)
            .unwrap_or(header_fallback)
    };

    let follow_link = move |ev: web_sys::MouseEvent, href: &'static str| {
        ev.prevent_default();
        let target_top = anchor_id(href)
            .and_then(section_element)
            .map(|section| section.offset_top() as f64);
        let header = header_height();
        let destination = nav.try_update(|state| state.follow_link(href, target_top, header)).flatten();
        if let Some(top) = destination {
            smooth_scroll_to(top);
        }
    };

    let toggle_menu = move |_| {
        nav.update(|state| {
            let open = state.toggle_menu();
            log::debug!("menu open: {}", open);
        });
    };

    view! {
        <nav
            class="navbar"
            node_ref=navbar_ref
            style=move || {
                if nav.with(|n| n.navbar_hidden) {
                    "transform: translateY(-100%);"
                } else {
                    "transform: translateY(0);"
                }
            }
        >
            <div class="nav-container">
                <a href="#home" class="nav-logo" on:click=move |ev| follow_link(ev, "#home")>
                    "Portfolio"
                </a>
                <ul class=move || if nav.with(|n| n.menu_open) { "nav-menu active" } else { "nav-menu" }>
                    {NAV_LINKS.iter().map(|(href, label)| {
                        let href: &'static str = *href;
                        let id = anchor_id(href).unwrap_or_default();
                        view! {
                            <li class="nav-item">
                                <a
                                    href=href
                                    class=move || if nav.with(|n| n.is_active(id)) { "nav-link active" } else { "nav-link" }
                                    on:click=move |ev| follow_link(ev, href)
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
                <div class="nav-actions">
                    <ThemeToggle />
                    <button
                        class=move || if nav.with(|n| n.menu_open) { "hamburger active" } else { "hamburger" }
                        aria-label="Toggle menu"
                        on:click=toggle_menu
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
