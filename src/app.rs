//! Portfolio App
//!
//! Single page: navbar, hero, about, skills, projects, contact, and the
//! project detail overlay.

use leptos::prelude::*;
use leptos_viewport::{use_reveal_observer, RevealOptions};

use crate::catalog::Catalog;
use crate::components::{About, ContactSection, Hero, Navbar, ProjectModal, ProjectsSection, Skills};
use crate::config::SiteConfig;
use crate::context::{register_global_modal, AppContext};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let reveal = RevealOptions {
        root_margin: config.reveal.root_margin.clone(),
        threshold: config.reveal.threshold,
        skill_fill_delay_ms: config.reveal.skill_fill_delay_ms,
    };

    let catalog = Catalog::bundled();
    if catalog.is_empty() {
        log::warn!("project catalog is empty; project details are unavailable");
    } else {
        log::info!("portfolio starting with {} projects", catalog.len());
    }

    // Provide context to all children
    let ctx = AppContext::new(config, catalog);
    provide_context(ctx);
    register_global_modal(ctx.modal);

    // Runs after the sections below are mounted
    use_reveal_observer(reveal);

    view! {
        <Navbar />
        <main>
            <Hero />
            <About />
            <Skills />
            <ProjectsSection />
            <ContactSection />
        </main>
        <footer class="footer">
            <p>"© 2026 Alex Morgan. Built with Rust and Leptos."</p>
        </footer>
        <ProjectModal />
    }
}
