//! Project Detail Modal
//!
//! Renders the open project, locks page scroll while open, and closes on
//! backdrop click or Escape.

use leptos::prelude::*;
use leptos_viewport::{lock_body_scroll, unlock_body_scroll};

use crate::context::use_app_context;
use crate::modal::{render_project, ActionKind, Dismissal, ProjectDetail};

#[component]
pub fn ProjectModal() -> impl IntoView {
    let modal = use_app_context().modal;

    Effect::new(move |_| {
        if modal.state.with(|m| m.is_scroll_locked()) {
            lock_body_scroll();
        } else {
            unlock_body_scroll();
        }
    });

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        modal.dismiss(Dismissal::Key(&ev.key()));
    });
    on_cleanup(move || keydown.remove());

    let on_backdrop = move |ev: web_sys::MouseEvent| {
        modal.dismiss(Dismissal::Click {
            on_backdrop: ev.target() == ev.current_target(),
        });
    };

    let detail = move || {
        let id = modal.state.with(|m| m.current_project())?;
        modal.catalog.with_value(|catalog| catalog.get(id).map(render_project))
    };

    view! {
        <div
            id="project-modal"
            class=move || if modal.state.with(|m| m.is_open()) { "modal active" } else { "modal" }
            on:click=on_backdrop
        >
            <div class="modal-content" role="dialog" aria-modal="true">
                <button class="modal-close" aria-label="Close" on:click=move |_| modal.dismiss(Dismissal::CloseButton)>
                    "×"
                </button>
                <div class="modal-body">
                    {move || detail().map(|detail| view! { <ProjectDetailView detail=detail /> })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectDetailView(detail: ProjectDetail) -> impl IntoView {
    view! {
        <img class="modal-image" src=detail.image_src alt=detail.image_alt />
        <h2 class="modal-title">{detail.title}</h2>
        <p class="modal-description">{detail.description}</p>

        <h3>"Technologies Used"</h3>
        <div class="modal-tech">
            {detail.technologies.into_iter().map(|tech| view! {
                <span class="tech-tag">{tech}</span>
            }).collect_view()}
        </div>

        <h3>"Key Features"</h3>
        <ul class="modal-features">
            {detail.features.into_iter().map(|feature| view! { <li>{feature}</li> }).collect_view()}
        </ul>

        <h3>"Challenges & Solutions"</h3>
        <p class="modal-challenges">{detail.challenges}</p>

        <div class="modal-links">
            {detail.actions.into_iter().map(|action| {
                let class = match action.kind {
                    ActionKind::LiveSite => "btn btn-primary",
                    ActionKind::SourceCode => "btn btn-secondary",
                };
                view! {
                    <a href=action.href class=class target="_blank" rel="noopener noreferrer">
                        {action.label}
                    </a>
                }
            }).collect_view()}
        </div>
    }
}
