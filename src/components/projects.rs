//! Projects Grid
//!
//! One card per catalog record; "View Details" goes through the same entry
//! point markup-level handlers use.

use leptos::prelude::*;

use crate::context::{open_project_modal, use_app_context};
use crate::modal::sanitize_url;
use crate::models::ProjectRecord;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ctx = use_app_context();
    let projects = ctx
        .modal
        .catalog
        .with_value(|catalog| catalog.iter().cloned().collect::<Vec<_>>());

    view! {
        <section id="projects" class="projects">
            <div class="container">
                <h2 class="section-title fade-in">"Featured Projects"</h2>
                <div class="projects-grid">
                    {projects.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let id = project.id;
    view! {
        <article class="project-card fade-in">
            <img class="project-image" src=sanitize_url(&project.image_url) alt=project.title.clone() loading="lazy" />
            <div class="project-content">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-summary">{project.summary}</p>
                <div class="project-tech">
                    {project.technologies.into_iter().map(|tech| view! {
                        <span class="tech-tag">{tech}</span>
                    }).collect_view()}
                </div>
                <button class="btn btn-outline" on:click=move |_| open_project_modal(id)>
                    "View Details"
                </button>
            </div>
        </article>
    }
}
