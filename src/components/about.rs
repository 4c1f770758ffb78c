//! About & Skills Sections
//!
//! Static copy. Elements carry reveal marker classes; skill bars carry the
//! `data-width` the reveal observer animates to.

use leptos::prelude::*;

/// (skill, proficiency %)
const SKILLS: &[(&str, u8)] = &[
    ("Rust", 90),
    ("TypeScript", 85),
    ("WebAssembly", 75),
    ("PostgreSQL", 80),
    ("Docker & CI", 70),
    ("UI Design", 65),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title fade-in">"About Me"</h2>
                <div class="about-content">
                    <div class="about-text slide-in-left">
                        <p>
                            "I'm a developer who enjoys turning rough ideas into polished, "
                            "dependable products. Most of my work sits where systems "
                            "programming meets the browser."
                        </p>
                        <p>
                            "When I'm not shipping features I contribute to open source "
                            "and write about what I learn along the way."
                        </p>
                    </div>
                    <div class="about-stats slide-in-right">
                        <div class="stat"><span class="stat-number">"6+"</span><span class="stat-label">"Years Experience"</span></div>
                        <div class="stat"><span class="stat-number">"40+"</span><span class="stat-label">"Projects Shipped"</span></div>
                        <div class="stat"><span class="stat-number">"15"</span><span class="stat-label">"Open Source Repos"</span></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <div class="container">
                <h2 class="section-title fade-in">"Skills"</h2>
                <div class="skills-grid">
                    {SKILLS.iter().map(|(name, level)| view! {
                        <div class="skill-item fade-in">
                            <div class="skill-info">
                                <span class="skill-name">{*name}</span>
                                <span class="skill-level">{format!("{}%", level)}</span>
                            </div>
                            <div class="skill-progress">
                                <div class="skill-bar" data-width=format!("{}%", level)></div>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
