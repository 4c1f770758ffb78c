//! Hero Section

use leptos::prelude::*;

use crate::components::TypingText;
use crate::context::use_app_context;
use crate::typing::TypingSpeeds;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app_context();
    let (phrases, speeds) = ctx
        .config
        .with_value(|c| (c.typing.phrases.clone(), TypingSpeeds::from(&c.typing)));

    view! {
        <section id="home" class="hero">
            <div class="hero-content fade-in">
                <h1 class="hero-title">
                    "Hi, I'm " <span class="highlight">"Alex Morgan"</span>
                </h1>
                <p class="hero-subtitle">
                    "I'm a " <TypingText phrases=phrases speeds=speeds />
                </p>
                <p class="hero-description">
                    "I build fast, reliable software for the web and beyond."
                </p>
                <div class="hero-buttons">
                    <a href="#projects" class="btn btn-primary">"View My Work"</a>
                    <a href="#contact" class="btn btn-secondary">"Get In Touch"</a>
                </div>
            </div>
        </section>
    }
}
