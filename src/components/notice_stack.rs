//! Notice Stack
//!
//! Renders transient notices; removal is driven by whoever pushed them.

use leptos::prelude::*;

use crate::notices::NoticeQueue;

#[component]
pub fn NoticeStack(notices: RwSignal<NoticeQueue>) -> impl IntoView {
    view! {
        <div class="notice-stack" aria-live="polite">
            <For
                each=move || notices.with(|q| q.notices().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    view! { <div class=notice.kind.class()>{notice.message}</div> }
                }
            />
        </div>
    }
}
