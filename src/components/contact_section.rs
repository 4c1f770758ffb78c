//! Contact Section
//!
//! Four required fields validated on blur and again on submit, then an
//! async hand-off to the submission collaborator.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::NoticeStack;
use crate::contact::{ContactForm, ContactFormStoreFields, Field, SubmitNotice};
use crate::context::use_app_context;
use crate::notices::{NoticeKind, NoticeQueue};

const SENT_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
const FAILED_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";

fn field_value(form: Store<ContactForm>, field: Field) -> String {
    match field {
        Field::Name => form.name().read().value.clone(),
        Field::Email => form.email().read().value.clone(),
        Field::Subject => form.subject().read().value.clone(),
        Field::Message => form.message().read().value.clone(),
    }
}

fn field_error(form: Store<ContactForm>, field: Field) -> Option<String> {
    match field {
        Field::Name => form.name().read().error.clone(),
        Field::Email => form.email().read().error.clone(),
        Field::Subject => form.subject().read().error.clone(),
        Field::Message => form.message().read().error.clone(),
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_app_context();
    let contact = ctx.config.with_value(|c| c.contact.clone());
    let notice_ms = contact.notice_duration_ms;
    let contact = StoredValue::new(contact);

    let form = Store::new(ContactForm::default());
    let notices = RwSignal::new(NoticeQueue::default());

    let show_notice = move |kind: NoticeKind, message: &'static str| {
        let Some(id) = notices.try_update(|q| q.push(kind, message)) else { return };
        spawn_local(async move {
            TimeoutFuture::new(notice_ms).await;
            notices.update(|q| {
                q.dismiss(id);
            });
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(message) = form.write().begin_submit() else { return };

        let contact = contact.get_value();
        spawn_local(async move {
            let outcome = commands::submit_contact(&message, &contact).await;
            // Busy state clears here whatever the outcome.
            let notice = form.write().finish_submit(outcome);
            match notice {
                SubmitNotice::Sent => show_notice(NoticeKind::Success, SENT_MESSAGE),
                SubmitNotice::Failed(_) => show_notice(NoticeKind::Error, FAILED_MESSAGE),
            }
        });
    };

    let busy = move || form.submission().get().is_busy();

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title fade-in">"Get In Touch"</h2>
                <div class="contact-content">
                    <div class="contact-info slide-in-left">
                        <p>"Have a project in mind or just want to say hello? My inbox is open."</p>
                    </div>
                    <form class="contact-form slide-in-right" novalidate=true on:submit=on_submit>
                        {Field::ALL.into_iter().map(|field| view! { <ContactField form=form field=field /> }).collect_view()}
                        <button type="submit" class="btn btn-primary submit-btn" disabled=busy>
                            <span class="btn-text">{move || if busy() { "Sending..." } else { "Send Message" }}</span>
                            <span class=move || if busy() { "spinner active" } else { "spinner" }></span>
                        </button>
                    </form>
                    <NoticeStack notices=notices />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactField(form: Store<ContactForm>, field: Field) -> impl IntoView {
    let value = move || field_value(form, field);
    let error = move || field_error(form, field);
    let control_class = move || if error().is_some() { "form-control error" } else { "form-control" };

    let on_input = move |ev: web_sys::Event| form.write().input(field, event_target_value(&ev));
    let on_blur = move |_: web_sys::FocusEvent| {
        form.write().blur(field);
    };

    let control = if field == Field::Message {
        view! {
            <textarea
                id=field.key()
                name=field.key()
                rows="5"
                required=true
                class=control_class
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=if field == Field::Email { "email" } else { "text" }
                id=field.key()
                name=field.key()
                required=true
                class=control_class
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=field.key()>{field.label()}</label>
            {control}
            <span class="error-message">{move || error().unwrap_or_default()}</span>
        </div>
    }
}
