//! Typing Text
//!
//! Drives a `TypingState` from a chain of one-shot timers. Cleanup drops the
//! pending timer; a fresh mount starts from the first phrase.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::typing::{TimerSlot, TypingHandle, TypingSpeeds, TypingState};

#[component]
pub fn TypingText(phrases: Vec<String>, speeds: TypingSpeeds) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let handle = StoredValue::new_local(None::<TypingHandle>);

    match TypingState::new(phrases) {
        Some(state) => {
            let owned = TypingHandle::new();
            schedule_step(owned.slot(), Rc::new(RefCell::new(state)), speeds, set_text, speeds.type_ms);
            handle.set_value(Some(owned));
        }
        None => log::warn!("typing animation has no phrases"),
    }

    // Dropping the handle clears the pending step.
    on_cleanup(move || handle.set_value(None));

    view! {
        <span class="typing-text">{move || text.get()}</span>
        <span class="typing-cursor" aria-hidden="true">"|"</span>
    }
}

fn schedule_step(
    slot: TimerSlot,
    state: Rc<RefCell<TypingState>>,
    speeds: TypingSpeeds,
    set_text: WriteSignal<String>,
    delay_ms: u32,
) {
    let next_slot = Rc::clone(&slot);
    let timeout = Timeout::new(delay_ms, move || {
        let (visible, next_delay) = {
            let mut state = state.borrow_mut();
            let next_delay = state.step(speeds);
            (state.visible_text().to_string(), next_delay)
        };
        set_text.set(visible);
        schedule_step(next_slot, state, speeds, set_text, next_delay);
    });
    // The replaced timer has already fired.
    let fired = slot.borrow_mut().replace(timeout);
    drop(fired);
}
