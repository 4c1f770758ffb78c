//! Typing Animation
//!
//! Types a phrase one character at a time, pauses, deletes it, then moves
//! on to the next phrase, forever. `step` is the whole state machine; the
//! hero component owns the timer that drives it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::config::TypingConfig;

/// Delays between steps, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingSpeeds {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
}

impl From<&TypingConfig> for TypingSpeeds {
    fn from(config: &TypingConfig) -> Self {
        Self {
            type_ms: config.type_speed_ms,
            delete_ms: config.delete_speed_ms,
            pause_ms: config.delay_between_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypingState {
    phrases: Vec<String>,
    phrase_index: usize,
    char_count: usize,
    deleting: bool,
}

impl TypingState {
    /// `None` for an empty phrase list.
    pub fn new(phrases: Vec<String>) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase_index: 0,
            char_count: 0,
            deleting: false,
        })
    }

    #[cfg(test)]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[cfg(test)]
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    #[cfg(test)]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    fn current_len(&self) -> usize {
        self.phrases[self.phrase_index].chars().count()
    }

    /// The currently rendered prefix of the current phrase.
    pub fn visible_text(&self) -> &str {
        let phrase = &self.phrases[self.phrase_index];
        match phrase.char_indices().nth(self.char_count) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Advance one character and return the delay before the next step.
    pub fn step(&mut self, speeds: TypingSpeeds) -> u32 {
        let len = self.current_len();
        if self.deleting {
            self.char_count = self.char_count.saturating_sub(1);
        } else {
            self.char_count = (self.char_count + 1).min(len);
        }

        let mut delay = if self.deleting { speeds.delete_ms } else { speeds.type_ms };

        if !self.deleting && self.char_count == len {
            delay = speeds.pause_ms;
            self.deleting = true;
        } else if self.deleting && self.char_count == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        }
        delay
    }
}

/// Slot holding the next scheduled step. The running loop re-arms it.
pub type TimerSlot<T = Timeout> = Rc<RefCell<Option<T>>>;

/// Owner of a running animation's pending step timer. Dropping the handle
/// drops the timer, which clears it before it fires.
#[derive(Debug)]
pub struct TypingHandle<T = Timeout> {
    pending: TimerSlot<T>,
}

impl<T> TypingHandle<T> {
    pub fn new() -> Self {
        Self {
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Shared slot for the loop to store each next step in.
    pub fn slot(&self) -> TimerSlot<T> {
        Rc::clone(&self.pending)
    }

    pub fn cancel(&self) {
        // Drop outside the borrow.
        let timer = self.pending.borrow_mut().take();
        drop(timer);
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<T> Default for TypingHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for TypingHandle<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    const UNIT: TypingSpeeds = TypingSpeeds {
        type_ms: 1,
        delete_ms: 1,
        pause_ms: 1,
    };

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_phrase_list_is_rejected() {
        assert!(TypingState::new(Vec::new()).is_none());
    }

    #[test]
    fn test_single_phrase_cycle() {
        let mut state = TypingState::new(phrases(&["ab"])).unwrap();
        assert_eq!(state.char_count(), 0);

        let mut counts = Vec::new();
        for _ in 0..12 {
            state.step(UNIT);
            counts.push(state.char_count());
            assert_eq!(state.phrase_index(), 0);
        }
        // type 1,2 / delete 1,0 / repeat
        assert_eq!(counts, vec![1, 2, 1, 0, 1, 2, 1, 0, 1, 2, 1, 0]);
    }

    #[test]
    fn test_delays_follow_phase() {
        let speeds = TypingSpeeds {
            type_ms: 100,
            delete_ms: 50,
            pause_ms: 2000,
        };
        let mut state = TypingState::new(phrases(&["ab"])).unwrap();
        assert_eq!(state.step(speeds), 100);
        assert_eq!(state.step(speeds), 2000);
        assert!(state.is_deleting());
        assert_eq!(state.step(speeds), 50);
        assert_eq!(state.step(speeds), 50);
        assert!(!state.is_deleting());
    }

    #[test]
    fn test_phrase_index_wraps() {
        let mut state = TypingState::new(phrases(&["a", "bb"])).unwrap();

        // "a": type 1, delete 0
        state.step(UNIT);
        assert_eq!(state.visible_text(), "a");
        state.step(UNIT);
        assert_eq!(state.char_count(), 0);
        assert_eq!(state.phrase_index(), 1);

        // "bb": type 1, 2, delete 1, 0
        state.step(UNIT);
        assert_eq!(state.visible_text(), "b");
        state.step(UNIT);
        assert_eq!(state.visible_text(), "bb");
        state.step(UNIT);
        state.step(UNIT);
        assert_eq!(state.char_count(), 0);
        assert_eq!(state.phrase_index(), 0);
    }

    #[test]
    fn test_count_stays_within_phrase() {
        let mut state = TypingState::new(phrases(&["héllo", "wörld!"])).unwrap();
        for _ in 0..100 {
            state.step(UNIT);
            let len = state.visible_text().chars().count();
            assert_eq!(len, state.char_count());
            assert!(state.phrase_index() < 2);
        }
    }

    /// Records whether the timer it stands in for was cleared.
    struct FakeTimer(Rc<Cell<bool>>);

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_dropping_handle_clears_pending_step() {
        let cleared = Rc::new(Cell::new(false));
        let handle = TypingHandle::<FakeTimer>::new();
        let slot = handle.slot();
        slot.borrow_mut().replace(FakeTimer(Rc::clone(&cleared)));
        assert!(handle.is_armed());

        drop(handle);
        assert!(cleared.get());
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn test_rearming_replaces_previous_step() {
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let handle = TypingHandle::<FakeTimer>::new();
        let slot = handle.slot();

        slot.borrow_mut().replace(FakeTimer(Rc::clone(&first)));
        slot.borrow_mut().replace(FakeTimer(Rc::clone(&second)));
        assert!(first.get());
        assert!(!second.get());

        handle.cancel();
        assert!(second.get());
        assert!(!handle.is_armed());
    }
}
