//! Trailing debounce.
//!
//! Every call supersedes the pending one; only the last call in a burst
//! reaches the wrapped callback, `wait` after it was made.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Identifies one scheduled call. Only the latest ticket can fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// A call that has been accepted and must be fired after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub ticket: Ticket,
    pub delay_ms: u32,
}

/// Timer-free debounce bookkeeping.
///
/// The caller owns the timer: schedule `fire(ticket)` after `delay_ms` for
/// every `Scheduled` returned by `call`. Stale tickets fire as no-ops.
#[derive(Debug)]
pub struct Debouncer<T> {
    wait_ms: u32,
    generation: u64,
    pending: Option<(Ticket, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Record a call, replacing whatever was pending.
    pub fn call(&mut self, args: T) -> Scheduled {
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.pending = Some((ticket, args));
        Scheduled {
            ticket,
            delay_ms: self.wait_ms,
        }
    }

    /// Take the pending arguments if `ticket` is still the latest call.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        match self.pending.take() {
            Some((current, args)) if current == ticket => Some(args),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Wrap `f` so bursts of calls collapse into one trailing call.
///
/// The returned closure is cheap to clone; clones share the same pending
/// slot. Replacing the stored `Timeout` clears the superseded browser timer.
pub fn debounce<T, F>(wait_ms: u32, f: F) -> impl Fn(T) + Clone + 'static
where
    T: 'static,
    F: Fn(T) + 'static,
{
    let f = Rc::new(f);
    let state = Rc::new(RefCell::new(Debouncer::new(wait_ms)));
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::default();

    move |args: T| {
        let scheduled = state.borrow_mut().call(args);
        let state = Rc::clone(&state);
        let f = Rc::clone(&f);
        let timeout = Timeout::new(scheduled.delay_ms, move || {
            // Release the borrow before running user code.
            let args = state.borrow_mut().fire(scheduled.ticket);
            if let Some(args) = args {
                (*f)(args);
            }
        });
        timer.borrow_mut().replace(timeout);
    }
}
