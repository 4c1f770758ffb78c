//! Collaborator Wrappers
//!
//! Async bindings to the services the page talks to, organized by domain.

mod contact;

pub use contact::*;
