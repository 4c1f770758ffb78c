//! UI Components
//!
//! One component per page region; each owns its own slice of state.

mod navbar;
mod theme_toggle;
mod hero;
mod typing_text;
mod about;
mod projects;
mod project_modal;
mod contact_section;
mod notice_stack;

pub use navbar::Navbar;
pub use theme_toggle::ThemeToggle;
pub use hero::Hero;
pub use typing_text::TypingText;
pub use about::{About, Skills};
pub use projects::ProjectsSection;
pub use project_modal::ProjectModal;
pub use contact_section::ContactSection;
pub use notice_stack::NoticeStack;
