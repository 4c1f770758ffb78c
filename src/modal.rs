//! Project Modal
//!
//! Open/closed state for the project detail overlay, and the pure mapping
//! from a catalog record to the structure the overlay renders.

use crate::catalog::Catalog;
use crate::models::ProjectRecord;

/// User gestures that may dismiss the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal<'a> {
    /// A key press anywhere on the page; only Escape counts.
    Key(&'a str),
    /// A click inside the overlay; only one landing on the backdrop itself
    /// counts, not one bubbled up from the content.
    Click { on_backdrop: bool },
    CloseButton,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    current_project: Option<u32>,
    scroll_locked: bool,
}

impl ModalState {
    /// Open the detail view for `id`. Unknown ids leave the state untouched.
    pub fn open(&mut self, catalog: &Catalog, id: u32) -> bool {
        if !catalog.contains(id) {
            log::warn!("no project with id {}", id);
            return false;
        }
        self.current_project = Some(id);
        self.scroll_locked = true;
        log::debug!("project modal opened for {}", id);
        true
    }

    /// Close and release the scroll lock. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.current_project.take().is_some();
        self.scroll_locked = false;
        if was_open {
            log::debug!("project modal closed");
        }
        was_open
    }

    /// Close if `trigger` is a dismissing gesture and the overlay is open.
    pub fn dismiss(&mut self, trigger: Dismissal<'_>) -> bool {
        let dismisses = match trigger {
            Dismissal::Key(key) => key == "Escape",
            Dismissal::Click { on_backdrop } => on_backdrop,
            Dismissal::CloseButton => true,
        };
        dismisses && self.close()
    }

    pub fn is_open(&self) -> bool {
        self.current_project.is_some()
    }

    pub fn current_project(&self) -> Option<u32> {
        self.current_project
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    LiveSite,
    SourceCode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActionLink {
    pub kind: ActionKind,
    pub label: &'static str,
    pub href: String,
}

/// Everything the detail overlay shows, in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDetail {
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub challenges: String,
    pub actions: Vec<ActionLink>,
}

/// Map a record to its detail view. Text stays text (the renderer escapes
/// it); URLs go through `sanitize_url`.
pub fn render_project(record: &ProjectRecord) -> ProjectDetail {
    ProjectDetail {
        image_src: sanitize_url(&record.image_url),
        image_alt: record.title.clone(),
        title: record.title.clone(),
        description: record.full_description.clone(),
        technologies: record.technologies.clone(),
        features: record.features.clone(),
        challenges: record.challenges.clone(),
        actions: vec![
            ActionLink {
                kind: ActionKind::LiveSite,
                label: "Live Demo",
                href: sanitize_url(&record.live_url),
            },
            ActionLink {
                kind: ActionKind::SourceCode,
                label: "View Code",
                href: sanitize_url(&record.github_url),
            },
        ],
    }
}

/// Schemes allowed in rendered links and image sources
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Keep http(s)/mailto and scheme-less URLs; replace anything else with `#`.
pub fn sanitize_url(raw: &str) -> String {
    let url = raw.trim();
    if url.is_empty() {
        return "#".to_string();
    }
    // A scheme is whatever precedes the first ':' when no '/', '?' or '#'
    // comes before it.
    let scheme_end = url.find(':');
    let path_start = url.find(['/', '?', '#']);
    let scheme = match (scheme_end, path_start) {
        (Some(colon), Some(path)) if path < colon => None,
        (Some(colon), _) => Some(&url[..colon]),
        (None, _) => None,
    };
    match scheme {
        None => url.to_string(),
        Some(scheme) if SAFE_SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)) => url.to_string(),
        Some(_) => "#".to_string(),
    }
}
