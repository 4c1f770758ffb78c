//! Scroll Reveal
//!
//! Marks elements `visible` the first time they enter the viewport. Skill
//! bars additionally get their width animated from `data-width`.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Attribute holding the tracker id assigned at observe time.
const REVEAL_ID_ATTR: &str = "data-reveal-id";
/// Class added once an element has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// Marker categories, one per CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealKind {
    FadeIn,
    SlideInLeft,
    SlideInRight,
    SkillBar,
}

impl RevealKind {
    pub const ALL: [RevealKind; 4] = [
        RevealKind::FadeIn,
        RevealKind::SlideInLeft,
        RevealKind::SlideInRight,
        RevealKind::SkillBar,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            RevealKind::FadeIn => "fade-in",
            RevealKind::SlideInLeft => "slide-in-left",
            RevealKind::SlideInRight => "slide-in-right",
            RevealKind::SkillBar => "skill-bar",
        }
    }

    /// First marker found in a space-separated class list. A skill bar wins
    /// over the plain motion markers since it carries the extra animation.
    pub fn from_class_list(classes: &str) -> Option<Self> {
        let mut found = None;
        for class in classes.split_whitespace() {
            match Self::ALL.iter().find(|kind| kind.class_name() == class) {
                Some(RevealKind::SkillBar) => return Some(RevealKind::SkillBar),
                Some(kind) if found.is_none() => found = Some(*kind),
                _ => {}
            }
        }
        found
    }

    /// `.fade-in, .slide-in-left, .slide-in-right, .skill-bar`
    pub fn selector() -> String {
        Self::ALL
            .iter()
            .map(|kind| format!(".{}", kind.class_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Target width of a skill bar, as a percentage in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillWidth(f64);

impl SkillWidth {
    /// Accepts `"85%"`, `"85"` or `" 42.5% "`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let number = raw.strip_suffix('%').unwrap_or(raw).trim();
        let value: f64 = number.parse().ok()?;
        if (0.0..=100.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    pub fn css(self) -> String {
        format!("{}%", self.0)
    }
}

/// Tracker ids handed out to observed elements.
pub type RevealId = u32;

/// One-shot visibility bookkeeping for observed elements.
#[derive(Debug, Default)]
pub struct RevealTracker {
    kinds: HashMap<RevealId, RevealKind>,
    visible: HashSet<RevealId>,
    next_id: RevealId,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: RevealKind) -> RevealId {
        let id = self.next_id;
        self.next_id += 1;
        self.kinds.insert(id, kind);
        id
    }

    /// Returns the element's kind only on its first entry into view.
    pub fn on_intersection(&mut self, id: RevealId, is_intersecting: bool) -> Option<RevealKind> {
        if !is_intersecting {
            return None;
        }
        let kind = *self.kinds.get(&id)?;
        if self.visible.insert(id) {
            Some(kind)
        } else {
            None
        }
    }

    pub fn is_visible(&self, id: RevealId) -> bool {
        self.visible.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Observer tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub root_margin: String,
    pub threshold: f64,
    pub skill_fill_delay_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            root_margin: "-10% 0px -10% 0px".to_string(),
            threshold: 0.1,
            skill_fill_delay_ms: 300,
        }
    }
}

/// Live observer; disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker>>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observed(&self) -> usize {
        self.tracker.borrow().len()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe every marked element currently in the document.
pub fn bind_reveal_observer(options: &RevealOptions) -> Result<RevealObserver, JsValue> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let fill_delay = options.skill_fill_delay_ms;

    let callback_tracker = Rc::clone(&tracker);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                let target = entry.target();
                let Some(id) = target
                    .get_attribute(REVEAL_ID_ATTR)
                    .and_then(|raw| raw.parse::<RevealId>().ok())
                else {
                    continue;
                };
                let revealed = callback_tracker
                    .borrow_mut()
                    .on_intersection(id, entry.is_intersecting());
                if let Some(kind) = revealed {
                    reveal(&target, kind, fill_delay);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    let nodes = document.query_selector_all(&RevealKind::selector())?;
    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(kind) = RevealKind::from_class_list(&element.class_name()) else { continue };
        let id = tracker.borrow_mut().register(kind);
        element.set_attribute(REVEAL_ID_ATTR, &id.to_string())?;
        observer.observe(&element);
    }
    log::debug!("reveal observer watching {} elements", tracker.borrow().len());

    Ok(RevealObserver {
        observer,
        tracker,
        _callback: callback,
    })
}

fn reveal(target: &Element, kind: RevealKind, fill_delay_ms: u32) {
    let _ = target.class_list().add_1(VISIBLE_CLASS);
    if kind != RevealKind::SkillBar {
        return;
    }
    let Some(width) = target.get_attribute("data-width").and_then(|raw| SkillWidth::parse(&raw)) else {
        log::warn!("skill bar without a usable data-width");
        return;
    };
    let Ok(bar) = target.clone().dyn_into::<HtmlElement>() else { return };
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(fill_delay_ms).await;
        let _ = bar.style().set_property("width", &width.css());
    });
}
