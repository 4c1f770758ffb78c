//! Navigation State
//!
//! Menu open/closed, navbar visibility and the active section, all derived
//! from scroll position and clicks. No DOM access here; the navbar
//! component measures sections and feeds them in.

/// Document-space extent of one page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open `[top, top + height)`
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Scroll thresholds, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRules {
    /// Below this offset the navbar is never hidden
    pub hide_threshold: f64,
    /// How far ahead of the scroll offset a section counts as current
    pub lookahead: f64,
}

impl Default for ScrollRules {
    fn default() -> Self {
        Self {
            hide_threshold: 100.0,
            lookahead: 100.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub menu_open: bool,
    pub active_section: Option<String>,
    pub last_scroll_top: f64,
    pub navbar_hidden: bool,
}

impl NavigationState {
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Follow an in-page link whose section sits at `target_top`, if it was
    /// found. The menu closes either way; returns the offset to scroll to.
    pub fn follow_link(&mut self, href: &str, target_top: Option<f64>, header_height: f64) -> Option<f64> {
        self.close_menu();
        match target_top {
            Some(top) => Some(scroll_target(top, header_height)),
            None => {
                log::warn!("nav target {} not found", href);
                None
            }
        }
    }

    /// Apply one (debounced) scroll sample.
    pub fn on_scroll(&mut self, scroll_top: f64, sections: &[SectionBounds], rules: ScrollRules) {
        let scrolling_down = scroll_top > self.last_scroll_top;
        self.navbar_hidden = scrolling_down && scroll_top > rules.hide_threshold;
        self.last_scroll_top = scroll_top;

        // No match leaves the previous highlight in place.
        if let Some(id) = active_section_at(scroll_top + rules.lookahead, sections) {
            if self.active_section.as_deref() != Some(id) {
                log::debug!("active section -> {}", id);
                self.active_section = Some(id.to_string());
            }
        }
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }
}

/// Section containing `position`. Sections are checked in document order
/// and a later match replaces an earlier one.
pub fn active_section_at(position: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| section.contains(position))
        .last()
        .map(|section| section.id.as_str())
}

/// `"#about"` -> `"about"`; anything that is not an in-page anchor is `None`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that puts a section just below the fixed header.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 500.0),
            SectionBounds::new("about", 500.0, 500.0),
        ]
    }

    #[test]
    fn test_scroll_activates_second_section() {
        let mut nav = NavigationState {
            active_section: Some("home".to_string()),
            ..Default::default()
        };
        nav.on_scroll(600.0, &two_sections(), ScrollRules::default());
        assert!(nav.is_active("about"));
        assert!(!nav.is_active("home"));
    }

    #[test]
    fn test_lookahead_reaches_next_section_early() {
        let mut nav = NavigationState::default();
        nav.on_scroll(400.0, &two_sections(), ScrollRules::default());
        assert!(nav.is_active("about"));
        nav.on_scroll(399.0, &two_sections(), ScrollRules::default());
        assert!(nav.is_active("home"));
    }

    #[test]
    fn test_no_match_keeps_previous_highlight() {
        let mut nav = NavigationState::default();
        nav.on_scroll(600.0, &two_sections(), ScrollRules::default());
        nav.on_scroll(5000.0, &two_sections(), ScrollRules::default());
        assert_eq!(nav.active_section.as_deref(), Some("about"));
    }

    #[test]
    fn test_nothing_active_above_first_section() {
        let sections = vec![SectionBounds::new("about", 800.0, 400.0)];
        let mut nav = NavigationState::default();
        nav.on_scroll(0.0, &sections, ScrollRules::default());
        assert_eq!(nav.active_section, None);
    }

    #[test]
    fn test_overlap_last_match_wins() {
        let sections = vec![
            SectionBounds::new("a", 0.0, 1000.0),
            SectionBounds::new("b", 200.0, 300.0),
        ];
        assert_eq!(active_section_at(300.0, &sections), Some("b"));
        assert_eq!(active_section_at(600.0, &sections), Some("a"));
    }

    #[test]
    fn test_navbar_hides_only_when_scrolling_down_past_threshold() {
        let rules = ScrollRules::default();
        let mut nav = NavigationState::default();

        nav.on_scroll(80.0, &[], rules);
        assert!(!nav.navbar_hidden, "below threshold");

        nav.on_scroll(150.0, &[], rules);
        assert!(nav.navbar_hidden, "down past threshold");

        nav.on_scroll(120.0, &[], rules);
        assert!(!nav.navbar_hidden, "scrolling up shows it");

        nav.on_scroll(120.0, &[], rules);
        assert!(!nav.navbar_hidden, "no movement");
        assert_eq!(nav.last_scroll_top, 120.0);
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = NavigationState::default();
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
        nav.toggle_menu();
        nav.close_menu();
        nav.close_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_follow_link_closes_menu_even_without_target() {
        let mut nav = NavigationState::default();
        nav.toggle_menu();
        assert_eq!(nav.follow_link("#about", Some(900.0), 70.0), Some(830.0));
        assert!(!nav.menu_open);

        nav.toggle_menu();
        assert_eq!(nav.follow_link("#missing", None, 70.0), None);
        assert!(!nav.menu_open);

        // Already closed stays closed.
        assert_eq!(nav.follow_link("#missing", None, 70.0), None);
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_anchor_and_target() {
        assert_eq!(anchor_id("#projects"), Some("projects"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("https://example.com"), None);
        assert_eq!(scroll_target(900.0, 70.0), 830.0);
    }
}
