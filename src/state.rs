//! UI State Manager
//!
//! Owns the three page flags (theme, active view, scroll-top visibility)
//! and keeps the persisted preference and the root `dark` class in step
//! with the theme. With no environment every host call is a no-op.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use browser_env::{Environment, ScrollSubscription};
use thiserror::Error;

use crate::config::PageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown theme value `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Which project subset the gallery shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    FullProjectList,
}

/// Persisted value, else OS hint, else light
pub fn resolve_theme(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(|s| s.parse().ok()) {
        return theme;
    }
    if prefers_dark == Some(true) {
        Theme::Dark
    } else {
        Theme::Light
    }
}

pub struct UiStateManager {
    config: PageConfig,
    env: Option<Environment>,
    theme: Theme,
    active_view: ViewState,
    // Shared with the scroll listener
    scroll_top_visible: Rc<Cell<bool>>,
}

impl UiStateManager {
    pub fn new(config: PageConfig, env: Option<Environment>) -> Self {
        Self {
            config,
            env,
            theme: Theme::default(),
            active_view: ViewState::default(),
            scroll_top_visible: Rc::new(Cell::new(false)),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn active_view(&self) -> ViewState {
        self.active_view
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.scroll_top_visible.get()
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Resolve the startup theme and sync it out
    pub fn initialize_theme(&mut self) -> Theme {
        let Some(env) = &self.env else {
            self.theme = Theme::Light;
            return self.theme;
        };

        let stored = env.store.get(self.config.storage_key);
        if let Some(raw) = stored.as_deref() {
            if let Err(e) = raw.parse::<Theme>() {
                log::warn!("[THEME] ignoring stored preference: {}", e);
            }
        }
        let resolved = resolve_theme(stored.as_deref(), env.viewport.prefers_dark_scheme());
        log::info!("[THEME] initial theme {}", resolved);
        self.apply_theme(resolved);
        self.theme
    }

    /// Set the theme, then write the store, then the root marker
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        let Some(env) = &self.env else {
            return;
        };

        if let Err(e) = env.store.set(self.config.storage_key, theme.as_str()) {
            log::warn!("[THEME] could not persist {}: {}", theme, e);
        }
        if let Err(e) = env.viewport.set_root_marker(self.config.dark_marker, theme == Theme::Dark) {
            log::warn!("[THEME] could not update root class: {}", e);
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.apply_theme(self.theme.toggled());
        self.theme
    }

    /// Track the scroll offset until the returned guard is dropped.
    ///
    /// `on_change` is called once right away and then on every scroll event.
    pub fn observe_scroll(&self, on_change: impl Fn(bool) + 'static) -> Option<ScrollSubscription> {
        let env = self.env.as_ref()?;
        let viewport = env.viewport.clone();
        let threshold = self.config.scroll_threshold;
        let visible = self.scroll_top_visible.clone();

        let update = move || {
            let now = threshold.is_exceeded_by(viewport.scroll_offset());
            visible.set(now);
            on_change(now);
        };
        update();

        match env.viewport.on_scroll(Box::new(update)) {
            Ok(subscription) => Some(subscription),
            Err(e) => {
                log::warn!("[SCROLL] listener not registered: {}", e);
                None
            }
        }
    }

    pub fn set_view(&mut self, view: ViewState) {
        self.active_view = view;
    }

    pub fn scroll_to_top(&self) {
        if let Some(env) = &self.env {
            env.viewport.smooth_scroll_to(0.0);
        }
    }

    /// Scroll so the anchor sits just below the sticky header
    pub fn scroll_to_anchor(&self, anchor_id: &str, header_offset_px: f64) {
        let Some(env) = &self.env else {
            return;
        };
        let Some(top) = env.viewport.element_document_top(anchor_id) else {
            log::debug!("[SCROLL] no element #{}", anchor_id);
            return;
        };
        env.viewport.smooth_scroll_to(top - header_offset_px);
    }

    pub fn reload(&self) {
        if let Some(env) = &self.env {
            env.viewport.reload();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrollThreshold;
    use browser_env::memory::{MemoryStore, MemoryViewport};
    use std::cell::RefCell;

    struct Harness {
        store: Rc<MemoryStore>,
        viewport: Rc<MemoryViewport>,
        manager: UiStateManager,
    }

    fn harness(stored: Option<&str>, prefers_dark: Option<bool>, config: PageConfig) -> Harness {
        let store = Rc::new(match stored {
            Some(v) => MemoryStore::with_entry("theme", v),
            None => MemoryStore::new(),
        });
        let viewport = Rc::new(MemoryViewport::with_dark_hint(prefers_dark));
        let env = Environment::new(store.clone(), viewport.clone());
        let manager = UiStateManager::new(config, Some(env));
        Harness { store, viewport, manager }
    }

    fn assert_synced(h: &Harness) {
        let persisted = h.store.value("theme");
        assert_eq!(persisted.as_deref(), Some(h.manager.theme().as_str()));
        assert_eq!(h.viewport.has_root_marker("dark"), persisted.as_deref() == Some("dark"));
    }

    #[test]
    fn test_resolve_theme_table() {
        let cases = [
            (Some("dark"), Some(false), Theme::Dark),
            (Some("dark"), None, Theme::Dark),
            (Some("light"), Some(true), Theme::Light),
            (Some("light"), None, Theme::Light),
            (None, Some(true), Theme::Dark),
            (None, Some(false), Theme::Light),
            (None, None, Theme::Light),
        ];
        for (stored, hint, expected) in cases {
            assert_eq!(resolve_theme(stored, hint), expected, "stored={:?} hint={:?}", stored, hint);
        }
    }

    #[test]
    fn test_unparseable_stored_theme_falls_through() {
        assert_eq!(resolve_theme(Some("sepia"), Some(true)), Theme::Dark);
        assert_eq!(resolve_theme(Some(""), None), Theme::Light);
        assert_eq!("sepia".parse::<Theme>(), Err(UnknownTheme("sepia".to_string())));
    }

    #[test]
    fn test_initialize_theme_syncs_store_and_marker() {
        for (stored, hint, expected) in [
            (Some("dark"), Some(false), Theme::Dark),
            (None, Some(true), Theme::Dark),
            (None, None, Theme::Light),
            (Some("light"), Some(true), Theme::Light),
        ] {
            let mut h = harness(stored, hint, PageConfig::default());
            assert_eq!(h.manager.initialize_theme(), expected);
            assert_synced(&h);
        }
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        for start in [Some("light"), Some("dark")] {
            let mut h = harness(start, None, PageConfig::default());
            let initial = h.manager.initialize_theme();

            assert_eq!(h.manager.toggle_theme(), initial.toggled());
            assert_synced(&h);

            assert_eq!(h.manager.toggle_theme(), initial);
            assert_synced(&h);
            assert_eq!(h.store.value("theme").as_deref(), Some(initial.as_str()));
        }
    }

    #[test]
    fn test_failed_persist_still_updates_marker() {
        let mut h = harness(None, None, PageConfig::default());
        h.manager.initialize_theme();
        h.store.set_read_only(true);

        h.manager.toggle_theme();
        assert_eq!(h.manager.theme(), Theme::Dark);
        assert!(h.viewport.has_root_marker("dark"));
        assert_eq!(h.store.value("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_without_environment_everything_is_a_noop() {
        let mut manager = UiStateManager::new(PageConfig::default(), None);
        assert_eq!(manager.initialize_theme(), Theme::Light);
        assert_eq!(manager.toggle_theme(), Theme::Dark);
        assert!(manager.observe_scroll(|_| panic!("no viewport to observe")).is_none());
        manager.scroll_to_top();
        manager.scroll_to_anchor("projects", 72.0);
        manager.reload();
        assert!(!manager.scroll_top_visible());
    }

    #[test]
    fn test_scroll_visibility_follows_latest_offset() {
        for (threshold, below, above) in [
            (ScrollThreshold::SINGLE_PAGE, 239.0, 241.0),
            (ScrollThreshold::EXPANDED, 739.0, 741.0),
        ] {
            let config = PageConfig { scroll_threshold: threshold, ..PageConfig::default() };
            let h = harness(None, None, config);
            let seen = Rc::new(RefCell::new(Vec::new()));
            let sink = seen.clone();
            let _sub = h.manager.observe_scroll(move |v| sink.borrow_mut().push(v)).unwrap();

            // Evaluated once at registration
            assert_eq!(*seen.borrow(), vec![false]);

            h.viewport.scroll_by_user(below);
            assert!(!h.manager.scroll_top_visible());
            h.viewport.scroll_by_user(threshold.0);
            assert!(!h.manager.scroll_top_visible());
            h.viewport.scroll_by_user(above);
            assert!(h.manager.scroll_top_visible());
            h.viewport.scroll_by_user(0.0);
            assert!(!h.manager.scroll_top_visible());

            assert_eq!(*seen.borrow(), vec![false, false, false, true, false]);
        }
    }

    #[test]
    fn test_initial_scroll_evaluation_uses_current_offset() {
        let h = harness(None, None, PageConfig::default());
        h.viewport.set_offset_silently(900.0);
        let _sub = h.manager.observe_scroll(|_| {}).unwrap();
        assert!(h.manager.scroll_top_visible());
    }

    #[test]
    fn test_dropping_subscription_removes_listener() {
        let h = harness(None, None, PageConfig::default());
        let sub = h.manager.observe_scroll(|_| {}).unwrap();
        assert_eq!(h.viewport.listener_count(), 1);
        drop(sub);
        assert_eq!(h.viewport.listener_count(), 0);

        h.viewport.scroll_by_user(2000.0);
        assert!(!h.manager.scroll_top_visible());
    }

    #[test]
    fn test_set_view_only_changes_view() {
        let mut h = harness(Some("dark"), None, PageConfig::default());
        h.manager.initialize_theme();
        h.manager.set_view(ViewState::FullProjectList);
        assert_eq!(h.manager.active_view(), ViewState::FullProjectList);
        h.manager.set_view(ViewState::Home);
        assert_eq!(h.manager.active_view(), ViewState::Home);
        assert_eq!(h.manager.theme(), Theme::Dark);
        assert!(h.viewport.scroll_requests().is_empty());
    }

    #[test]
    fn test_scroll_to_top_requests_zero() {
        let h = harness(None, None, PageConfig::default());
        h.manager.scroll_to_top();
        assert_eq!(h.viewport.scroll_requests(), vec![0.0]);
    }

    #[test]
    fn test_scroll_to_anchor_subtracts_header_offset() {
        let h = harness(None, None, PageConfig::default());
        h.viewport.add_anchor("projects", 1500.0);
        h.manager.scroll_to_anchor("projects", 72.0);
        assert_eq!(h.viewport.scroll_requests(), vec![1428.0]);
    }

    #[test]
    fn test_scroll_to_missing_anchor_is_silent() {
        let mut h = harness(None, None, PageConfig::default());
        h.manager.initialize_theme();
        let theme = h.manager.theme();
        let view = h.manager.active_view();

        h.manager.scroll_to_anchor("nowhere", 72.0);

        assert!(h.viewport.scroll_requests().is_empty());
        assert_eq!(h.manager.theme(), theme);
        assert_eq!(h.manager.active_view(), view);
    }

    #[test]
    fn test_reload_reaches_viewport() {
        let h = harness(None, None, PageConfig::default());
        h.manager.reload();
        assert_eq!(h.viewport.reload_count(), 1);
    }
}
