//! Application Context
//!
//! Page state provided via Leptos Context API. The manager is the source
//! of truth; the store mirrors its flags for fine-grained rendering.

use browser_env::ScrollSubscription;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::state::{Theme, UiStateManager, ViewState};

/// Rendering snapshot of the page flags
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    pub theme: Theme,
    pub scroll_top_visible: bool,
    pub active_view: ViewState,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Flags to render from
    pub state: Store<PageState>,
    manager: StoredValue<UiStateManager, LocalStorage>,
}

impl AppContext {
    pub fn new(manager: UiStateManager) -> Self {
        let state = Store::new(PageState {
            theme: manager.theme(),
            scroll_top_visible: manager.scroll_top_visible(),
            active_view: manager.active_view(),
        });
        Self {
            state,
            manager: StoredValue::new_local(manager),
        }
    }

    pub fn toggle_theme(&self) {
        if let Some(theme) = self.manager.try_update_value(|m| m.toggle_theme()) {
            *self.state.theme().write() = theme;
        }
    }

    pub fn set_view(&self, view: ViewState) {
        self.manager.update_value(|m| m.set_view(view));
        *self.state.active_view().write() = view;
    }

    /// Switch views and bring the gallery back under the header
    pub fn show_projects(&self, view: ViewState) {
        self.set_view(view);
        self.scroll_to_anchor("projects");
    }

    pub fn scroll_to_top(&self) {
        self.manager.with_value(|m| m.scroll_to_top());
    }

    pub fn scroll_to_anchor(&self, anchor_id: &str) {
        self.manager
            .with_value(|m| m.scroll_to_anchor(anchor_id, m.config().header_offset_px));
    }

    pub fn reload(&self) {
        self.manager.with_value(|m| m.reload());
    }

    /// Start mirroring scroll visibility into the store
    pub fn observe_scroll(&self) -> Option<ScrollSubscription> {
        let state = self.state;
        self.manager.with_value(|m| {
            m.observe_scroll(move |visible| {
                if state.scroll_top_visible().get_untracked() != visible {
                    *state.scroll_top_visible().write() = visible;
                }
            })
        })
    }

    pub fn theme(&self) -> Theme {
        self.state.theme().get()
    }

    pub fn active_view(&self) -> ViewState {
        self.state.active_view().get()
    }

    pub fn summary_project_count(&self) -> usize {
        self.manager.with_value(|m| m.config().summary_project_count)
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.state.scroll_top_visible().get()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use browser_env::memory::{MemoryStore, MemoryViewport};
    use browser_env::Environment;
    use std::rc::Rc;

    fn make_context(store: Rc<MemoryStore>, viewport: Rc<MemoryViewport>) -> AppContext {
        let mut manager = UiStateManager::new(PageConfig::default(), Some(Environment::new(store, viewport)));
        manager.initialize_theme();
        AppContext::new(manager)
    }

    #[test]
    fn test_toggle_theme_updates_manager_then_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Rc::new(MemoryStore::new());
            let viewport = Rc::new(MemoryViewport::new());
            let ctx = make_context(store.clone(), viewport.clone());
            assert_eq!(ctx.theme(), Theme::Light);

            ctx.toggle_theme();
            assert_eq!(ctx.theme(), Theme::Dark);
            assert_eq!(store.value("theme").as_deref(), Some("dark"));
            assert!(viewport.has_root_marker("dark"));

            ctx.toggle_theme();
            assert_eq!(ctx.theme(), Theme::Light);
            assert_eq!(store.value("theme").as_deref(), Some("light"));
            assert!(!viewport.has_root_marker("dark"));
        });
    }

    #[test]
    fn test_scroll_visibility_mirrors_into_store() {
        let owner = Owner::new();
        owner.with(|| {
            let viewport = Rc::new(MemoryViewport::new());
            let ctx = make_context(Rc::new(MemoryStore::new()), viewport.clone());

            let guard = ctx.observe_scroll();
            assert!(guard.is_some());
            assert!(!ctx.scroll_top_visible());

            viewport.scroll_by_user(900.0);
            assert!(ctx.scroll_top_visible());
            viewport.scroll_by_user(950.0);
            assert!(ctx.scroll_top_visible());
            viewport.scroll_by_user(100.0);
            assert!(!ctx.scroll_top_visible());

            drop(guard);
            assert_eq!(viewport.listener_count(), 0);
            viewport.scroll_by_user(900.0);
            assert!(!ctx.scroll_top_visible());
        });
    }

    #[test]
    fn test_show_projects_sets_view_then_scrolls_to_gallery() {
        let owner = Owner::new();
        owner.with(|| {
            let viewport = Rc::new(MemoryViewport::new());
            viewport.add_anchor("projects", 1000.0);
            let ctx = make_context(Rc::new(MemoryStore::new()), viewport.clone());

            ctx.show_projects(ViewState::FullProjectList);
            assert_eq!(ctx.active_view(), ViewState::FullProjectList);
            assert_eq!(viewport.scroll_requests(), vec![928.0]);

            ctx.show_projects(ViewState::Home);
            assert_eq!(ctx.active_view(), ViewState::Home);
            assert_eq!(viewport.scroll_requests(), vec![928.0, 928.0]);
        });
    }

    #[test]
    fn test_summary_count_read_from_config() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(UiStateManager::new(PageConfig::default(), None));
            assert_eq!(ctx.summary_project_count(), 4);
            ctx.scroll_to_top();
            assert!(ctx.observe_scroll().is_none());
        });
    }
}
