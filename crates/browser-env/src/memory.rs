//! In-memory environment
//!
//! Deterministic store and viewport used to drive page state without a browser.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::{EnvError, PreferenceStore, ScrollSubscription, Viewport};

/// HashMap-backed preference store
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    read_only: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent write fail, like a storage quota or private mode
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EnvError> {
        if self.read_only.get() {
            return Err(EnvError::Js("QuotaExceededError".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

type Listeners = Rc<RefCell<Vec<(u64, Rc<dyn Fn()>)>>>;

/// Scriptable viewport
#[derive(Default)]
pub struct MemoryViewport {
    prefers_dark: Cell<Option<bool>>,
    offset: Cell<f64>,
    markers: RefCell<BTreeSet<String>>,
    anchors: RefCell<HashMap<String, f64>>,
    scroll_requests: RefCell<Vec<f64>>,
    listeners: Listeners,
    next_listener: Cell<u64>,
    reloads: Cell<u32>,
}

impl MemoryViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dark_hint(prefers_dark: Option<bool>) -> Self {
        let viewport = Self::new();
        viewport.prefers_dark.set(prefers_dark);
        viewport
    }

    /// Place an element at a document offset
    pub fn add_anchor(&self, id: &str, document_top: f64) {
        self.anchors.borrow_mut().insert(id.to_string(), document_top);
    }

    /// Move the viewport and dispatch a scroll event to every listener
    pub fn scroll_by_user(&self, offset: f64) {
        self.offset.set(offset);
        let handlers: Vec<Rc<dyn Fn()>> = self.listeners.borrow().iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            handler();
        }
    }

    /// Move the viewport without dispatching anything
    pub fn set_offset_silently(&self, offset: f64) {
        self.offset.set(offset);
    }

    pub fn scroll_requests(&self) -> Vec<f64> {
        self.scroll_requests.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn reload_count(&self) -> u32 {
        self.reloads.get()
    }

    /// Whether the root element carries the class
    pub fn has_root_marker(&self, marker: &str) -> bool {
        self.markers.borrow().contains(marker)
    }
}

impl Viewport for MemoryViewport {
    fn prefers_dark_scheme(&self) -> Option<bool> {
        self.prefers_dark.get()
    }

    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn set_root_marker(&self, marker: &str, present: bool) -> Result<(), EnvError> {
        let mut markers = self.markers.borrow_mut();
        if present {
            markers.insert(marker.to_string());
        } else {
            markers.remove(marker);
        }
        Ok(())
    }

    fn element_document_top(&self, id: &str) -> Option<f64> {
        self.anchors.borrow().get(id).copied()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scroll_requests.borrow_mut().push(top);
    }

    fn on_scroll(&self, handler: Box<dyn Fn()>) -> Result<ScrollSubscription, EnvError> {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(handler)));

        let listeners = self.listeners.clone();
        Ok(ScrollSubscription::new(move || {
            listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
        }))
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_store_rejects_writes() {
        let store = MemoryStore::with_entry("theme", "light");
        store.set_read_only(true);
        assert!(store.set("theme", "dark").is_err());
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_scroll_listeners_fire_until_dropped() {
        let viewport = MemoryViewport::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let sub = viewport.on_scroll(Box::new(move || counter.set(counter.get() + 1))).unwrap();

        viewport.scroll_by_user(10.0);
        viewport.scroll_by_user(20.0);
        assert_eq!(hits.get(), 2);
        assert_eq!(viewport.listener_count(), 1);

        drop(sub);
        viewport.scroll_by_user(30.0);
        assert_eq!(hits.get(), 2);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_root_markers() {
        let viewport = MemoryViewport::new();
        viewport.set_root_marker("dark", true).unwrap();
        assert!(viewport.has_root_marker("dark"));
        viewport.set_root_marker("dark", false).unwrap();
        assert!(!viewport.has_root_marker("dark"));
    }
}
