//! Browser Environment Capabilities
//!
//! Small seams over the parts of the browser the page touches:
//! the local key-value store and the viewport/document.
//! `browser` talks to `web_sys`, `memory` is a deterministic stand-in.

mod browser;
pub mod memory;

use std::rc::Rc;

use thiserror::Error;

pub use browser::{BrowserStore, BrowserViewport};

/// Failure reported by an environment call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvError {
    /// The capability is missing (no storage, no root element, ...)
    #[error("{0} is not available")]
    Unavailable(&'static str),
    /// A JS call threw
    #[error("javascript error: {0}")]
    Js(String),
}

impl EnvError {
    pub(crate) fn from_js(value: wasm_bindgen::JsValue) -> Self {
        EnvError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Persistent key-value preference store (localStorage in the browser)
pub trait PreferenceStore {
    /// Read a value; unreadable storage counts as absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<(), EnvError>;
}

/// Viewport and root document access
pub trait Viewport {
    /// OS-level dark color scheme hint; `None` when the query is unsupported
    fn prefers_dark_scheme(&self) -> Option<bool>;

    /// Current vertical scroll offset in pixels
    fn scroll_offset(&self) -> f64;

    /// Add or remove a class on the root element
    fn set_root_marker(&self, marker: &str, present: bool) -> Result<(), EnvError>;

    /// Top of the element with this id, relative to the document
    fn element_document_top(&self, id: &str) -> Option<f64>;

    /// Request a smooth scroll to an absolute offset
    fn smooth_scroll_to(&self, top: f64);

    /// Register a passive scroll listener; dropping the returned guard removes it
    fn on_scroll(&self, handler: Box<dyn Fn()>) -> Result<ScrollSubscription, EnvError>;

    /// Reload the current page
    fn reload(&self);
}

/// Guard for a registered scroll listener
///
/// Runs its detach action exactly once, on drop.
pub struct ScrollSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self { detach: Some(Box::new(detach)) }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// Everything the page needs from its host
#[derive(Clone)]
pub struct Environment {
    pub store: Rc<dyn PreferenceStore>,
    pub viewport: Rc<dyn Viewport>,
}

impl Environment {
    pub fn new(store: Rc<dyn PreferenceStore>, viewport: Rc<dyn Viewport>) -> Self {
        Self { store, viewport }
    }

    /// Browser environment, or `None` outside an interactive document
    pub fn browser() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            store: Rc::new(BrowserStore::new(window.clone())),
            viewport: Rc::new(BrowserViewport::new(window, document)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_subscription_detaches_once_on_drop() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let sub = ScrollSubscription::new(move || counter.set(counter.get() + 1));
        assert_eq!(calls.get(), 0);
        drop(sub);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_env_error_display() {
        assert_eq!(EnvError::Unavailable("localStorage").to_string(), "localStorage is not available");
        assert_eq!(EnvError::Js("QuotaExceededError".into()).to_string(), "javascript error: QuotaExceededError");
    }
}
