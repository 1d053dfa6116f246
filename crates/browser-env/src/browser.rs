//! `web_sys` implementations of the environment traits.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, ScrollBehavior, ScrollToOptions, Window};

use crate::{EnvError, PreferenceStore, ScrollSubscription, Viewport};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`
pub struct BrowserStore {
    window: Window,
}

impl BrowserStore {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn storage(&self) -> Result<web_sys::Storage, EnvError> {
        self.window
            .local_storage()
            .map_err(EnvError::from_js)?
            .ok_or(EnvError::Unavailable("localStorage"))
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage().and_then(|s| s.get_item(key).map_err(EnvError::from_js)) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("[ENV] reading `{}` failed: {}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EnvError> {
        self.storage()?.set_item(key, value).map_err(EnvError::from_js)
    }
}

/// `window` + `document`
pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl Viewport for BrowserViewport {
    fn prefers_dark_scheme(&self) -> Option<bool> {
        self.window
            .match_media(DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .map(|query| query.matches())
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn set_root_marker(&self, marker: &str, present: bool) -> Result<(), EnvError> {
        let root = self
            .document
            .document_element()
            .ok_or(EnvError::Unavailable("document element"))?;
        let classes = root.class_list();
        let result = if present { classes.add_1(marker) } else { classes.remove_1(marker) };
        result.map_err(EnvError::from_js)
    }

    fn element_document_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        let rect = el.get_bounding_client_rect();
        Some(rect.top() + self.scroll_offset())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    fn on_scroll(&self, handler: Box<dyn Fn()>) -> Result<ScrollSubscription, EnvError> {
        let callback = Closure::<dyn FnMut()>::new(move || handler());

        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(EnvError::from_js)?;

        // The closure stays owned by the guard so it lives exactly as long as the listener
        let window = self.window.clone();
        Ok(ScrollSubscription::new(move || {
            if let Err(e) = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                log::debug!("[ENV] removing scroll listener failed: {}", EnvError::from_js(e));
            }
            drop(callback);
        }))
    }

    fn reload(&self) {
        if let Err(e) = self.window.location().reload() {
            log::warn!("[ENV] reload failed: {}", EnvError::from_js(e));
        }
    }
}
