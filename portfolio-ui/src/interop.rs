//! Browser-backed implementations of the theme seams.

use portfolio_types::{PreferenceStore, StoreError, ThemeDocument, ThemeElement, ThemeValue};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, Storage};

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

// ============================================================================
// localStorage
// ============================================================================

/// `window.localStorage`, looked up on every access since it can be revoked
/// or disabled at any time.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> Result<Storage, StoreError> {
        let window = window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_message(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::read(key, js_message(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::write(key, js_message(&e)))
    }
}

// ============================================================================
// Document
// ============================================================================

#[derive(Debug, Clone)]
pub struct WebElement(Element);

impl ThemeElement for WebElement {
    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(WebElement)
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// The current page. Every operation is a no-op when there is no document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Option<Document>,
}

impl WebDocument {
    pub fn current() -> Self {
        Self {
            document: window().and_then(|w| w.document()),
        }
    }

    fn root(&self) -> Option<Element> {
        self.document.as_ref()?.document_element()
    }
}

impl ThemeDocument for WebDocument {
    type Element = WebElement;

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        if let Some(root) = self.root() {
            let _ = root.set_attribute(name, value);
        }
    }

    fn set_color_scheme(&self, scheme: &str) {
        if let Some(root) = self.root().and_then(|r| r.dyn_into::<HtmlElement>().ok()) {
            let _ = root.style().set_property("color-scheme", scheme);
        }
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        if let Some(root) = self.root() {
            let _ = root.class_list().toggle_with_force(class, enabled);
        }
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document
            .as_ref()?
            .get_element_by_id(id)
            .map(WebElement)
    }
}

/// One-time read of `prefers-color-scheme`. `None` when media queries are
/// unavailable.
pub fn system_theme_preference() -> Option<ThemeValue> {
    let query = window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(if query.matches() {
        ThemeValue::Dark
    } else {
        ThemeValue::Light
    })
}
