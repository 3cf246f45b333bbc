//! Theme preference controller
//!
//! Resolves the initial theme, reflects it onto the document and persists
//! toggles. Storage is best-effort: the in-memory value always wins for the
//! current page.

use crate::theme::{PreferenceStore, ThemeConfig, ThemeDocument, ThemeElement, ThemeValue};

pub struct ThemeController<S, D> {
    store: S,
    document: D,
    config: ThemeConfig,
    system_preference: Option<ThemeValue>,
}

impl<S, D> ThemeController<S, D>
where
    S: PreferenceStore,
    D: ThemeDocument,
{
    pub fn new(store: S, document: D, config: ThemeConfig) -> Self {
        Self {
            store,
            document,
            config,
            system_preference: None,
        }
    }

    /// Consult the OS dark/light preference when neither storage nor the
    /// root attribute decides.
    pub fn with_system_preference(mut self, preference: Option<ThemeValue>) -> Self {
        self.system_preference = preference;
        self
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn resolve_initial_theme(&self) -> ThemeValue {
        if let Some(theme) = self.stored_theme() {
            return theme;
        }

        let from_root = self
            .document
            .root_attribute(&self.config.root_attribute)
            .and_then(|value| ThemeValue::parse(&value));

        from_root
            .or(self.system_preference)
            .unwrap_or(ThemeValue::Dark)
    }

    pub fn apply_theme(&self, theme: ThemeValue) {
        self.document
            .set_root_attribute(&self.config.root_attribute, theme.as_str());
        self.document.set_color_scheme(theme.color_scheme());
        if let Some(class) = &self.config.dark_class {
            self.document.set_root_class(class, theme.is_dark());
        }

        let Some(control) = self.document.element_by_id(&self.config.control_id) else {
            return;
        };

        control.set_attribute("aria-pressed", if theme.is_dark() { "true" } else { "false" });
        if let Some(icon) = control.query_selector(&self.config.icon_selector) {
            icon.set_text_content(theme.next_action_icon());
        }
        if let Some(label) = control.query_selector(&self.config.label_selector) {
            label.set_text_content(theme.next_action_label());
        }
    }

    pub fn toggle_theme(&self, current: ThemeValue) -> ThemeValue {
        let next = current.toggled();
        if let Err(e) = self.store.write(&self.config.storage_key, next.as_str()) {
            tracing::debug!("Theme preference not persisted: {}", e);
        }
        self.apply_theme(next);
        next
    }

    fn stored_theme(&self) -> Option<ThemeValue> {
        match self.store.read(&self.config.storage_key) {
            Ok(value) => value.as_deref().and_then(ThemeValue::parse),
            Err(e) => {
                tracing::debug!("Theme preference unreadable, falling back: {}", e);
                None
            }
        }
    }
}

// ============================================================================
// Theme Session
// ============================================================================

/// The single owned theme state of a page: created at start, mutated only
/// by [`ThemeSession::toggle`].
pub struct ThemeSession<S, D> {
    controller: ThemeController<S, D>,
    current: ThemeValue,
}

impl<S, D> ThemeSession<S, D>
where
    S: PreferenceStore,
    D: ThemeDocument,
{
    pub fn start(controller: ThemeController<S, D>) -> Self {
        let current = controller.resolve_initial_theme();
        controller.apply_theme(current);
        tracing::debug!("Theme session started with '{}'", current);
        Self {
            controller,
            current,
        }
    }

    pub fn current(&self) -> ThemeValue {
        self.current
    }

    pub fn toggle(&mut self) -> ThemeValue {
        self.current = self.controller.toggle_theme(self.current);
        self.current
    }

    pub fn controller(&self) -> &ThemeController<S, D> {
        &self.controller
    }
}
