//! Theme value, page contract and the seams the controller drives.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

// ============================================================================
// Theme Value
// ============================================================================

/// Two-valued visual mode. Serialized exactly as stored: `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeValue {
    Light,
    #[default]
    Dark,
}

impl ThemeValue {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Accepts only the two exact stored spellings.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value for the CSS `color-scheme` hint.
    pub fn color_scheme(self) -> &'static str {
        self.as_str()
    }

    /// Icon describing what the toggle does next (sun while dark).
    pub fn next_action_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }

    /// Label describing what the toggle does next.
    pub fn next_action_label(self) -> &'static str {
        match self {
            Self::Dark => "Light Mode",
            Self::Light => "Dark Mode",
        }
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Page Contract
// ============================================================================

/// Names the controller reads and writes on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Key of the persisted preference in the browser store
    pub storage_key: String,
    /// Attribute on the document root carrying the current theme
    pub root_attribute: String,
    /// Id of the optional toggle control
    pub control_id: String,
    /// Selector of the icon child inside the control
    pub icon_selector: String,
    /// Selector of the text label child inside the control
    pub label_selector: String,
    /// Class toggled on the root while dark, for utility-class stylesheets.
    /// `None` leaves the class list alone.
    pub dark_class: Option<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "site-theme".to_string(),
            root_attribute: "data-theme".to_string(),
            control_id: "theme-toggle".to_string(),
            icon_selector: ".theme-icon".to_string(),
            label_selector: ".theme-text".to_string(),
            dark_class: Some("dark".to_string()),
        }
    }
}

// ============================================================================
// Seams
// ============================================================================

/// Browser-scoped key-value storage. May be unavailable at any time.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// An element the controller may update. Lookups return `None` when absent.
pub trait ThemeElement: Sized {
    fn set_attribute(&self, name: &str, value: &str);
    fn query_selector(&self, selector: &str) -> Option<Self>;
    fn set_text_content(&self, text: &str);
}

/// The document-level presentation state.
pub trait ThemeDocument {
    type Element: ThemeElement;

    fn root_attribute(&self, name: &str) -> Option<String>;
    fn set_root_attribute(&self, name: &str, value: &str);
    fn set_color_scheme(&self, scheme: &str);
    fn set_root_class(&self, class: &str, enabled: bool);
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}
