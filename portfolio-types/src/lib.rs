//! Shared types for the portfolio site
//!
//! These types are used by:
//! - The Dioxus `Portfolio` component (WASM)
//! - The standalone theme toggle bound onto static HTML pages
//! - Native unit tests, through the storage/document seams
//!
//! Nothing in this crate touches the browser directly.

pub mod content;
pub mod controller;
pub mod error;
pub mod locale;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

pub use content::{projects, quick_stats, skills, Project, ProjectLink, QuickStat, Skill, StatText};
pub use controller::{ThemeController, ThemeSession};
pub use error::StoreError;
pub use locale::{active_dictionary, toggle_lang, Lang, LocaleDictionary, TextKey};
pub use theme::{PreferenceStore, ThemeConfig, ThemeDocument, ThemeElement, ThemeValue};

// ============================================================================
// Page anchors
// ============================================================================

/// Section ids used by the header navigation links
pub const SECTION_PROJECTS: &str = "projects";
pub const SECTION_SKILLS: &str = "skills";
pub const SECTION_CONTACT: &str = "contact";

/// Brand accent color, exposed to the page as `--accent`
pub const BRAND_ACCENT: &str = "#602A80";
