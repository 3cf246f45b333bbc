#![cfg(target_arch = "wasm32")]

use portfolio_types::{PreferenceStore, ThemeDocument, ThemeValue};
use portfolio_ui::portfolio::theme::{install_static_toggle, web_theme_controller};
use portfolio_ui::{LocalStorageStore, WebDocument};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{window, Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    window().unwrap().document().unwrap()
}

fn reset(key: &str) {
    let storage = window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(key).unwrap();
    let root = document().document_element().unwrap();
    root.remove_attribute("data-theme").unwrap();
    if let Some(old) = document().get_element_by_id("theme-toggle") {
        old.remove();
    }
}

fn mount_toggle() -> HtmlElement {
    let doc = document();
    let button = doc.create_element("button").unwrap();
    button.set_id("theme-toggle");
    let icon = doc.create_element("span").unwrap();
    icon.set_class_name("theme-icon");
    let text = doc.create_element("span").unwrap();
    text.set_class_name("theme-text");
    button.append_child(&icon).unwrap();
    button.append_child(&text).unwrap();
    doc.body().unwrap().append_child(&button).unwrap();
    button.dyn_into::<HtmlElement>().unwrap()
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    reset("site-theme");
    let store = LocalStorageStore;

    assert_eq!(store.read("site-theme").unwrap(), None);
    store.write("site-theme", "light").unwrap();
    assert_eq!(store.read("site-theme").unwrap().as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn apply_theme_updates_document_root() {
    reset("site-theme");
    let controller = web_theme_controller(None);

    controller.apply_theme(ThemeValue::Light);

    let page = WebDocument::current();
    assert_eq!(page.root_attribute("data-theme").as_deref(), Some("light"));
    let root = document().document_element().unwrap();
    assert!(!root.class_list().contains("dark"));

    controller.apply_theme(ThemeValue::Dark);
    assert_eq!(page.root_attribute("data-theme").as_deref(), Some("dark"));
    assert!(root.class_list().contains("dark"));
}

#[wasm_bindgen_test]
fn static_toggle_persists_on_click() {
    reset("site-theme");
    let button = mount_toggle();

    install_static_toggle().unwrap();
    assert_eq!(button.get_attribute("aria-pressed").as_deref(), Some("true"));

    button.click();

    let store = LocalStorageStore;
    assert_eq!(store.read("site-theme").unwrap().as_deref(), Some("light"));
    assert_eq!(button.get_attribute("aria-pressed").as_deref(), Some("false"));
    let label = button.query_selector(".theme-text").unwrap().unwrap();
    assert_eq!(label.text_content().as_deref(), Some("Dark Mode"));
}

#[wasm_bindgen_test]
fn static_toggle_without_control_still_applies() {
    reset("site-theme");
    LocalStorageStore.write("site-theme", "light").unwrap();

    install_static_toggle().unwrap();

    let page = WebDocument::current();
    assert_eq!(page.root_attribute("data-theme").as_deref(), Some("light"));
}
