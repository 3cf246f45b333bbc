use std::cell::RefCell;
use std::rc::Rc;

use portfolio_types::{ThemeConfig, ThemeController, ThemeSession, ThemeValue};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, MouseEvent};

use crate::interop::{system_theme_preference, LocalStorageStore, WebDocument};

pub type WebThemeController = ThemeController<LocalStorageStore, WebDocument>;
pub type WebThemeSession = ThemeSession<LocalStorageStore, WebDocument>;

pub fn web_theme_controller(system_preference: Option<ThemeValue>) -> WebThemeController {
    ThemeController::new(
        LocalStorageStore,
        WebDocument::current(),
        ThemeConfig::default(),
    )
    .with_system_preference(system_preference)
}

/// Session for the rendered `Portfolio` page, which honors the OS preference.
pub fn start_page_session() -> WebThemeSession {
    ThemeSession::start(web_theme_controller(system_theme_preference()))
}

/// Theme handling for static HTML pages: resolve without the OS preference,
/// apply, and bind clicks on the toggle control when the page has one.
pub fn install_static_toggle() -> Result<(), JsValue> {
    let session = ThemeSession::start(web_theme_controller(None));
    let control_id = session.controller().config().control_id.clone();

    let Some(button) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&control_id))
    else {
        dioxus_logger::tracing::debug!("No #{} on page, theme applied without toggle", control_id);
        return Ok(());
    };

    let session = Rc::new(RefCell::new(session));
    let on_click = Closure::wrap(Box::new(move |_e: MouseEvent| {
        let next = session.borrow_mut().toggle();
        dioxus_logger::tracing::debug!("Theme toggled to {}", next);
    }) as Box<dyn FnMut(MouseEvent)>);

    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

    // Lives as long as the page
    on_click.forget();
    Ok(())
}
