//! Browser bindings: wires `web-sys` elements and events to the pure core.
//!
//! Only compiled for `wasm32`. Each component has its own `install` that
//! looks up its elements and attaches listeners. Installers run
//! independently; one failing (typically because the current page does not
//! carry that widget) never prevents the others.
//!
//! Listener closures live as long as the page and are leaked with
//! `Closure::forget`.

mod avatar;
mod gender;
mod password;
mod timezone;
mod units;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget};

use crate::config::PageConfig;
use crate::consts::CONFIG_SCRIPT_ID;
use crate::error::{Result, UiError};

/// Entry point: set up logging, then install every component once the
/// document has been parsed.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        // A logger is already installed, e.g. on a second start; keep using it.
        log::debug!("console logger not reinstalled: {e}");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document available; portal-ui not started");
        return;
    };

    if document.ready_state() == "loading" {
        let ready_doc = document.clone();
        if let Err(e) = listen(&document, "DOMContentLoaded", move |_| install_all(&ready_doc)) {
            log::error!("cannot wait for DOMContentLoaded: {e}");
        }
    } else {
        install_all(&document);
    }
}

fn install_all(document: &Document) {
    let config = load_config(document);
    log::set_max_level(config.log_level.to_level_filter());

    timezone::install(&config);

    let installs = [
        ("unit preferences", units::install(document, &config)),
        ("password toggle", password::install(document)),
        ("avatar file name", avatar::install(document, &config)),
        ("gender placeholder", gender::install(document, &config)),
    ];
    for (component, result) in installs {
        match result {
            Ok(()) => {}
            Err(e @ UiError::MissingElement { .. }) => log::debug!("{component} skipped: {e}"),
            Err(e) => log::warn!("{component} not installed: {e}"),
        }
    }
}

/// Read the optional JSON settings block rendered by the server.
fn load_config(document: &Document) -> PageConfig {
    let raw = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content());
    PageConfig::from_optional_json(raw.as_deref())
}

pub(crate) fn js_error(value: wasm_bindgen::JsValue) -> UiError {
    UiError::Dom(format!("{value:?}"))
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(js_error)?;
    cb.forget();
    Ok(())
}

/// Every element matching `selector`, in document order.
pub(crate) fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// The element with `id`, cast to `T`.
pub(crate) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| UiError::MissingElement { selector: format!("#{id}") })
}
