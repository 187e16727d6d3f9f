use js_sys::{Array, Intl, Object, Reflect};
use wasm_bindgen::JsValue;

use crate::config::PageConfig;
use crate::error::UiError;
use crate::timezone::{Notifier, report_timezone};

/// Sends the report as a detached `GET` and logs how it went.
struct FetchNotifier;

impl Notifier for FetchNotifier {
    fn notify(&self, url: String) {
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match gloo_net::http::Request::get(&url).send().await {
                Ok(resp) if resp.ok() => Ok(()),
                Ok(resp) => Err(UiError::Request(format!("{url} returned {}", resp.status()))),
                Err(e) => Err(UiError::Request(format!("{url}: {e}"))),
            };
            match outcome {
                Ok(()) => log::debug!("timezone reported"),
                Err(e) => log::warn!("timezone report: {e}"),
            }
        });
    }
}

/// `Intl.DateTimeFormat().resolvedOptions().timeZone`, if the runtime has it.
fn resolve_zone() -> Option<String> {
    let format = Intl::DateTimeFormat::new(&Array::new(), &Object::new());
    match Reflect::get(&format.resolved_options(), &JsValue::from_str("timeZone")) {
        Ok(value) => value.as_string(),
        Err(e) => {
            log::debug!("timeZone not resolvable: {e:?}");
            None
        }
    }
}

pub(super) fn install(config: &PageConfig) {
    let zone = report_timezone(resolve_zone().as_deref(), config, &FetchNotifier);
    log::info!("reporting timezone {zone}");
}
