use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::{js_error, listen, select_all};
use crate::config::PageConfig;
use crate::consts::ICON_BASE_CLASS;
use crate::display::DisplayNode;
use crate::engine::UnitEngine;
use crate::error::{Result, UiError};
use crate::units::{UnitGroup, UnitSelection};

/// A server-rendered display element.
struct ElementNode(Element);

impl DisplayNode for ElementNode {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn add_icon_class(&self, class: &str) -> bool {
        let Ok(Some(icon)) = self.0.query_selector(&format!(".{ICON_BASE_CLASS}")) else {
            return false;
        };
        match icon.class_list().add_1(class) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("cannot add icon class: {}", js_error(e));
                false
            }
        }
    }
}

pub(super) fn install(document: &Document, config: &PageConfig) -> Result<()> {
    let engine = Rc::new(UnitEngine::new(config.fallback_language, |category| {
        select_all(document, category.selector())
            .unwrap_or_else(|e| {
                log::warn!("cannot collect {category} elements: {e}");
                Vec::new()
            })
            .into_iter()
            .map(ElementNode)
            .collect()
    }));
    let decorated = engine.init_wind_icons();

    let mut radios = 0;
    for group in UnitGroup::ALL {
        for radio in select_all(document, &group.radios_selector())? {
            let engine = Rc::clone(&engine);
            let document = document.clone();
            listen(&radio, "change", move |_| {
                let report = engine.refresh_display(&checked_selection(&document));
                log::debug!("units refreshed: {} updated, {} skipped", report.updated, report.skipped);
            })?;
            radios += 1;
        }
    }

    if radios == 0 {
        return Err(UiError::MissingElement { selector: UnitGroup::Temperature.radios_selector() });
    }
    log::info!(
        "unit preferences: {radios} radios, {} display elements, {decorated} wind icons",
        engine.len()
    );
    Ok(())
}

fn checked_selection(document: &Document) -> UnitSelection {
    UnitSelection::read(|group| match document.query_selector(&group.checked_selector()) {
        Ok(Some(el)) => el.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value),
        Ok(None) => None,
        Err(e) => {
            log::warn!("cannot read {group} selection: {}", js_error(e));
            None
        }
    })
}
