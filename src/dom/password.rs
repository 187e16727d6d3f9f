use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::{js_error, listen, select_all};
use crate::consts::{TOGGLE_PASSWORD_CLASS, TOGGLE_TARGET_ATTR};
use crate::error::{Result, UiError};
use crate::password::{FieldType, PasswordField, TargetLookup, ToggleControl, apply_toggle, control_for, resolve_target};

struct InputField(HtmlInputElement);

impl PasswordField for InputField {
    fn field_type(&self) -> FieldType {
        FieldType::from_attr(&self.0.type_())
    }

    fn set_field_type(&self, kind: FieldType) {
        self.0.set_type(kind.as_str());
    }
}

/// Input lookups against the live document.
struct DocumentLookup<'a>(&'a Document);

impl TargetLookup for DocumentLookup<'_> {
    type Field = InputField;

    fn input_by_id(&self, id: &str) -> Option<InputField> {
        let el = self.0.get_element_by_id(id)?;
        as_input(el)
    }

    fn input_by_selector(&self, selector: &str) -> Option<InputField> {
        match self.0.query_selector(selector) {
            Ok(Some(el)) => as_input(el),
            Ok(None) => None,
            Err(e) => {
                log::warn!("bad toggle target selector {selector}: {}", js_error(e));
                None
            }
        }
    }
}

fn as_input(el: Element) -> Option<InputField> {
    match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => Some(InputField(input)),
        Err(_) => None,
    }
}

pub(super) fn install(document: &Document) -> Result<()> {
    let selector = format!(".{TOGGLE_PASSWORD_CLASS}");
    let controls = select_all(document, &selector)?;
    if controls.is_empty() {
        return Err(UiError::MissingElement { selector });
    }

    let mut installed = 0;
    for control in controls {
        let Some(target) = control.get_attribute(TOGGLE_TARGET_ATTR) else {
            log::debug!("password toggle without {TOGGLE_TARGET_ATTR}");
            continue;
        };
        let checkbox = match control.clone().dyn_into::<HtmlInputElement>() {
            Ok(input) if input.type_() == "checkbox" => Some(input),
            _ => None,
        };
        let event = control_for(checkbox.is_some(), false).event_name();

        let document = document.clone();
        listen(&control, event, move |ev| {
            let Some(field) = resolve_target(&DocumentLookup(&document), &target) else {
                log::debug!("password toggle target `{target}` not found");
                return;
            };
            let control = control_for(checkbox.is_some(), checkbox.as_ref().is_some_and(HtmlInputElement::checked));
            if control == ToggleControl::Button {
                // A toggle button must never submit its form.
                ev.prevent_default();
            }
            let kind = apply_toggle(&field, control);
            log::debug!("password field `{target}` is now {kind}");
        })?;
        installed += 1;
    }

    log::info!("password toggle: {installed} controls");
    Ok(())
}
