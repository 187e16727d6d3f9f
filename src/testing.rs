//! In-memory stand-ins for DOM nodes, shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::display::{Content, DisplayNode};
use crate::password::{FieldType, PasswordField, TargetLookup};

/// A display element with fixed attributes that records what was written.
#[derive(Debug, Default)]
pub struct FakeNode {
    attrs: HashMap<String, String>,
    content: RefCell<Option<Content>>,
    icon_classes: RefCell<Vec<String>>,
    has_icon: bool,
}

impl FakeNode {
    pub fn new(attrs: &[(&str, &str)]) -> Self {
        Self {
            attrs: attrs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
            content: RefCell::new(None),
            icon_classes: RefCell::new(Vec::new()),
            has_icon: true,
        }
    }

    pub fn without_icon(mut self) -> Self {
        self.has_icon = false;
        self
    }

    pub fn with_content(self, content: Content) -> Self {
        *self.content.borrow_mut() = Some(content);
        self
    }

    pub fn content(&self) -> Option<Content> {
        self.content.borrow().clone()
    }

    pub fn icon_classes(&self) -> Vec<String> {
        self.icon_classes.borrow().clone()
    }
}

impl DisplayNode for FakeNode {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }

    fn set_html(&self, html: &str) {
        *self.content.borrow_mut() = Some(Content::Html(html.to_owned()));
    }

    fn set_text(&self, text: &str) {
        *self.content.borrow_mut() = Some(Content::Text(text.to_owned()));
    }

    fn add_icon_class(&self, class: &str) -> bool {
        if self.has_icon {
            self.icon_classes.borrow_mut().push(class.to_owned());
        }
        self.has_icon
    }
}

/// A password input holding only its `type` and a label naming where it
/// was found.
#[derive(Debug)]
pub struct FakeField {
    label: String,
    kind: RefCell<FieldType>,
}

impl FakeField {
    pub fn new(kind: FieldType) -> Self {
        Self::named("", kind)
    }

    pub fn named(label: &str, kind: FieldType) -> Self {
        Self { label: label.to_owned(), kind: RefCell::new(kind) }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PasswordField for FakeField {
    fn field_type(&self) -> FieldType {
        *self.kind.borrow()
    }

    fn set_field_type(&self, kind: FieldType) {
        *self.kind.borrow_mut() = kind;
    }
}

/// A document with inputs keyed by id and by name, plus ids owned by
/// non-input elements.
#[derive(Debug, Default)]
pub struct FakeLookup {
    input_ids: Vec<String>,
    other_ids: Vec<String>,
    input_names: Vec<String>,
}

impl FakeLookup {
    pub fn with_input_id(mut self, id: &str) -> Self {
        self.input_ids.push(id.to_owned());
        self
    }

    pub fn with_other_id(mut self, id: &str) -> Self {
        self.other_ids.push(id.to_owned());
        self
    }

    pub fn with_input_name(mut self, name: &str) -> Self {
        self.input_names.push(name.to_owned());
        self
    }
}

impl TargetLookup for FakeLookup {
    type Field = FakeField;

    fn input_by_id(&self, id: &str) -> Option<FakeField> {
        if self.other_ids.iter().any(|other| other == id) {
            return None;
        }
        self.input_ids
            .iter()
            .find(|known| *known == id)
            .map(|known| FakeField::named(&format!("#{known}"), FieldType::Password))
    }

    fn input_by_selector(&self, selector: &str) -> Option<FakeField> {
        self.input_names
            .iter()
            .find(|name| crate::password::target_name_selector(name) == selector)
            .map(|_| FakeField::named(selector, FieldType::Password))
    }
}
