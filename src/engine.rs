//! Unit preference engine.
//!
//! Keeps every unit-bearing display element consistent with the four radio
//! selections. Elements are collected once, when the engine is built, into an
//! index keyed by category; each refresh walks that index instead of querying
//! the document again.
//!
//! `UnitEngine` is generic over [`DisplayNode`] so the same logic runs against
//! browser elements and the in-memory nodes used by the tests.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::HashMap;

use crate::compass::direction_icon_class;
use crate::display::{
    ATTR_WIND_DIR, Content, DisplayCategory, DisplayNode, render_dewpoint, render_feels_like, render_pressure,
    render_temperature, render_visibility, render_wind,
};
use crate::error::Result;
use crate::plural::Language;
use crate::units::UnitSelection;

/// Outcome of one refresh pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Elements whose content was rewritten.
    pub updated: usize,
    /// Elements left unchanged because an attribute was missing.
    pub skipped: usize,
}

/// Rewrites display elements for the current unit selection.
///
/// Owns the element index; holds no selection of its own, so every refresh
/// is a pure function of the selection passed in and the elements' attributes.
pub struct UnitEngine<N> {
    index: HashMap<DisplayCategory, Vec<N>>,
    fallback_language: Language,
}

impl<N: DisplayNode> UnitEngine<N> {
    /// Build the element index.
    ///
    /// `collect` is called once per category and returns every element
    /// matching [`DisplayCategory::selector`].
    pub fn new<F>(fallback_language: Language, mut collect: F) -> Self
    where
        F: FnMut(DisplayCategory) -> Vec<N>,
    {
        let index = DisplayCategory::ALL
            .into_iter()
            .map(|category| (category, collect(category)))
            .collect();
        Self { index, fallback_language }
    }

    /// Indexed elements of one category.
    #[must_use]
    pub fn elements(&self, category: DisplayCategory) -> &[N] {
        self.index.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of indexed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add the direction arrow class to each wind element's existing icon.
    ///
    /// Runs once at load so arrows appear before the first toggle. Returns
    /// how many icons were decorated.
    pub fn init_wind_icons(&self) -> usize {
        let mut decorated = 0;
        for node in self.elements(DisplayCategory::Wind) {
            let class = direction_icon_class(node.attribute(ATTR_WIND_DIR).as_deref());
            if node.add_icon_class(class) {
                decorated += 1;
            } else {
                log::debug!("wind element has no icon child");
            }
        }
        decorated
    }

    /// Rewrite every indexed element for the current selection.
    ///
    /// Categories whose group has no selection are left as they are. An
    /// element missing a required attribute keeps its previous content.
    pub fn refresh_display(&self, selection: &UnitSelection) -> RefreshReport {
        let mut report = RefreshReport::default();
        for category in DisplayCategory::ALL {
            for node in self.elements(category) {
                let Some(rendered) = self.render(category, node, selection) else {
                    break;
                };
                match rendered {
                    Ok(content) => {
                        content.apply_to(node);
                        report.updated += 1;
                    }
                    Err(e) => {
                        log::warn!("{e}; leaving element unchanged");
                        report.skipped += 1;
                    }
                }
            }
        }
        report
    }

    /// Render one node, or `None` when the category's group has no selection.
    fn render(&self, category: DisplayCategory, node: &N, selection: &UnitSelection) -> Option<Result<Content>> {
        let rendered = match category {
            DisplayCategory::Temperature => render_temperature(node, selection.temperature?),
            DisplayCategory::FeelsLike => render_feels_like(node, selection.temperature?),
            DisplayCategory::Dewpoint => render_dewpoint(node, selection.temperature?),
            DisplayCategory::Pressure => render_pressure(node, selection.pressure?),
            DisplayCategory::Wind => render_wind(node, selection.wind?),
            DisplayCategory::Visibility => render_visibility(node, selection.visibility?, self.fallback_language),
        };
        Some(rendered)
    }
}
