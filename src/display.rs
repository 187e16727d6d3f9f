//! Display elements and the pure rendering of their content.
//!
//! A display element is a server-rendered node carrying one measurement in
//! several units as `data-*` attributes. Rendering picks the attributes for
//! the selected unit and produces the element's new content. Nothing here
//! touches the DOM directly; [`DisplayNode`] is the seam the DOM adapter
//! (and the tests) implement.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use std::fmt;

use crate::compass::direction_icon_class;
use crate::consts::ICON_BASE_CLASS;
use crate::error::{Result, UiError};
use crate::plural::{Language, miles_label, parse_leading_int};
use crate::units::{PressureUnit, TemperatureUnit, VisibilityUnit, WindUnit};

// ── Attribute names ─────────────────────────────────────────────

pub const ATTR_TEMP_C: &str = "data-temp-c";
pub const ATTR_TEMP_F: &str = "data-temp-f";
pub const ATTR_FEELSLIKE_C: &str = "data-feelslike-c";
pub const ATTR_FEELSLIKE_F: &str = "data-feelslike-f";
pub const ATTR_TRANS_FEELSLIKE: &str = "data-trans-feelslike";
pub const ATTR_DEWPOINT_C: &str = "data-dewpoint-c";
pub const ATTR_DEWPOINT_F: &str = "data-dewpoint-f";
pub const ATTR_TRANS_DEWPOINT: &str = "data-trans-dewpoint";
pub const ATTR_PRESSURE_MMHG: &str = "data-pressure-mmhg";
pub const ATTR_PRESSURE_MB: &str = "data-pressure-mb";
pub const ATTR_TRANS_MMHG: &str = "data-trans-mmhg";
pub const ATTR_TRANS_MB: &str = "data-trans-mb";
pub const ATTR_WIND_MPS: &str = "data-wind-mps";
pub const ATTR_WIND_KPH: &str = "data-wind-kph";
pub const ATTR_WIND_MPH: &str = "data-wind-mph";
pub const ATTR_WIND_DIR: &str = "data-wind-dir";
pub const ATTR_TRANS_MPS: &str = "data-trans-mps";
pub const ATTR_TRANS_KPH: &str = "data-trans-kph";
pub const ATTR_TRANS_MPH: &str = "data-trans-mph";
pub const ATTR_VISIBILITY_KM: &str = "data-visibility-km";
pub const ATTR_VISIBILITY_MILES: &str = "data-visibility-miles";
pub const ATTR_TRANS_KM: &str = "data-trans-km";
pub const ATTR_LANG: &str = "data-lang";

/// A DOM node whose content is rewritten on unit changes.
///
/// Methods take `&self`: DOM handles are shared references with interior
/// mutation on the browser side.
pub trait DisplayNode {
    /// Current value of an attribute, if present.
    fn attribute(&self, name: &str) -> Option<String>;
    /// Replace the node's children with parsed markup.
    fn set_html(&self, html: &str);
    /// Replace the node's children with a single text node.
    fn set_text(&self, text: &str);
    /// Add a class to the node's `.bi` icon child. Returns `false` when the
    /// node has no icon child.
    fn add_icon_class(&self, class: &str) -> bool;
}

/// Kinds of display element, each with its own selector and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayCategory {
    Temperature,
    FeelsLike,
    Dewpoint,
    Pressure,
    Wind,
    Visibility,
}

impl DisplayCategory {
    pub const ALL: [Self; 6] = [
        Self::Temperature,
        Self::FeelsLike,
        Self::Dewpoint,
        Self::Pressure,
        Self::Wind,
        Self::Visibility,
    ];

    /// CSS selector matching every element of this category.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Temperature => ".temp-value, .forecast-temp-value",
            Self::FeelsLike => ".feelslike",
            Self::Dewpoint => ".dewpoint",
            Self::Pressure => ".pressure",
            Self::Wind => ".wind",
            Self::Visibility => ".visibility",
        }
    }
}

impl fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Temperature => "temperature",
            Self::FeelsLike => "feels-like",
            Self::Dewpoint => "dewpoint",
            Self::Pressure => "pressure",
            Self::Wind => "wind",
            Self::Visibility => "visibility",
        };
        f.write_str(name)
    }
}

/// New content for a display element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Markup assigned as inner HTML.
    Html(String),
    /// Plain text assigned as text content.
    Text(String),
}

impl Content {
    /// Write this content into a node.
    pub fn apply_to<N: DisplayNode + ?Sized>(&self, node: &N) {
        match self {
            Self::Html(html) => node.set_html(html),
            Self::Text(text) => node.set_text(text),
        }
    }
}

/// Look up a required attribute, naming the category on failure.
fn required<N: DisplayNode + ?Sized>(node: &N, category: DisplayCategory, attribute: &'static str) -> Result<String> {
    node.attribute(attribute).ok_or(UiError::MissingAttribute { category, attribute })
}

/// Prefix `rest` with an optional translated label.
fn labelled(label: Option<String>, rest: &str) -> String {
    match label {
        Some(label) if !label.is_empty() => format!("{label} {rest}"),
        _ => rest.to_owned(),
    }
}

/// Temperature and forecast temperature: value plus a superscript unit.
///
/// # Errors
///
/// [`UiError::MissingAttribute`] if the selected unit's value is absent.
pub fn render_temperature<N: DisplayNode + ?Sized>(node: &N, unit: TemperatureUnit) -> Result<Content> {
    let attr = match unit {
        TemperatureUnit::Celsius => ATTR_TEMP_C,
        TemperatureUnit::Fahrenheit => ATTR_TEMP_F,
    };
    let value = required(node, DisplayCategory::Temperature, attr)?;
    Ok(Content::Html(format!(
        "{value}<sup class=\"temp-unit forecast-temp-unit\">{}</sup>",
        unit.symbol()
    )))
}

/// "Feels like" line: translated label, value and unit.
///
/// # Errors
///
/// [`UiError::MissingAttribute`] if the value or the label is absent.
pub fn render_feels_like<N: DisplayNode + ?Sized>(node: &N, unit: TemperatureUnit) -> Result<Content> {
    let attr = match unit {
        TemperatureUnit::Celsius => ATTR_FEELSLIKE_C,
        TemperatureUnit::Fahrenheit => ATTR_FEELSLIKE_F,
    };
    let value = required(node, DisplayCategory::FeelsLike, attr)?;
    let label = required(node, DisplayCategory::FeelsLike, ATTR_TRANS_FEELSLIKE)?;
    Ok(Content::Text(format!("{label} {value}{}", unit.symbol())))
}

/// Dew point: value and unit, behind an optional translated label.
///
/// # Errors
///
/// [`UiError::MissingAttribute`] if the selected unit's value is absent.
pub fn render_dewpoint<N: DisplayNode + ?Sized>(node: &N, unit: TemperatureUnit) -> Result<Content> {
    let attr = match unit {
        TemperatureUnit::Celsius => ATTR_DEWPOINT_C,
        TemperatureUnit::Fahrenheit => ATTR_DEWPOINT_F,
    };
    let value = required(node, DisplayCategory::Dewpoint, attr)?;
    let reading = format!("{value}{}", unit.symbol());
    Ok(Content::Text(labelled(node.attribute(ATTR_TRANS_DEWPOINT), &reading)))
}

/// Pressure: value followed by its translated unit.
///
/// # Errors
///
/// [`UiError::MissingAttribute`] if the value or unit label is absent.
pub fn render_pressure<N: DisplayNode + ?Sized>(node: &N, unit: PressureUnit) -> Result<Content> {
    let (value_attr, label_attr) = match unit {
        PressureUnit::MillimetersOfMercury => (ATTR_PRESSURE_MMHG, ATTR_TRANS_MMHG),
        PressureUnit::Millibar => (ATTR_PRESSURE_MB, ATTR_TRANS_MB),
    };
    let value = required(node, DisplayCategory::Pressure, value_attr)?;
    let label = required(node, DisplayCategory::Pressure, label_attr)?;
    Ok(Content::Text(format!("{value} {label}")))
}

/// Wind: direction arrow, speed and translated unit.
///
/// Unit labels are server-translated markup (e.g. `<nobr>`), so the result is
/// HTML. An absent or unknown direction shows the question-mark icon.
///
/// # Errors
///
/// [`UiError::MissingAttribute`] if the speed or unit label is absent.
pub fn render_wind<N: DisplayNode + ?Sized>(node: &N, unit: WindUnit) -> Result<Content> {
    let (value_attr, label_attr) = match unit {
        WindUnit::MetersPerSecond => (ATTR_WIND_MPS, ATTR_TRANS_MPS),
        WindUnit::KilometersPerHour => (ATTR_WIND_KPH, ATTR_TRANS_KPH),
        WindUnit::MilesPerHour => (ATTR_WIND_MPH, ATTR_TRANS_MPH),
    };
    let value = required(node, DisplayCategory::Wind, value_attr)?;
    let label = required(node, DisplayCategory::Wind, label_attr)?;
    let icon = direction_icon_class(node.attribute(ATTR_WIND_DIR).as_deref());
    Ok(Content::Html(format!(
        "<i class=\"{ICON_BASE_CLASS} {icon}\"></i> {value} {label}"
    )))
}

/// Visibility: kilometers with a translated label, or miles with a label
/// pluralized for the element's `data-lang`.
///
/// A missing or unsupported `data-lang` uses `fallback_language`.
///
/// # Errors
///
/// [`UiError::MissingAttribute`] if the selected unit's value (or, for
/// kilometers, its label) is absent.
pub fn render_visibility<N: DisplayNode + ?Sized>(
    node: &N,
    unit: VisibilityUnit,
    fallback_language: Language,
) -> Result<Content> {
    match unit {
        VisibilityUnit::Kilometers => {
            let value = required(node, DisplayCategory::Visibility, ATTR_VISIBILITY_KM)?;
            let label = required(node, DisplayCategory::Visibility, ATTR_TRANS_KM)?;
            Ok(Content::Text(format!("{value} {label}")))
        }
        VisibilityUnit::Miles => {
            let value = required(node, DisplayCategory::Visibility, ATTR_VISIBILITY_MILES)?;
            let lang = node
                .attribute(ATTR_LANG)
                .and_then(|raw| match raw.parse::<Language>() {
                    Ok(lang) => Some(lang),
                    Err(e) => {
                        log::debug!("{e}; using {fallback_language}");
                        None
                    }
                })
                .unwrap_or(fallback_language);
            let label = miles_label(parse_leading_int(&value), lang);
            Ok(Content::Text(format!("{value} {label}")))
        }
    }
}
