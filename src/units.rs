//! Unit choices for the four measurement groups.
//!
//! Each group is a set of radio inputs sharing one `name`. The checked input's
//! `value` parses into one of the enums below. A group with nothing checked,
//! or with a value this crate does not know, is represented as `None` in
//! [`UnitSelection`] and its elements are left alone on refresh.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use std::fmt;

use crate::consts::{PRESSURE_UNIT_GROUP, TEMPERATURE_UNIT_GROUP, VISIBILITY_UNIT_GROUP, WIND_UNIT_GROUP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Parse a `temperature-unit` radio value (`c` or `f`).
    #[must_use]
    pub fn from_radio_value(value: &str) -> Option<Self> {
        match value {
            "c" => Some(Self::Celsius),
            "f" => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    /// Suffix shown after a value, e.g. `°C`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureUnit {
    MillimetersOfMercury,
    Millibar,
}

impl PressureUnit {
    #[must_use]
    pub fn from_radio_value(value: &str) -> Option<Self> {
        match value {
            "mmhg" => Some(Self::MillimetersOfMercury),
            "mb" => Some(Self::Millibar),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindUnit {
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
}

impl WindUnit {
    #[must_use]
    pub fn from_radio_value(value: &str) -> Option<Self> {
        match value {
            "mps" => Some(Self::MetersPerSecond),
            "kph" => Some(Self::KilometersPerHour),
            "mph" => Some(Self::MilesPerHour),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityUnit {
    Kilometers,
    Miles,
}

impl VisibilityUnit {
    #[must_use]
    pub fn from_radio_value(value: &str) -> Option<Self> {
        match value {
            "km" => Some(Self::Kilometers),
            "miles" => Some(Self::Miles),
            _ => None,
        }
    }
}

/// One of the four radio groups on the weather page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitGroup {
    Temperature,
    Pressure,
    Wind,
    Visibility,
}

impl UnitGroup {
    pub const ALL: [Self; 4] = [Self::Temperature, Self::Pressure, Self::Wind, Self::Visibility];

    /// The `name` attribute shared by the group's radio inputs.
    #[must_use]
    pub fn radio_name(self) -> &'static str {
        match self {
            Self::Temperature => TEMPERATURE_UNIT_GROUP,
            Self::Pressure => PRESSURE_UNIT_GROUP,
            Self::Wind => WIND_UNIT_GROUP,
            Self::Visibility => VISIBILITY_UNIT_GROUP,
        }
    }

    /// CSS selector for all radios in the group.
    #[must_use]
    pub fn radios_selector(self) -> String {
        format!("input[name=\"{}\"]", self.radio_name())
    }

    /// CSS selector for the group's checked radio.
    #[must_use]
    pub fn checked_selector(self) -> String {
        format!("input[name=\"{}\"]:checked", self.radio_name())
    }
}

impl fmt::Display for UnitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.radio_name())
    }
}

/// Current choice for every group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitSelection {
    pub temperature: Option<TemperatureUnit>,
    pub pressure: Option<PressureUnit>,
    pub wind: Option<WindUnit>,
    pub visibility: Option<VisibilityUnit>,
}

impl UnitSelection {
    /// Build a selection from the checked radio value of each group.
    ///
    /// `checked` is called once per group and returns the checked input's
    /// value, or `None` when nothing in the group is checked.
    pub fn read<F>(mut checked: F) -> Self
    where
        F: FnMut(UnitGroup) -> Option<String>,
    {
        let mut selection = Self::default();
        for group in UnitGroup::ALL {
            let Some(value) = checked(group) else {
                log::debug!("no checked radio in `{group}`");
                continue;
            };
            let parsed = selection.set(group, &value);
            if !parsed {
                log::warn!("unrecognized value `{value}` in `{group}`");
            }
        }
        selection
    }

    /// Set one group from a raw radio value. Returns `false` if the value is
    /// not recognized; the group is then cleared.
    pub fn set(&mut self, group: UnitGroup, value: &str) -> bool {
        match group {
            UnitGroup::Temperature => {
                self.temperature = TemperatureUnit::from_radio_value(value);
                self.temperature.is_some()
            }
            UnitGroup::Pressure => {
                self.pressure = PressureUnit::from_radio_value(value);
                self.pressure.is_some()
            }
            UnitGroup::Wind => {
                self.wind = WindUnit::from_radio_value(value);
                self.wind.is_some()
            }
            UnitGroup::Visibility => {
                self.visibility = VisibilityUnit::from_radio_value(value);
                self.visibility.is_some()
            }
        }
    }
}
