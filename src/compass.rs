//! Compass direction codes and their wind-arrow icon classes.

#[cfg(test)]
#[path = "compass_test.rs"]
mod compass_test;

use std::str::FromStr;

use crate::consts::FALLBACK_ICON_CLASS;

/// One of the 16 compass points reported for wind direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassDirection {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassDirection {
    /// All points, clockwise from north.
    pub const ALL: [Self; 16] = [
        Self::N,
        Self::Nne,
        Self::Ne,
        Self::Ene,
        Self::E,
        Self::Ese,
        Self::Se,
        Self::Sse,
        Self::S,
        Self::Ssw,
        Self::Sw,
        Self::Wsw,
        Self::W,
        Self::Wnw,
        Self::Nw,
        Self::Nnw,
    ];

    /// The upper-case abbreviation as it appears in `data-wind-dir`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::Nne => "NNE",
            Self::Ne => "NE",
            Self::Ene => "ENE",
            Self::E => "E",
            Self::Ese => "ESE",
            Self::Se => "SE",
            Self::Sse => "SSE",
            Self::S => "S",
            Self::Ssw => "SSW",
            Self::Sw => "SW",
            Self::Wsw => "WSW",
            Self::W => "W",
            Self::Wnw => "WNW",
            Self::Nw => "NW",
            Self::Nnw => "NNW",
        }
    }

    /// Bootstrap icon class for the arrow shown next to wind speed.
    /// Sixteen codes collapse onto eight arrows.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::N => "bi-arrow-up",
            Self::Nne | Self::Ne => "bi-arrow-up-right",
            Self::Ene | Self::E | Self::Ese => "bi-arrow-right",
            Self::Se => "bi-arrow-down-right",
            Self::Sse | Self::S => "bi-arrow-down",
            Self::Ssw | Self::Sw => "bi-arrow-down-left",
            Self::Wsw | Self::W | Self::Wnw => "bi-arrow-left",
            Self::Nw | Self::Nnw => "bi-arrow-up-left",
        }
    }
}

/// Error returned when a string is not one of the 16 compass codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown compass direction: {0}")]
pub struct UnknownDirection(pub String);

impl FromStr for CompassDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.code() == s)
            .ok_or_else(|| UnknownDirection(s.to_owned()))
    }
}

/// Icon class for a raw direction code, or the question-mark icon if the code
/// is absent or unrecognized.
#[must_use]
pub fn direction_icon_class(code: Option<&str>) -> &'static str {
    match code.map(str::parse::<CompassDirection>) {
        Some(Ok(dir)) => dir.icon_class(),
        Some(Err(_)) | None => FALLBACK_ICON_CLASS,
    }
}
