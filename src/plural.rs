//! Language handling for the visibility unit label.
//!
//! Only the miles label needs grammatical number; every other label arrives
//! pre-translated from the server. English distinguishes one from many;
//! Ukrainian has three forms chosen by the last one or two digits.

#[cfg(test)]
#[path = "plural_test.rs"]
mod plural_test;

use std::fmt;
use std::str::FromStr;

/// A language with a known pluralization rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Uk,
}

impl Language {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Uk => "uk",
        }
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "uk" => Ok(Self::Uk),
            other => Err(UnsupportedLanguage(other.to_owned())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no pluralization rule for language `{0}`")]
pub struct UnsupportedLanguage(pub String);

/// Parse the leading integer of a rendered number, the way the browser's
/// `parseInt` does: leading whitespace and an optional sign are accepted and
/// parsing stops at the first non-digit. `"7.5"` yields 7; `"abc"` yields `None`.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let Ok(magnitude) = rest[..digits_end].parse::<i64>() else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Miles label for `count` in `lang`.
///
/// `count` is `None` when the rendered value has no leading integer; that
/// case takes the general plural form. Returns `None` for languages without
/// a rule so the caller can pick its own fallback.
#[must_use]
pub fn visibility_unit_label(count: Option<i64>, lang: &str) -> Option<&'static str> {
    match lang.parse::<Language>() {
        Ok(lang) => Some(miles_label(count, lang)),
        Err(_) => None,
    }
}

/// Miles label for a supported language.
#[must_use]
pub fn miles_label(count: Option<i64>, lang: Language) -> &'static str {
    match lang {
        Language::En => {
            if count == Some(1) {
                "mile"
            } else {
                "miles"
            }
        }
        Language::Uk => {
            let Some(n) = count else {
                return "миль";
            };
            if (10..=20).contains(&(n % 100)) {
                return "миль";
            }
            match n % 10 {
                1 => "миля",
                2..=4 => "милі",
                _ => "миль",
            }
        }
    }
}
