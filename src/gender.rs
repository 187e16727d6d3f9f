//! Placeholder styling for the gender select on the profile form.

#[cfg(test)]
#[path = "gender_test.rs"]
mod gender_test;

use crate::config::PageConfig;

/// Text color for the select given its current value: the placeholder color
/// while nothing is chosen, the normal color otherwise.
#[must_use]
pub fn select_color<'a>(value: &str, config: &'a PageConfig) -> &'a str {
    if value.is_empty() {
        &config.placeholder_color
    } else {
        &config.selected_color
    }
}
