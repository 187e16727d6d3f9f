//! Browser timezone reporting.
//!
//! At load the page resolves its IANA zone and tells the server once, so
//! server-side timestamps can be rendered in local time on the next request.
//! Sending is behind [`Notifier`]; the browser implementation spawns an async
//! request and logs its outcome.

#[cfg(test)]
#[path = "timezone_test.rs"]
mod timezone_test;

use crate::config::PageConfig;

/// Sink for the one outbound report made per page load.
pub trait Notifier {
    fn notify(&self, url: String);
}

/// Whether `name` looks like an IANA zone: a standalone name such as `UTC`
/// or `EST5EDT`, or `Region/City` with optional further `/` segments. Each
/// segment is non-empty ASCII letters, digits, `_`, `-` or `+`.
#[must_use]
pub fn is_valid_zone_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('/').all(|segment| {
            !segment.is_empty()
                && segment.starts_with(|c: char| c.is_ascii_alphabetic())
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+'))
        })
}

/// The zone to report: the resolved one when valid, else the configured
/// fallback.
#[must_use]
pub fn zone_to_report(resolved: Option<&str>, fallback: &str) -> String {
    match resolved.map(str::trim) {
        Some(zone) if is_valid_zone_name(zone) => zone.to_owned(),
        Some(zone) => {
            log::warn!("browser reported invalid timezone `{zone}`; using {fallback}");
            fallback.to_owned()
        }
        None => {
            log::warn!("browser timezone unavailable; using {fallback}");
            fallback.to_owned()
        }
    }
}

/// URL of the report request, with the zone as a percent-encoded
/// `timezone` query parameter.
#[must_use]
pub fn report_url(endpoint: &str, zone: &str) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{sep}timezone={}", urlencoding::encode(zone))
}

/// Resolve the zone to send and hand exactly one request to `notifier`.
/// Returns the zone that was reported.
pub fn report_timezone<N: Notifier + ?Sized>(resolved: Option<&str>, config: &PageConfig, notifier: &N) -> String {
    let zone = zone_to_report(resolved, &config.fallback_timezone);
    notifier.notify(report_url(&config.timezone_endpoint, &zone));
    zone
}
