use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_markup_contract() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.timezone_endpoint, "/set_timezone/");
    assert_eq!(cfg.fallback_timezone, "UTC");
    assert_eq!(cfg.file_name_max_len, 14);
    assert_eq!(cfg.no_file_chosen, "No file chosen");
    assert_eq!(cfg.placeholder_color, "var(--color-secondary)");
    assert_eq!(cfg.selected_color, "var(--color-primary)");
    assert_eq!(cfg.fallback_language, Language::En);
    assert_eq!(cfg.log_level, log::Level::Info);
}

#[test]
fn empty_object_is_all_defaults() {
    let cfg = PageConfig::from_json("{}").unwrap();
    assert_eq!(cfg, PageConfig::default());
}

// =============================================================
// Partial overrides
// =============================================================

#[test]
fn partial_json_overrides_only_given_fields() {
    let cfg = PageConfig::from_json(r#"{"no_file_chosen": "Файл не вибрано", "fallback_language": "uk"}"#).unwrap();
    assert_eq!(cfg.no_file_chosen, "Файл не вибрано");
    assert_eq!(cfg.fallback_language, Language::Uk);
    assert_eq!(cfg.file_name_max_len, 14);
    assert_eq!(cfg.timezone_endpoint, "/set_timezone/");
}

#[test]
fn log_level_parses_case_insensitively() {
    let cfg = PageConfig::from_json(r#"{"log_level": "DEBUG"}"#).unwrap();
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn unknown_fields_are_ignored() {
    let cfg = PageConfig::from_json(r#"{"theme": "dark"}"#).unwrap();
    assert_eq!(cfg, PageConfig::default());
}

// =============================================================
// Errors and fallback
// =============================================================

#[test]
fn unsupported_fallback_language_is_an_error() {
    let err = PageConfig::from_json(r#"{"fallback_language": "de"}"#).unwrap_err();
    assert!(err.to_string().contains("no pluralization rule"));
}

#[test]
fn wrong_type_is_an_error() {
    assert!(PageConfig::from_json(r#"{"file_name_max_len": "long"}"#).is_err());
}

#[test]
fn optional_json_absent_or_blank_uses_defaults() {
    assert_eq!(PageConfig::from_optional_json(None), PageConfig::default());
    assert_eq!(PageConfig::from_optional_json(Some("  \n ")), PageConfig::default());
}

#[test]
fn optional_json_malformed_uses_defaults() {
    assert_eq!(PageConfig::from_optional_json(Some("{not json")), PageConfig::default());
}

#[test]
fn optional_json_valid_is_applied() {
    let cfg = PageConfig::from_optional_json(Some(r#"{"file_name_max_len": 20}"#));
    assert_eq!(cfg.file_name_max_len, 20);
}
