use super::*;

// =============================================================
// English
// =============================================================

#[test]
fn english_singular_only_for_one() {
    assert_eq!(visibility_unit_label(Some(1), "en"), Some("mile"));
    assert_eq!(visibility_unit_label(Some(2), "en"), Some("miles"));
    assert_eq!(visibility_unit_label(Some(0), "en"), Some("miles"));
    assert_eq!(visibility_unit_label(Some(21), "en"), Some("miles"));
}

#[test]
fn english_unparsed_count_is_plural() {
    assert_eq!(visibility_unit_label(None, "en"), Some("miles"));
}

// =============================================================
// Ukrainian
// =============================================================

#[test]
fn ukrainian_last_digit_one_is_singular() {
    assert_eq!(visibility_unit_label(Some(1), "uk"), Some("миля"));
    assert_eq!(visibility_unit_label(Some(21), "uk"), Some("миля"));
    assert_eq!(visibility_unit_label(Some(101), "uk"), Some("миля"));
}

#[test]
fn ukrainian_two_to_four_is_paucal() {
    for n in [2, 3, 4, 22, 33, 104] {
        assert_eq!(visibility_unit_label(Some(n), "uk"), Some("милі"), "n = {n}");
    }
}

#[test]
fn ukrainian_teens_use_genitive_plural() {
    for n in 10..=20 {
        assert_eq!(visibility_unit_label(Some(n), "uk"), Some("миль"), "n = {n}");
    }
    assert_eq!(visibility_unit_label(Some(111), "uk"), Some("миль"));
    assert_eq!(visibility_unit_label(Some(112), "uk"), Some("миль"));
}

#[test]
fn ukrainian_other_digits_use_genitive_plural() {
    for n in [0, 5, 6, 7, 8, 9, 25, 30] {
        assert_eq!(visibility_unit_label(Some(n), "uk"), Some("миль"), "n = {n}");
    }
}

#[test]
fn ukrainian_unparsed_count_uses_genitive_plural() {
    assert_eq!(visibility_unit_label(None, "uk"), Some("миль"));
}

// =============================================================
// Unsupported languages
// =============================================================

#[test]
fn unsupported_language_has_no_label() {
    assert_eq!(visibility_unit_label(Some(1), "de"), None);
    assert_eq!(visibility_unit_label(Some(1), ""), None);
    assert_eq!(visibility_unit_label(Some(1), "EN"), None);
}

#[test]
fn language_parse_and_display() {
    assert_eq!("uk".parse::<Language>(), Ok(Language::Uk));
    assert_eq!(Language::En.to_string(), "en");
    let err = "fr".parse::<Language>().unwrap_err();
    assert_eq!(err.to_string(), "no pluralization rule for language `fr`");
}

// =============================================================
// parse_leading_int
// =============================================================

#[test]
fn leading_int_plain_and_decimal() {
    assert_eq!(parse_leading_int("6"), Some(6));
    assert_eq!(parse_leading_int("6.2"), Some(6));
    assert_eq!(parse_leading_int("  12 "), Some(12));
}

#[test]
fn leading_int_signs() {
    assert_eq!(parse_leading_int("-3"), Some(-3));
    assert_eq!(parse_leading_int("+4"), Some(4));
}

#[test]
fn leading_int_rejects_non_numbers() {
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("N/A"), None);
    assert_eq!(parse_leading_int(".5"), None);
    assert_eq!(parse_leading_int("-"), None);
}

#[test]
fn leading_int_out_of_range_is_none() {
    assert_eq!(parse_leading_int("99999999999999999999 miles"), None);
}
