/*!
 * Tests for the supported language table and resolution
 */

use pdfglot::language_utils::{
    SUPPORTED_LANGUAGES, code_for_label, is_model_code, label_for_code, resolve_language,
};

/// The language table is the fixed set the translation model supports
#[test]
fn test_supported_languages_should_be_complete_and_unique() {
    assert_eq!(SUPPORTED_LANGUAGES.len(), 52);

    let mut codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|(_, c)| *c).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), 52, "duplicate model codes in table");

    let mut labels: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|(l, _)| *l).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), 52, "duplicate labels in table");
}

#[test]
fn test_code_for_label_with_known_labels_should_resolve() {
    assert_eq!(code_for_label("Arabic"), Some("ar_AR"));
    assert_eq!(code_for_label("English"), Some("en_XX"));
    assert_eq!(code_for_label("Chinese"), Some("zh_CN"));
    assert_eq!(code_for_label("Slovene"), Some("sl_SI"));
}

#[test]
fn test_label_for_code_should_invert_the_table() {
    for (label, code) in SUPPORTED_LANGUAGES {
        assert_eq!(label_for_code(code), Some(*label));
    }
}

#[test]
fn test_is_model_code_should_accept_only_table_codes() {
    assert!(is_model_code("fr_XX"));
    assert!(is_model_code("hi_IN"));
    assert!(!is_model_code("fr"));
    assert!(!is_model_code("xx_YY"));
}

#[test]
fn test_resolve_language_should_accept_label_code_and_iso_forms() {
    // Human-readable label, case-insensitive
    assert_eq!(resolve_language("Portuguese").unwrap(), "pt_XX");
    assert_eq!(resolve_language("portuguese").unwrap(), "pt_XX");

    // Model code verbatim
    assert_eq!(resolve_language("pt_XX").unwrap(), "pt_XX");

    // ISO 639-1 and 639-3
    assert_eq!(resolve_language("pt").unwrap(), "pt_XX");
    assert_eq!(resolve_language("por").unwrap(), "pt_XX");
    assert_eq!(resolve_language("ja").unwrap(), "ja_XX");
    assert_eq!(resolve_language("ukr").unwrap(), "uk_UA");
}

#[test]
fn test_resolve_language_should_reject_unsupported_languages() {
    // Valid ISO codes outside the supported table
    assert!(resolve_language("eo").is_err());
    // Garbage
    assert!(resolve_language("q").is_err());
    assert!(resolve_language("  ").is_err());
}
