/*!
 * Language utilities for the translation capability.
 *
 * The translation model understands a fixed, closed set of target languages,
 * each identified by a model-specific code (e.g. `fr_XX` for French). This
 * module holds that static table and resolves user input - a human-readable
 * label, a model code, or an ISO 639-1/639-3 code - to a model code.
 */

use anyhow::{Result, anyhow};
use isolang::Language;

/// Supported target languages as (human label, model language code) pairs.
///
/// The table is fixed; selection is always a single choice from this set.
pub static SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("Arabic", "ar_AR"),
    ("Czech", "cs_CZ"),
    ("German", "de_DE"),
    ("English", "en_XX"),
    ("Spanish", "es_XX"),
    ("Estonian", "et_EE"),
    ("Finnish", "fi_FI"),
    ("French", "fr_XX"),
    ("Gujarati", "gu_IN"),
    ("Hindi", "hi_IN"),
    ("Italian", "it_IT"),
    ("Japanese", "ja_XX"),
    ("Kazakh", "kk_KZ"),
    ("Korean", "ko_KR"),
    ("Lithuanian", "lt_LT"),
    ("Latvian", "lv_LV"),
    ("Burmese", "my_MM"),
    ("Nepali", "ne_NP"),
    ("Dutch", "nl_XX"),
    ("Romanian", "ro_RO"),
    ("Russian", "ru_RU"),
    ("Sinhala", "si_LK"),
    ("Turkish", "tr_TR"),
    ("Vietnamese", "vi_VN"),
    ("Chinese", "zh_CN"),
    ("Afrikaans", "af_ZA"),
    ("Azerbaijani", "az_AZ"),
    ("Bengali", "bn_IN"),
    ("Persian", "fa_IR"),
    ("Hebrew", "he_IL"),
    ("Croatian", "hr_HR"),
    ("Indonesian", "id_ID"),
    ("Georgian", "ka_GE"),
    ("Khmer", "km_KH"),
    ("Macedonian", "mk_MK"),
    ("Malayalam", "ml_IN"),
    ("Mongolian", "mn_MN"),
    ("Marathi", "mr_IN"),
    ("Polish", "pl_PL"),
    ("Pashto", "ps_AF"),
    ("Portuguese", "pt_XX"),
    ("Swedish", "sv_SE"),
    ("Swahili", "sw_KE"),
    ("Tamil", "ta_IN"),
    ("Telugu", "te_IN"),
    ("Thai", "th_TH"),
    ("Tagalog", "tl_XX"),
    ("Ukrainian", "uk_UA"),
    ("Urdu", "ur_PK"),
    ("Xhosa", "xh_ZA"),
    ("Galician", "gl_ES"),
    ("Slovene", "sl_SI"),
];

/// Look up the model code for an exact human-readable label (case-insensitive)
pub fn code_for_label(label: &str) -> Option<&'static str> {
    let label = label.trim();
    SUPPORTED_LANGUAGES.iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
        .map(|(_, code)| *code)
}

/// Look up the human-readable label for a model language code
pub fn label_for_code(code: &str) -> Option<&'static str> {
    let code = code.trim();
    SUPPORTED_LANGUAGES.iter()
        .find(|(_, c)| c.eq_ignore_ascii_case(code))
        .map(|(name, _)| *name)
}

/// Check whether a string is one of the supported model language codes
pub fn is_model_code(code: &str) -> bool {
    label_for_code(code).is_some()
}

/// Resolve arbitrary user input to a supported model language code.
///
/// Accepts, in order of preference:
/// - a human-readable label from the table (e.g. "French", case-insensitive),
/// - a model code verbatim (e.g. "fr_XX"),
/// - an ISO 639-1 or ISO 639-3 code (e.g. "fr", "fra"), resolved via isolang
///   and matched against the model code prefix.
pub fn resolve_language(input: &str) -> Result<&'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty language selection"));
    }

    if let Some(code) = code_for_label(input) {
        return Ok(code);
    }

    if let Some((_, code)) = SUPPORTED_LANGUAGES.iter()
        .find(|(_, c)| c.eq_ignore_ascii_case(input)) {
        return Ok(code);
    }

    // Try as an ISO code and match the two-letter prefix of the model code
    let normalized = input.to_lowercase();
    let iso_language = match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    };

    if let Some(language) = iso_language {
        if let Some(part1) = language.to_639_1() {
            let prefix = format!("{}_", part1);
            if let Some((_, code)) = SUPPORTED_LANGUAGES.iter()
                .find(|(_, c)| c.to_lowercase().starts_with(&prefix)) {
                return Ok(code);
            }
        }
    }

    Err(anyhow!("Unsupported language: {}", input))
}
