//! Per-country validation and formatting rules.
//!
//! Rules are keyed by dial code (`"+1"`, `"+44"`, ...) and looked up by exact
//! match. Dial codes without an entry fall back to a universal rule: 7 to 15
//! digits accepted, digits-only formatting. Malformed input never produces an
//! error, only `false` or an empty string.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Progressive formatter from a digit-only string to a punctuated display
/// string. Formatting is a strict prefix function of its input: appending a
/// digit never rewrites digits already shown, it only adds punctuation.
pub type FormatFn = fn(&str) -> String;

/// Validation and formatting rule for one dial code.
#[derive(Debug, Clone, Copy)]
pub struct CountryRule {
    pub name: &'static str,
    /// Inclusive lower bound on subscriber-number digit count.
    pub min_digits: usize,
    /// Inclusive upper bound on subscriber-number digit count.
    pub max_digits: usize,
    pub format: FormatFn,
}

/// Entry returned by [`supported_countries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedCountry {
    pub code: String,
    pub name: String,
    pub min_digits: usize,
    pub max_digits: usize,
}

/// Dial code assumed when the caller has no country selection yet.
pub const DEFAULT_DIAL_CODE: &str = "+1";

/// Accepted digit-count bounds for dial codes without a table entry.
pub const FALLBACK_MIN_DIGITS: usize = 7;
pub const FALLBACK_MAX_DIGITS: usize = 15;

static COUNTRY_PHONE_RULES: LazyLock<IndexMap<&'static str, CountryRule>> = LazyLock::new(|| {
    IndexMap::from([
        (
            "+1",
            CountryRule {
                name: "US/Canada",
                min_digits: 10,
                max_digits: 10,
                format: format_nanp,
            },
        ),
        (
            "+44",
            CountryRule {
                name: "United Kingdom",
                min_digits: 10,
                max_digits: 11,
                format: format_uk,
            },
        ),
        (
            "+86",
            CountryRule {
                name: "China",
                min_digits: 11,
                max_digits: 11,
                format: format_cn,
            },
        ),
        (
            "+81",
            CountryRule {
                name: "Japan",
                min_digits: 10,
                max_digits: 11,
                format: format_jp,
            },
        ),
    ])
});

fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

// =============================================================================
// Per-country formatters
// =============================================================================

/// `(xxx) xxx-xxxx`
fn format_nanp(number: &str) -> String {
    let digits = only_digits(number);
    if digits.is_empty() {
        return String::new();
    }
    if digits.len() <= 3 {
        return format!("({digits}");
    }
    if digits.len() <= 6 {
        return format!("({}) {}", &digits[..3], &digits[3..]);
    }
    format!(
        "({}) {}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..digits.len().min(10)]
    )
}

/// `xxxx xxx xxxx`
fn format_uk(number: &str) -> String {
    let digits = only_digits(number);
    if digits.is_empty() {
        return String::new();
    }
    if digits.len() <= 4 {
        return digits;
    }
    if digits.len() <= 7 {
        return format!("{} {}", &digits[..4], &digits[4..]);
    }
    format!(
        "{} {} {}",
        &digits[..4],
        &digits[4..7],
        &digits[7..digits.len().min(11)]
    )
}

/// `xxx xxxx xxxx`
fn format_cn(number: &str) -> String {
    let digits = only_digits(number);
    if digits.is_empty() {
        return String::new();
    }
    if digits.len() <= 3 {
        return digits;
    }
    if digits.len() <= 7 {
        return format!("{} {}", &digits[..3], &digits[3..]);
    }
    format!(
        "{} {} {}",
        &digits[..3],
        &digits[3..7],
        &digits[7..digits.len().min(11)]
    )
}

/// `xxx-xxxx-xxxx`
fn format_jp(number: &str) -> String {
    let digits = only_digits(number);
    if digits.is_empty() {
        return String::new();
    }
    if digits.len() <= 3 {
        return digits;
    }
    if digits.len() <= 7 {
        return format!("{}-{}", &digits[..3], &digits[3..]);
    }
    format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..])
}

// =============================================================================
// Public API
// =============================================================================

/// Validate a raw phone string against the rule for `dial_code`.
///
/// Punctuation and whitespace are stripped before counting. Empty input is
/// invalid for every country. Unknown dial codes accept
/// [`FALLBACK_MIN_DIGITS`]..=[`FALLBACK_MAX_DIGITS`] digits.
pub fn validate_by_country(phone_number: &str, dial_code: &str) -> bool {
    let digits = only_digits(phone_number);
    if digits.is_empty() {
        return false;
    }
    match COUNTRY_PHONE_RULES.get(dial_code) {
        Some(rule) => (rule.min_digits..=rule.max_digits).contains(&digits.len()),
        None => (FALLBACK_MIN_DIGITS..=FALLBACK_MAX_DIGITS).contains(&digits.len()),
    }
}

/// Format a raw phone string for display using the rule for `dial_code`.
///
/// Digits beyond the rule's `max_digits` are dropped before formatting.
/// Unknown dial codes get the bare digit string, empty input an empty string.
pub fn format_by_country(phone_number: &str, dial_code: &str) -> String {
    let digits = only_digits(phone_number);
    if digits.is_empty() {
        return String::new();
    }
    match COUNTRY_PHONE_RULES.get(dial_code) {
        Some(rule) => {
            let limited = &digits[..digits.len().min(rule.max_digits)];
            (rule.format)(limited)
        }
        None => digits,
    }
}

/// Snapshot of the rule table, in table (insertion) order.
pub fn supported_countries() -> Vec<SupportedCountry> {
    COUNTRY_PHONE_RULES
        .iter()
        .map(|(code, rule)| SupportedCountry {
            code: (*code).to_string(),
            name: rule.name.to_string(),
            min_digits: rule.min_digits,
            max_digits: rule.max_digits,
        })
        .collect()
}

/// Rule for a specific dial code. No fallback: unknown codes return `None`.
pub fn country_rule(dial_code: &str) -> Option<&'static CountryRule> {
    COUNTRY_PHONE_RULES.get(dial_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(formatted: &str) -> String {
        only_digits(formatted)
    }

    #[test]
    fn test_validate_matches_digit_count_bounds() {
        for country in supported_countries() {
            for len in 0..=16 {
                let digits = "5".repeat(len);
                let expected = len >= country.min_digits && len <= country.max_digits;
                assert_eq!(
                    validate_by_country(&digits, &country.code),
                    expected,
                    "{} digits for {} should be {}",
                    len,
                    country.code,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_validate_empty_is_false_for_every_country() {
        for country in supported_countries() {
            assert!(!validate_by_country("", &country.code));
        }
        assert!(!validate_by_country("", "+999"));
    }

    #[test]
    fn test_validate_strips_punctuation() {
        assert!(validate_by_country("(415) 555-0112", "+1"));
        assert!(validate_by_country("0207 946 0123", "+44"));
    }

    #[test]
    fn test_validate_unknown_dial_code_falls_back_to_universal_bounds() {
        assert!(!validate_by_country("12345", "+999"), "5 digits < 7");
        assert!(validate_by_country("1234567", "+999"));
        assert!(validate_by_country("123456789012345", "+999"));
        assert!(!validate_by_country("1234567890123456", "+999"), "16 digits > 15");
    }

    #[test]
    fn test_validate_us_requires_exactly_ten_digits() {
        assert!(!validate_by_country("41555501", "+1"), "8 digits, needs 10");
        assert!(validate_by_country("4155550112", "+1"));
        assert!(!validate_by_country("41555501123", "+1"));
    }

    #[test]
    fn test_format_concrete_cases() {
        assert_eq!(format_by_country("4155550112", "+1"), "(415) 555-0112");
        assert_eq!(format_by_country("02079460123", "+44"), "0207 946 0123");
        assert_eq!(format_by_country("13812345678", "+86"), "138 1234 5678");
        assert_eq!(format_by_country("09012345678", "+81"), "090-1234-5678");
    }

    #[test]
    fn test_format_partial_input_reveals_segments_progressively() {
        assert_eq!(format_by_country("123", "+1"), "(123");
        assert_eq!(format_by_country("1234", "+1"), "(123) 4");
        assert_eq!(format_by_country("1234567", "+1"), "(123) 456-7");
        assert_eq!(format_by_country("0207", "+44"), "0207");
        assert_eq!(format_by_country("02079", "+44"), "0207 9");
        assert_eq!(format_by_country("090", "+81"), "090");
        assert_eq!(format_by_country("0901", "+81"), "090-1");
    }

    #[test]
    fn test_format_truncates_to_max_digits() {
        assert_eq!(format_by_country("41555501129999", "+1"), "(415) 555-0112");
    }

    #[test]
    fn test_format_empty_and_unknown_country() {
        assert_eq!(format_by_country("", "+1"), "");
        assert_eq!(format_by_country("---", "+1"), "");
        assert_eq!(format_by_country("123-456", "+999"), "123456");
    }

    #[test]
    fn test_format_is_prefix_monotonic() {
        // Formatting k digits, stripped of punctuation, must equal the k-digit
        // prefix itself; so each step only reveals punctuation.
        let sample = "987654321098765";
        for country in supported_countries() {
            for k in 1..=country.max_digits {
                let input = &sample[..k];
                let shown = strip(&format_by_country(input, &country.code));
                assert_eq!(
                    shown, input,
                    "formatting {} digits for {} must not drop or reorder digits",
                    k, country.code
                );
            }
        }
    }

    #[test]
    fn test_supported_countries_preserves_table_order() {
        let codes: Vec<String> = supported_countries().into_iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["+1", "+44", "+86", "+81"]);
    }

    #[test]
    fn test_country_rule_lookup_has_no_fallback() {
        let rule = country_rule("+44").expect("+44 should be in the table");
        assert_eq!(rule.name, "United Kingdom");
        assert_eq!((rule.min_digits, rule.max_digits), (10, 11));
        assert!(country_rule("+999").is_none());
    }

    #[test]
    fn test_rule_format_pointer_matches_country_path() {
        let rule = country_rule("+1").unwrap();
        assert_eq!((rule.format)("4155550112"), "(415) 555-0112");
    }
}
