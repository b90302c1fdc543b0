//! Country-agnostic validation and formatting.
//!
//! Older helpers kept for callers that never pass a country code. They assume
//! NANP-style numbers and must stay separate from [`crate::rules`]: the
//! country-aware path never calls into this module, and code that has a dial
//! code available should not call these.

fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Strip non-digits and require at least 10 digits.
pub fn validate_phone_number(phone: &str) -> bool {
    only_digits(phone).len() >= 10
}

/// Progressive formatter to fixed `(xxx) xxx-xxxx` grouping.
///
/// Inputs stripping to more than 10 digits do not fit the 3-3-4 grouping and
/// are returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let cleaned = only_digits(phone);
    if cleaned.len() > 10 {
        return phone.to_string();
    }
    let area = &cleaned[..cleaned.len().min(3)];
    let exchange = &cleaned[cleaned.len().min(3)..cleaned.len().min(6)];
    let number = &cleaned[cleaned.len().min(6)..];
    if !number.is_empty() {
        return format!("({area}) {exchange}-{number}");
    }
    if !exchange.is_empty() {
        return format!("({area}) {exchange}");
    }
    if !area.is_empty() {
        return format!("({area}");
    }
    cleaned
}
