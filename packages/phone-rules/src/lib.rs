//! Phone-number validation and display formatting.
//!
//! The country-aware path lives in [`rules`]: a static table keyed by dial
//! code drives both validation (inclusive digit-count bounds) and progressive
//! display formatting. [`legacy`] keeps the older country-agnostic helpers
//! for callers that never pass a country; the two paths do not call each
//! other.

pub mod legacy;
pub mod rules;

pub use rules::{
    country_rule, format_by_country, supported_countries, validate_by_country, CountryRule,
    FormatFn, SupportedCountry, DEFAULT_DIAL_CODE,
};
