//! Static country display catalog.
//!
//! The picker shows a fixed allow-set of countries. Several countries can
//! share a dial code (US and Canada are both `+1`); a preferred-ISO table
//! decides which entry represents a dial code on the trigger button. That
//! table is display-only and deliberately separate from the validation rule
//! table in `phone-rules`.

use serde::Serialize;

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: &'static str,
    pub dial_code: &'static str,
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    pub flag: &'static str,
}

/// Flag shown if the catalog were empty; the trigger always renders something.
pub const UNKNOWN_FLAG: &str = "🏳️";

/// Allow-listed entries, in display order.
pub static COUNTRIES: &[Country] = &[
    Country {
        name: "United States",
        dial_code: "+1",
        code: "US",
        flag: "🇺🇸",
    },
    Country {
        name: "Canada",
        dial_code: "+1",
        code: "CA",
        flag: "🇨🇦",
    },
    Country {
        name: "China",
        dial_code: "+86",
        code: "CN",
        flag: "🇨🇳",
    },
    Country {
        name: "United Kingdom",
        dial_code: "+44",
        code: "GB",
        flag: "🇬🇧",
    },
    Country {
        name: "Japan",
        dial_code: "+81",
        code: "JP",
        flag: "🇯🇵",
    },
];

/// Which flag represents `+1` on the trigger.
///
/// US and Canada share the dial code and the product default has gone back
/// and forth, so it stays configurable rather than hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PlusOnePreference {
    #[default]
    Canada,
    UnitedStates,
}

impl PlusOnePreference {
    pub fn iso(self) -> &'static str {
        match self {
            Self::Canada => "CA",
            Self::UnitedStates => "US",
        }
    }
}

/// Preferred ISO code for a dial code, for flag selection.
pub fn preferred_iso(dial_code: &str, plus_one: PlusOnePreference) -> Option<&'static str> {
    match dial_code {
        "+1" => Some(plus_one.iso()),
        "+44" => Some("GB"),
        "+86" => Some("CN"),
        "+81" => Some("JP"),
        _ => None,
    }
}

/// Index of the catalog entry the trigger should show for `dial_code`.
///
/// Prefers the entry matching the preferred ISO, falls back to the first
/// entry with that dial code, then to the top of the list.
pub fn selected_index(dial_code: &str, plus_one: PlusOnePreference) -> usize {
    let preferred = preferred_iso(dial_code, plus_one);
    COUNTRIES
        .iter()
        .position(|c| c.dial_code == dial_code && Some(c.code) == preferred)
        .or_else(|| COUNTRIES.iter().position(|c| c.dial_code == dial_code))
        .unwrap_or(0)
}

/// Flag for the trigger button.
pub fn flag_for_dial(dial_code: &str, plus_one: PlusOnePreference) -> &'static str {
    COUNTRIES
        .get(selected_index(dial_code, plus_one))
        .map(|c| c.flag)
        .unwrap_or(UNKNOWN_FLAG)
}
