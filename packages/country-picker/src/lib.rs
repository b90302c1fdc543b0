//! Country selection support for the onboarding flow.
//!
//! [`catalog`] holds the static display list (names, dial codes, flags) and
//! the preferred-ISO disambiguation for dial codes shared by several
//! countries. [`menu`] computes where the dropdown opens so it stays on
//! screen. Everything here is pure and stateless; validation rules live in
//! the `phone-rules` crate.

pub mod catalog;
pub mod menu;

pub use catalog::{
    flag_for_dial, preferred_iso, selected_index, Country, PlusOnePreference, COUNTRIES,
};
pub use menu::{
    compute_menu_position, row_offset, AnchorRect, MenuConfig, MenuPosition, Viewport,
};
