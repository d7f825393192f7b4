// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization tables for the dashboard.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | fr   | French   | Français    |
//!
//! ## Lookup contract
//!
//! Keys are flat identifiers shared with the datasets: a usage record's
//! `purpose`, a demographic slice's `name` and a group key all resolve
//! directly (`"coding"`, `"graduate"`, `"law"`). A key missing from the
//! requested language's table resolves to the key itself, unchanged. There
//! is no cross-language fallback: both tables carry the same key set, which
//! the catalog tests enforce.

mod catalog;

pub use catalog::{keys, localized_label, resolve_language, t, Lang};
