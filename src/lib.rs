// SPDX-License-Identifier: PMPL-1.0-or-later

//! LLM Impact Dashboard: data layer and renderers for a bilingual view of
//! LLM adoption in higher education.
//!
//! The crate is split into a pure core and its presentations:
//!
//! 1. **Datasets** ([`dataset`]): usage by faculty group, the GPA series,
//!    demographics and performance metrics, embedded or read from a
//!    directory.
//! 2. **Sanitizer** ([`sanitize`]): coerces untrusted usage records into
//!    well-formed, bounded ones.
//! 3. **Views** ([`views`]): filtered projections for the current selection.
//! 4. **Session** ([`session`]): the selection state, its mutators and the
//!    timed notification.
//! 5. **Localization** ([`i18n`]): English and French labels.
//!
//! [`report`] draws all of the above to the console, a terminal UI, a
//! native window or a JSON/YAML snapshot.

pub mod config;
pub mod dataset;
pub mod i18n;
pub mod logging;
pub mod report;
pub mod sanitize;
pub mod session;
pub mod types;
pub mod views;
