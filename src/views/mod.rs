// SPDX-License-Identifier: PMPL-1.0-or-later

//! View derivation: the filtered, sanitized slices of each dataset that the
//! renderers draw.
//!
//! Every function here is pure over its inputs. None of them can fail: an
//! unknown group falls back to `"all"`, an unknown label resolves to its key
//! and an unusable year bound selects nothing.

mod projections;

pub use projections::{
    adoption_series, demographic_tooltip, format_gpa, format_number, gpa_tooltip_label,
    group_label_key, group_options, report_rows, section_view, stat_cards, usage_tooltip,
    AdoptionPoint, GroupOption, ReportRow, SectionView,
};

use crate::dataset::DatasetStore;
use crate::sanitize::sanitize;
use crate::types::{GpaRecord, UsageRecord, DEFAULT_GROUP};
use serde::Serialize;

pub use crate::i18n::localized_label;

/// Sanitized usage records for `group`, or for `"all"` when the store has
/// no such group.
pub fn usage_view(store: &DatasetStore, group: &str) -> Vec<UsageRecord> {
    let records = store
        .usage_group(group)
        .or_else(|| store.usage_group(DEFAULT_GROUP));
    sanitize(records)
}

/// GPA records up to and including the year bound, in dataset order.
pub fn gpa_view(store: &DatasetStore, bound: &str) -> Vec<GpaRecord> {
    let bound = YearBound::parse(bound);
    store
        .gpa()
        .iter()
        .filter(|record| bound.admits(record.year))
        .cloned()
        .collect()
}

/// Upper year limit parsed from the selection.
///
/// Parsing reads a leading integer the way form inputs are usually read:
/// leading whitespace and an optional sign are accepted, anything after the
/// digits is ignored. A bound without leading digits is `Invalid` and admits
/// no record at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YearBound {
    Year(i64),
    Invalid,
}

impl YearBound {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return YearBound::Invalid;
        }
        let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
        YearBound::Year(if negative { -magnitude } else { magnitude })
    }

    pub fn admits(&self, year: i32) -> bool {
        match self {
            YearBound::Year(bound) => i64::from(year) <= *bound,
            YearBound::Invalid => false,
        }
    }
}
