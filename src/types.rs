// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for the dashboard
//!
//! Records come in two shapes: the raw form exactly as read from the JSON
//! fixtures, and the typed form produced by [`crate::sanitize`]. Only usage
//! records carry a raw form; GPA, demographic and performance data are
//! trusted as-is.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Group key that every usage lookup falls back to.
pub const DEFAULT_GROUP: &str = "all";

/// Year bound applied when a session starts.
pub const DEFAULT_YEAR_BOUND: &str = "2024";

/// Group (faculty) keys offered by the filter, in display order.
pub const GROUP_KEYS: &[&str] = &[
    "all",
    "engineering",
    "business",
    "arts",
    "science",
    "medicine",
    "law",
];

/// Institution columns of the GPA series, in legend order.
pub const INSTITUTION_KEYS: &[&str] = &["university_a", "university_b", "university_c"];

/// Dashboard sections reachable from the navigation panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Overview,
    Analytics,
    Reports,
    Settings,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Analytics => "analytics",
            Section::Reports => "reports",
            Section::Settings => "settings",
        }
    }

    /// Exact, case-sensitive match on the section identifier.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "overview" => Some(Section::Overview),
            "analytics" => Some(Section::Analytics),
            "reports" => Some(Section::Reports),
            "settings" => Some(Section::Settings),
            _ => None,
        }
    }

    /// Navigation order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Overview,
            Section::Analytics,
            Section::Reports,
            Section::Settings,
        ]
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Overview
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Usage record as stored in the fixtures.
///
/// `percentage` and `students` are kept as untyped JSON so that malformed
/// entries survive loading and are dealt with by the sanitizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawUsageRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub purpose: String,
    #[serde(default)]
    pub percentage: Value,
    #[serde(default)]
    pub students: Value,
    #[serde(default, deserialize_with = "lenient_text")]
    pub trend: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Accept any JSON value for a text field: strings as-is, `null` as empty,
/// anything else as its JSON text (`12` becomes `"12"`).
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Sanitized usage record: `0 <= percentage <= 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub purpose: String,
    pub percentage: f64,
    pub students: u64,
    pub trend: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl From<UsageRecord> for RawUsageRecord {
    fn from(record: UsageRecord) -> Self {
        Self {
            purpose: record.purpose,
            percentage: Value::from(record.percentage),
            students: Value::from(record.students),
            trend: record.trend,
            extra: record.extra,
        }
    }
}

/// Usage records keyed by group.
pub type UsageDataset = BTreeMap<String, Vec<RawUsageRecord>>;

/// One year of the GPA series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaRecord {
    pub year: i32,
    pub university_a: f64,
    pub university_b: f64,
    pub university_c: f64,
    #[serde(rename = "llmUsers")]
    pub llm_users: u64,
    #[serde(rename = "nonLlmUsers")]
    pub non_llm_users: u64,
}

impl GpaRecord {
    pub fn gpa_for(&self, institution: &str) -> Option<f64> {
        match institution {
            "university_a" => Some(self.university_a),
            "university_b" => Some(self.university_b),
            "university_c" => Some(self.university_c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicSlice {
    pub name: String,
    pub value: f64,
    pub count: u64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub metric: String,
    pub before: String,
    pub after: String,
    pub improvement: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

/// Summary card shown at the top of the overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title_key: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub description_key: &'static str,
    pub accent: &'static str,
}

impl StatCard {
    /// Changes are rendered as gains when they carry an explicit `+`.
    pub fn is_positive(&self) -> bool {
        self.change.starts_with('+')
    }
}
