// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static datasets backing every view.
//!
//! The four collections are embedded at compile time from `data/`. A data
//! directory may override any of them file by file; files that are absent
//! from the directory keep the embedded version. The store is read-only
//! once built.

use crate::types::{DemographicSlice, GpaRecord, PerformanceMetric, RawUsageRecord, UsageDataset};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const USAGE_FILE: &str = "llmUsageData.json";
pub const GPA_FILE: &str = "gpaData.json";
pub const DEMOGRAPHICS_FILE: &str = "demographicsData.json";
pub const PERFORMANCE_FILE: &str = "performanceMetrics.json";

const EMBEDDED_USAGE: &str = include_str!("../../data/llmUsageData.json");
const EMBEDDED_GPA: &str = include_str!("../../data/gpaData.json");
const EMBEDDED_DEMOGRAPHICS: &str = include_str!("../../data/demographicsData.json");
const EMBEDDED_PERFORMANCE: &str = include_str!("../../data/performanceMetrics.json");

#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    usage: UsageDataset,
    gpa: Vec<GpaRecord>,
    demographics: Vec<DemographicSlice>,
    performance: Vec<PerformanceMetric>,
}

impl DatasetStore {
    pub fn new(
        usage: UsageDataset,
        gpa: Vec<GpaRecord>,
        demographics: Vec<DemographicSlice>,
        performance: Vec<PerformanceMetric>,
    ) -> Self {
        Self {
            usage,
            gpa,
            demographics,
            performance,
        }
    }

    /// Build the store from the fixtures compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            usage: parse(EMBEDDED_USAGE, USAGE_FILE)?,
            gpa: parse(EMBEDDED_GPA, GPA_FILE)?,
            demographics: parse(EMBEDDED_DEMOGRAPHICS, DEMOGRAPHICS_FILE)?,
            performance: parse(EMBEDDED_PERFORMANCE, PERFORMANCE_FILE)?,
        })
    }

    /// Build the store from `dir`, falling back to the embedded fixture for
    /// each file the directory does not contain.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let embedded = Self::embedded()?;
        let store = Self {
            usage: load_or(dir, USAGE_FILE, embedded.usage)?,
            gpa: load_or(dir, GPA_FILE, embedded.gpa)?,
            demographics: load_or(dir, DEMOGRAPHICS_FILE, embedded.demographics)?,
            performance: load_or(dir, PERFORMANCE_FILE, embedded.performance)?,
        };
        info!(
            dir = %dir.display(),
            groups = store.usage.len(),
            years = store.gpa.len(),
            "datasets loaded"
        );
        Ok(store)
    }

    /// Embedded fixtures, or `dir` layered over them when given.
    pub fn open(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::load_dir(dir),
            None => Self::embedded(),
        }
    }

    pub fn usage_group(&self, group: &str) -> Option<&[RawUsageRecord]> {
        self.usage.get(group).map(Vec::as_slice)
    }

    pub fn usage_groups(&self) -> impl Iterator<Item = &str> {
        self.usage.keys().map(String::as_str)
    }

    pub fn gpa(&self) -> &[GpaRecord] {
        &self.gpa
    }

    pub fn demographics(&self) -> &[DemographicSlice] {
        &self.demographics
    }

    pub fn performance(&self) -> &[PerformanceMetric] {
        &self.performance
    }
}

fn parse<T: DeserializeOwned>(content: &str, name: &str) -> Result<T> {
    serde_json::from_str(content).with_context(|| format!("parsing dataset {}", name))
}

fn load_or<T: DeserializeOwned>(dir: &Path, name: &str, fallback: T) -> Result<T> {
    let path = dir.join(name);
    if !path.is_file() {
        debug!(file = name, "using embedded dataset");
        return Ok(fallback);
    }
    let content =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    parse(&content, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GROUP_KEYS;
    use tempfile::TempDir;

    #[test]
    fn embedded_fixtures_parse() {
        let store = DatasetStore::embedded().unwrap();
        for group in GROUP_KEYS {
            assert!(store.usage_group(group).is_some(), "missing group {}", group);
        }
        assert!(!store.gpa().is_empty());
        assert!(!store.demographics().is_empty());
        assert!(!store.performance().is_empty());
    }

    #[test]
    fn embedded_gpa_years_are_ascending() {
        let store = DatasetStore::embedded().unwrap();
        let years: Vec<i32> = store.gpa().iter().map(|r| r.year).collect();
        let mut sorted = years.clone();
        sorted.sort();
        assert_eq!(years, sorted);
        assert_eq!(years.last(), Some(&2024));
    }

    #[test]
    fn directory_overrides_single_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(GPA_FILE),
            r#"[{"year":2030,"university_a":3.0,"university_b":3.0,"university_c":3.0,"llmUsers":1,"nonLlmUsers":2}]"#,
        )
        .unwrap();

        let store = DatasetStore::load_dir(dir.path()).unwrap();
        assert_eq!(store.gpa().len(), 1);
        assert_eq!(store.gpa()[0].year, 2030);
        // Untouched files keep the embedded data.
        assert_eq!(
            store.demographics(),
            DatasetStore::embedded().unwrap().demographics()
        );
    }

    #[test]
    fn malformed_override_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(USAGE_FILE), "{ not json").unwrap();
        let err = DatasetStore::load_dir(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains(USAGE_FILE));
    }
}
