// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dashboard configuration.
//!
//! Read from YAML (`.yaml`/`.yml`) or JSON, chosen by file extension. Every
//! field is optional; an absent file yields the defaults.

use crate::types::{DEFAULT_GROUP, DEFAULT_YEAR_BOUND};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Language at session start; unsupported codes fall back to English.
    pub default_language: String,
    pub default_group: String,
    pub default_year_bound: String,
    /// Seconds a notification stays visible.
    pub notification_secs: u64,
    /// Directory whose dataset files replace the embedded ones.
    pub data_dir: Option<PathBuf>,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            default_group: DEFAULT_GROUP.to_string(),
            default_year_bound: DEFAULT_YEAR_BOUND.to_string(),
            notification_secs: crate::session::NOTIFICATION_WINDOW.as_secs(),
            data_dir: None,
            log_json: false,
        }
    }
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display()))?,
            _ => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display()))?,
        };
        Ok(config)
    }

    /// Load `path` when given and present, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Copy with the given starting selection. Sessions built from it begin
    /// on that selection without raising the filter notification.
    pub fn with_selection(
        &self,
        group: Option<String>,
        year: Option<String>,
        lang: Option<String>,
    ) -> Self {
        let mut config = self.clone();
        if let Some(lang) = lang {
            config.default_language = lang;
        }
        if let Some(group) = group {
            config.default_group = group;
        }
        if let Some(year) = year {
            config.default_year_bound = year;
        }
        config
    }

    pub fn notification_window(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }
}
