// SPDX-License-Identifier: PMPL-1.0-or-later

//! Snapshot export of the derived views

use crate::dataset::DatasetStore;
use crate::i18n::Lang;
use crate::session::SelectionState;
use crate::types::Section;
use crate::views::{section_view, SectionView};
use anyhow::{Context, Result};
use chrono::Utc;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, snapshot: &DashboardSnapshot) -> Result<String> {
        match self {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(snapshot)?),
            ExportFormat::Yaml => Ok(serde_yaml::to_string(snapshot)?),
        }
    }
}

/// Every section's view under one selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub exported_at: String,
    pub language: Lang,
    pub group: String,
    pub year_bound: String,
    pub sections: Vec<SectionView>,
}

pub fn snapshot(store: &DatasetStore, state: &SelectionState) -> DashboardSnapshot {
    let sections = Section::all()
        .iter()
        .map(|&section| {
            let state = SelectionState {
                active_section: section,
                ..state.clone()
            };
            section_view(store, &state)
        })
        .collect();
    DashboardSnapshot {
        exported_at: Utc::now().to_rfc3339(),
        language: state.language,
        group: state.selected_group.clone(),
        year_bound: state.selected_year_bound.clone(),
        sections,
    }
}

/// Write to `path`, or to stdout when no path is given.
pub fn write_snapshot(
    snapshot: &DashboardSnapshot,
    format: ExportFormat,
    path: Option<&Path>,
) -> Result<()> {
    let content = format.serialize(snapshot)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), format = format.extension(), "snapshot exported");
        }
        None => println!("{}", content),
    }
    Ok(())
}
