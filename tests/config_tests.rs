// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration files and dataset directories

use llm_edu_dashboard::config::DashboardConfig;
use llm_edu_dashboard::dataset::{DatasetStore, GPA_FILE, USAGE_FILE};
use llm_edu_dashboard::report::{snapshot, write_snapshot, ExportFormat};
use llm_edu_dashboard::i18n::Lang;
use llm_edu_dashboard::session::{SelectionState, Session};
use llm_edu_dashboard::views::{gpa_view, usage_view};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_yaml_config_with_data_dir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dashboard.yaml");
    fs::write(
        &path,
        "default_language: fr\nnotification_secs: 5\ndata_dir: /srv/dashboard\n",
    )
    .unwrap();

    let config = DashboardConfig::load(&path).expect("yaml config should load");
    assert_eq!(config.default_language, "fr");
    assert_eq!(config.notification_secs, 5);
    assert_eq!(config.data_dir.as_deref(), Some(std::path::Path::new("/srv/dashboard")));
    assert_eq!(config.default_group, "all");
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = DashboardConfig::load_or_default(Some(&dir.path().join("absent.json"))).unwrap();
    assert_eq!(config, DashboardConfig::default());
}

#[test]
fn test_data_dir_overrides_single_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(USAGE_FILE),
        r#"{ "all": [ { "purpose": "coding", "percentage": "140", "students": -3, "trend": "+1%" } ] }"#,
    )
    .unwrap();

    let store = DatasetStore::load_dir(dir.path()).expect("override should load");
    let usage = usage_view(&store, "engineering");
    assert_eq!(usage.len(), 1);
    assert_eq!(usage[0].percentage, 100.0);
    assert_eq!(usage[0].students, 0);

    // Files not present in the directory keep the built-in data.
    let embedded = DatasetStore::embedded().unwrap();
    assert_eq!(store.gpa(), embedded.gpa());
}

#[test]
fn test_odd_text_fields_do_not_reject_the_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(USAGE_FILE),
        r#"{ "all": [
            { "purpose": "coding", "percentage": 50, "students": 3, "trend": 12 },
            { "purpose": null, "percentage": 20, "students": 1, "trend": "+2%" }
        ] }"#,
    )
    .unwrap();

    let store = DatasetStore::load_dir(dir.path()).expect("odd text fields should load");
    let usage = usage_view(&store, "all");
    assert_eq!(usage.len(), 2);
    assert_eq!(usage[0].trend, "12");
    assert_eq!(usage[0].percentage, 50.0);
    assert_eq!(usage[1].purpose, "");
}

#[test]
fn test_malformed_dataset_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(GPA_FILE), "[{ \"year\": ").unwrap();

    let err = DatasetStore::load_dir(dir.path()).unwrap_err();
    assert!(format!("{:#}", err).contains(GPA_FILE));
}

#[test]
fn test_export_roundtrips_selection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    let store = DatasetStore::embedded().unwrap();
    let state = SelectionState {
        selected_group: "arts".to_string(),
        selected_year_bound: "2021".to_string(),
        ..SelectionState::default()
    };

    write_snapshot(&snapshot(&store, &state), ExportFormat::Json, Some(&path)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(value["group"], "arts");
    assert_eq!(value["year_bound"], "2021");
    let gpa = value["sections"][0]["gpa"].as_array().unwrap();
    assert_eq!(gpa.len(), gpa_view(&store, "2021").len());
}

#[test]
fn test_command_line_selection_starts_without_notification() {
    let config = DashboardConfig::default().with_selection(
        Some("law".to_string()),
        Some("2022".to_string()),
        Some("fr".to_string()),
    );
    let session = Session::new(&config);

    assert_eq!(session.state().selected_group, "law");
    assert_eq!(session.state().selected_year_bound, "2022");
    assert_eq!(session.state().language, Lang::Fr);
    assert!(session.state().notification.is_none());

    let untouched = DashboardConfig::default().with_selection(None, None, None);
    assert_eq!(untouched, DashboardConfig::default());
}
