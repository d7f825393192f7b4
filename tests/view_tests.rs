// SPDX-License-Identifier: PMPL-1.0-or-later

//! View derivation over the embedded and hand-built datasets

use llm_edu_dashboard::dataset::DatasetStore;
use llm_edu_dashboard::i18n::{keys, Lang};
use llm_edu_dashboard::sanitize::sanitize;
use llm_edu_dashboard::session::SelectionState;
use llm_edu_dashboard::types::{GpaRecord, Section, GROUP_KEYS};
use llm_edu_dashboard::views::{
    gpa_view, localized_label, report_rows, section_view, usage_view, SectionView,
};

fn gpa_record(year: i32) -> GpaRecord {
    GpaRecord {
        year,
        university_a: 3.2,
        university_b: 3.1,
        university_c: 3.0,
        llm_users: 100,
        non_llm_users: 200,
    }
}

fn store_with_years(years: &[i32]) -> DatasetStore {
    let embedded = DatasetStore::embedded().expect("embedded fixtures should parse");
    let usage = embedded
        .usage_groups()
        .map(|group| {
            (
                group.to_string(),
                embedded.usage_group(group).unwrap_or_default().to_vec(),
            )
        })
        .collect();
    DatasetStore::new(
        usage,
        years.iter().copied().map(gpa_record).collect(),
        embedded.demographics().to_vec(),
        embedded.performance().to_vec(),
    )
}

#[test]
fn test_unknown_group_falls_back_to_all() {
    let store = DatasetStore::embedded().unwrap();
    let expected = sanitize(store.usage_group("all"));

    assert!(!expected.is_empty());
    assert_eq!(usage_view(&store, "unknown_group"), expected);
    assert_eq!(usage_view(&store, ""), expected);
}

#[test]
fn test_every_known_group_resolves_to_itself() {
    let store = DatasetStore::embedded().unwrap();
    for group in GROUP_KEYS {
        assert_eq!(
            usage_view(&store, group),
            sanitize(store.usage_group(group)),
            "group {} should select its own records",
            group
        );
    }
}

#[test]
fn test_gpa_view_is_inclusive_and_ordered() {
    let store = store_with_years(&[2022, 2023, 2024]);
    let years: Vec<i32> = gpa_view(&store, "2023").iter().map(|r| r.year).collect();

    assert_eq!(years, vec![2022, 2023]);
}

fn is_subsequence(smaller: &[GpaRecord], larger: &[GpaRecord]) -> bool {
    let mut rest = larger.iter();
    smaller.iter().all(|record| rest.any(|candidate| candidate == record))
}

#[test]
fn test_gpa_view_is_monotonic_in_bound() {
    let store = store_with_years(&[2021, 2019, 2024, 2020, 2023, 2022]);
    let mut previous = Vec::new();
    for bound in 2017..=2026 {
        let current = gpa_view(&store, &bound.to_string());
        assert!(
            is_subsequence(&previous, &current),
            "bound {} dropped or reordered records of bound {}",
            bound,
            bound - 1
        );
        previous = current;
    }
    assert_eq!(previous, store.gpa());

    // Unsorted input keeps dataset order.
    let years: Vec<i32> = gpa_view(&store, "2021").iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2021, 2019, 2020]);
}

#[test]
fn test_gpa_view_unusual_bounds() {
    let store = store_with_years(&[2022, 2023, 2024]);

    assert_eq!(gpa_view(&store, "2023-06").len(), 2);
    assert_eq!(gpa_view(&store, "1999").len(), 0);
    assert!(gpa_view(&store, "latest").is_empty());
    assert!(gpa_view(&store, "").is_empty());
}

#[test]
fn test_localization_resolves_or_echoes_key() {
    assert_eq!(localized_label("coding", "en"), "Coding");
    assert_eq!(localized_label("coding", "fr"), "Programmation");
    assert_eq!(localized_label("noSuchKey", "fr"), "noSuchKey");
    // Unsupported languages use the English table.
    assert_eq!(localized_label("coding", "de"), "Coding");
}

#[test]
fn test_dictionaries_share_keys() {
    let mut en: Vec<&str> = keys(Lang::En).collect();
    let mut fr: Vec<&str> = keys(Lang::Fr).collect();
    en.sort_unstable();
    fr.sort_unstable();

    assert_eq!(en, fr);
}

#[test]
fn test_report_rows_follow_group_and_language() {
    let store = DatasetStore::embedded().unwrap();
    let rows = report_rows(&store, "engineering", Lang::Fr);
    let usage = usage_view(&store, "engineering");

    assert_eq!(rows.len(), usage.len());
    assert_eq!(rows[0].purpose, localized_label(&usage[0].purpose, "fr"));
    assert!(rows.iter().all(|row| row.usage.ends_with('%')));
}

#[test]
fn test_section_view_matches_active_section() {
    let store = DatasetStore::embedded().unwrap();
    for section in Section::all() {
        let state = SelectionState {
            active_section: *section,
            ..SelectionState::default()
        };
        assert_eq!(section_view(&store, &state).section(), *section);
    }

    let overview = section_view(&store, &SelectionState::default());
    match overview {
        SectionView::Overview { cards, usage, .. } => {
            assert_eq!(cards.len(), 4);
            assert_eq!(usage, usage_view(&store, "all"));
        }
        other => panic!("expected overview, got {:?}", other.section()),
    }
}

#[test]
fn test_dataset_keys_have_labels_in_both_languages() {
    let store = DatasetStore::embedded().unwrap();
    let mut dataset_keys: Vec<String> = store
        .usage_groups()
        .flat_map(|group| sanitize(store.usage_group(group)))
        .map(|record| record.purpose)
        .collect();
    dataset_keys.extend(store.demographics().iter().map(|slice| slice.name.clone()));

    for key in &dataset_keys {
        for lang in ["en", "fr"] {
            assert_ne!(
                localized_label(key, lang),
                key.as_str(),
                "{} has no {} label",
                key,
                lang
            );
        }
    }
}
