// SPDX-License-Identifier: PMPL-1.0-or-later

//! Chart- and table-ready projections of the derived views.

use super::{gpa_view, usage_view};
use crate::dataset::DatasetStore;
use crate::i18n::{t, Lang};
use crate::session::{SelectionState, Shortcut, SHORTCUTS};
use crate::types::{
    DemographicSlice, GpaRecord, PerformanceMetric, Section, StatCard, UsageRecord, DEFAULT_GROUP,
    GROUP_KEYS,
};
use serde::Serialize;

const STAT_CARDS: &[StatCard] = &[
    StatCard {
        title_key: "totalStudents",
        value: "2,847",
        change: "+12.3%",
        description_key: "vsLastSemester",
        accent: "blue",
    },
    StatCard {
        title_key: "avgImprovement",
        value: "+0.6",
        change: "+18.7%",
        description_key: "gpaPoints",
        accent: "green",
    },
    StatCard {
        title_key: "llmAdoption",
        value: "73%",
        change: "+25.4%",
        description_key: "activeUsers",
        accent: "purple",
    },
    StatCard {
        title_key: "satisfactionRate",
        value: "4.2/5",
        change: "+8.1%",
        description_key: "userRating",
        accent: "orange",
    },
];

/// The overview's summary cards.
pub fn stat_cards() -> &'static [StatCard] {
    STAT_CARDS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Label key for a group: `"all"` is shown as "All Faculties".
pub fn group_label_key(group: &str) -> &str {
    if group == DEFAULT_GROUP {
        "allFaculties"
    } else {
        group
    }
}

pub fn group_options(lang: Lang) -> Vec<GroupOption> {
    GROUP_KEYS
        .iter()
        .map(|&key| GroupOption {
            key,
            label: t(lang, group_label_key(key)),
        })
        .collect()
}

/// Whole numbers print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn format_gpa(value: f64) -> String {
    format!("{:.2}", value)
}

/// `"68% (1936 students)"`
pub fn usage_tooltip(record: &UsageRecord, lang: Lang) -> String {
    format!(
        "{}% ({} {})",
        format_number(record.percentage),
        record.students,
        t(lang, "students")
    )
}

/// `"Year: 2023"`
pub fn gpa_tooltip_label(year: i32, lang: Lang) -> String {
    format!("{}: {}", t(lang, "year"), year)
}

pub fn demographic_tooltip(slice: &DemographicSlice, lang: Lang) -> String {
    format!(
        "{}% ({} {})",
        format_number(slice.value),
        slice.count,
        t(lang, "students")
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdoptionPoint {
    pub year: i32,
    pub llm_users: u64,
    pub non_llm_users: u64,
}

/// LLM vs non-LLM users per year, under the same year bound as the GPA view.
pub fn adoption_series(store: &DatasetStore, bound: &str) -> Vec<AdoptionPoint> {
    gpa_view(store, bound)
        .into_iter()
        .map(|record| AdoptionPoint {
            year: record.year,
            llm_users: record.llm_users,
            non_llm_users: record.non_llm_users,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub purpose: String,
    pub usage: String,
    pub students: u64,
    pub trend: String,
}

/// Localized rows of the reports table for `group`.
pub fn report_rows(store: &DatasetStore, group: &str, lang: Lang) -> Vec<ReportRow> {
    usage_view(store, group)
        .into_iter()
        .map(|record| ReportRow {
            purpose: t(lang, &record.purpose).to_string(),
            usage: format!("{}%", format_number(record.percentage)),
            students: record.students,
            trend: record.trend,
        })
        .collect()
}

/// Everything one section draws, derived from the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum SectionView {
    Overview {
        cards: &'static [StatCard],
        usage: Vec<UsageRecord>,
        gpa: Vec<GpaRecord>,
        demographics: Vec<DemographicSlice>,
        performance: Vec<PerformanceMetric>,
    },
    Analytics {
        adoption: Vec<AdoptionPoint>,
    },
    Reports {
        rows: Vec<ReportRow>,
    },
    Settings {
        language: Lang,
        shortcuts: &'static [Shortcut],
    },
}

impl SectionView {
    pub fn section(&self) -> Section {
        match self {
            SectionView::Overview { .. } => Section::Overview,
            SectionView::Analytics { .. } => Section::Analytics,
            SectionView::Reports { .. } => Section::Reports,
            SectionView::Settings { .. } => Section::Settings,
        }
    }
}

pub fn section_view(store: &DatasetStore, state: &SelectionState) -> SectionView {
    match state.active_section {
        Section::Overview => SectionView::Overview {
            cards: stat_cards(),
            usage: usage_view(store, &state.selected_group),
            gpa: gpa_view(store, &state.selected_year_bound),
            demographics: store.demographics().to_vec(),
            performance: store.performance().to_vec(),
        },
        Section::Analytics => SectionView::Analytics {
            adoption: adoption_series(store, &state.selected_year_bound),
        },
        Section::Reports => SectionView::Reports {
            rows: report_rows(store, &state.selected_group, state.language),
        },
        Section::Settings => SectionView::Settings {
            language: state.language,
            shortcuts: SHORTCUTS,
        },
    }
}
