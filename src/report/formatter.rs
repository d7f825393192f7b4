// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console rendering of dashboard sections

use crate::i18n::{t, Lang};
use crate::session::SelectionState;
use crate::types::{Section, StatCard, INSTITUTION_KEYS};
use crate::views::{
    demographic_tooltip, format_gpa, group_label_key, usage_tooltip, AdoptionPoint, ReportRow,
    SectionView,
};
use colored::*;

const BAR_WIDTH: usize = 32;

pub struct DashboardFormatter {
    lang: Lang,
}

impl DashboardFormatter {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    fn t<'a>(&self, key: &'a str) -> &'a str {
        t(self.lang, key)
    }

    pub fn print(&self, state: &SelectionState, view: &SectionView) {
        for line in self.lines(state, view) {
            println!("{}", line);
        }
    }

    /// Header, status, section body and footer, one entry per line.
    pub fn lines(&self, state: &SelectionState, view: &SectionView) -> Vec<String> {
        let mut lines = self.header(state);
        lines.push(String::new());
        lines.extend(self.status(state));
        lines.extend(self.section_lines(view));
        lines.push(String::new());
        lines.extend(self.footer());
        lines
    }

    pub fn header(&self, state: &SelectionState) -> Vec<String> {
        vec![
            self.t("title").bold().cyan().to_string(),
            self.t("subtitle").dimmed().to_string(),
            format!(
                "{} {} ┃ {}: {} ┃ {} {}",
                "◆".blue(),
                self.t(state.active_section.as_str()).bold(),
                self.t("language"),
                self.lang.code().to_uppercase(),
                self.t("yearBound"),
                state.selected_year_bound,
            ),
            self.group_line(&state.selected_group).dimmed().to_string(),
        ]
    }

    fn status(&self, state: &SelectionState) -> Vec<String> {
        let mut lines = Vec::new();
        if state.loading {
            lines.push(self.t("loading").dimmed().to_string());
        }
        if let Some(error) = &state.error {
            lines.push(format!("{}: {}", self.t("error").red().bold(), error));
        }
        if let Some(notification) = &state.notification {
            lines.push(format!("{} {}", "●".yellow(), notification.message.yellow()));
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    pub fn section_lines(&self, view: &SectionView) -> Vec<String> {
        match view {
            SectionView::Overview {
                cards,
                usage,
                gpa,
                demographics,
                performance,
            } => {
                let mut lines = self.card_lines(cards);
                lines.push(String::new());

                lines.push(self.t("llmUsageTitle").bold().yellow().to_string());
                if usage.is_empty() {
                    lines.push(format!("  {}", self.t("noData").dimmed()));
                }
                for record in usage {
                    lines.push(format!(
                        "  {:<18} {} {}",
                        self.t(&record.purpose),
                        bar(record.percentage, 100.0).blue(),
                        usage_tooltip(record, self.lang).dimmed()
                    ));
                }
                lines.push(String::new());

                lines.push(self.t("gpaTitle").bold().yellow().to_string());
                let mut heading = format!("  {:<8}", self.t("year"));
                for institution in INSTITUTION_KEYS {
                    heading.push_str(&format!("{:>16}", self.t(institution)));
                }
                lines.push(heading.bold().to_string());
                if gpa.is_empty() {
                    lines.push(format!("  {}", self.t("noData").dimmed()));
                }
                for record in gpa {
                    let mut row = format!("  {:<8}", record.year);
                    for institution in INSTITUTION_KEYS {
                        let value = record.gpa_for(institution).unwrap_or_default();
                        row.push_str(&format!("{:>16}", format_gpa(value)));
                    }
                    lines.push(row);
                }
                lines.push(String::new());

                lines.push(self.t("demographicsTitle").bold().yellow().to_string());
                for slice in demographics {
                    lines.push(format!(
                        "  {:<18} {} {}",
                        self.t(&slice.name),
                        bar(slice.value, 100.0).magenta(),
                        demographic_tooltip(slice, self.lang).dimmed()
                    ));
                }
                lines.push(String::new());

                lines.push(self.t("performanceTitle").bold().yellow().to_string());
                for metric in performance {
                    lines.push(format!(
                        "  {:<24} {} → {}  {} {}",
                        metric.metric,
                        metric.before,
                        metric.after,
                        metric.improvement.green().bold(),
                        self.t("improvement").dimmed()
                    ));
                }
                lines
            }
            SectionView::Analytics { adoption } => self.analytics_lines(adoption),
            SectionView::Reports { rows } => self.report_lines(rows),
            SectionView::Settings {
                language,
                shortcuts,
            } => {
                let mut lines = vec![
                    self.t("dashboardSettings").bold().yellow().to_string(),
                    format!(
                        "  {:<18} {} ({})",
                        self.t("language"),
                        language.code().to_uppercase().bold(),
                        language.native_name()
                    ),
                    format!("  {}", self.t("chooseLanguage").dimmed()),
                    format!(
                        "  {} {}",
                        self.t("switchTo"),
                        language.toggled().native_name()
                    ),
                    String::new(),
                    self.t("keyboardShortcuts").bold().yellow().to_string(),
                ];
                for shortcut in shortcuts.iter() {
                    lines.push(format!(
                        "  {:<24} [{}]",
                        self.t(shortcut.label_key),
                        shortcut.keys
                    ));
                }
                lines
            }
        }
    }

    fn card_lines(&self, cards: &[StatCard]) -> Vec<String> {
        cards
            .iter()
            .map(|card| {
                let change = if card.is_positive() {
                    card.change.green()
                } else {
                    card.change.red()
                };
                format!(
                    "  {:<38} {:>8}  {} {}",
                    self.t(card.title_key),
                    card.value.bold(),
                    change,
                    self.t(card.description_key).dimmed()
                )
            })
            .collect()
    }

    fn analytics_lines(&self, adoption: &[AdoptionPoint]) -> Vec<String> {
        let mut lines = vec![self.t("advancedAnalytics").bold().yellow().to_string()];
        if adoption.is_empty() {
            lines.push(format!("  {}", self.t("noData").dimmed()));
            return lines;
        }
        let peak = adoption
            .iter()
            .map(|p| p.llm_users.max(p.non_llm_users))
            .max()
            .unwrap_or(1)
            .max(1) as f64;
        for point in adoption {
            lines.push(format!(
                "  {:<6} {} {:>6} {}",
                point.year,
                bar(point.llm_users as f64, peak).blue(),
                point.llm_users,
                self.t("llmUsers").dimmed()
            ));
            lines.push(format!(
                "  {:<6} {} {:>6} {}",
                "",
                bar(point.non_llm_users as f64, peak).red(),
                point.non_llm_users,
                self.t("nonLlmUsers").dimmed()
            ));
        }
        lines
    }

    fn report_lines(&self, rows: &[ReportRow]) -> Vec<String> {
        let mut lines = vec![
            self.t("dataTableTitle").bold().yellow().to_string(),
            format!(
                "  {:<18} {:>14} {:>10}  {}",
                self.t("purpose"),
                self.t("usagePercent"),
                self.t("students"),
                self.t("trend")
            )
            .bold()
            .to_string(),
        ];
        for row in rows {
            lines.push(format!(
                "  {:<18} {:>14} {:>10}  {}",
                row.purpose,
                row.usage,
                row.students,
                row.trend.green()
            ));
        }
        lines
    }

    pub fn footer(&self) -> Vec<String> {
        vec![
            format!(
                "{}: Dec 2025 ┃ {}: {}",
                self.t("lastUpdated"),
                self.t("dataSource"),
                self.t("academicRegistry")
            )
            .dimmed()
            .to_string(),
            self.t("footer").dimmed().to_string(),
        ]
    }

    /// One line naming the active group filter.
    pub fn group_line(&self, group: &str) -> String {
        format!("{}: {}", self.t("facultyFilter"), self.t(group_label_key(group)))
    }

    /// Entries of the navigation panel with the cursor marked.
    pub fn panel_lines(&self, active: Section, cursor: usize) -> Vec<String> {
        let mut lines = vec![self.t("analyticsPlatform").bold().to_string()];
        for (idx, section) in Section::all().iter().enumerate() {
            let indicator = if idx == cursor {
                "➤".green()
            } else {
                " ".normal()
            };
            let label = if *section == active {
                self.t(section.as_str()).bold().to_string()
            } else {
                self.t(section.as_str()).to_string()
            };
            lines.push(format!("{} {}", indicator, label));
        }
        lines.push(format!("[Esc] {}", self.t("closePanel")).dimmed().to_string());
        lines
    }
}

fn bar(value: f64, max: f64) -> String {
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
