// SPDX-License-Identifier: PMPL-1.0-or-later

//! Native window for the dashboard.

use crate::config::DashboardConfig;
use crate::dataset::DatasetStore;
use crate::session::{FocusTarget, Key, KeyInput, Session};
use crate::types::{
    DemographicSlice, GpaRecord, PerformanceMetric, Section, StatCard, UsageRecord,
    INSTITUTION_KEYS,
};
use crate::views::{
    demographic_tooltip, format_gpa, group_options, section_view, usage_tooltip, AdoptionPoint,
    ReportRow, SectionView,
};
use anyhow::{anyhow, Result};
use eframe::{egui, App, Frame, NativeOptions};
use std::time::Duration;

pub struct DashboardGui {
    store: DatasetStore,
    session: Session,
    focus_pending: bool,
}

impl DashboardGui {
    pub fn run(store: DatasetStore, config: &DashboardConfig) -> Result<()> {
        let options = NativeOptions::default();
        let app = Self {
            store,
            session: Session::new(config),
            focus_pending: false,
        };
        eframe::run_native(
            "LLM Impact Dashboard",
            options,
            Box::new(|_cc| Box::new(app)),
        )
        .map_err(|err| anyhow!("failed to launch dashboard window: {err}"))?;
        Ok(())
    }

    fn set_panel_open(&mut self, open: bool) {
        self.session.set_panel_open(open);
        self.focus_pending = self.session.focus() == FocusTarget::PanelClose;
    }
}

impl App for DashboardGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.session.tick();

        let (ctrl_l, escape) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::L),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if ctrl_l {
            self.session.handle_key(KeyInput::ctrl('l'));
        }
        if escape {
            self.session.handle_key(KeyInput::plain(Key::Escape));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("☰").on_hover_text(self.session.label("openPanel")).clicked() {
                    self.set_panel_open(true);
                }
                ui.vertical(|ui| {
                    ui.heading(self.session.label("title"));
                    ui.label(self.session.label("subtitle"));
                });
                let lang = self.session.state().language;
                let hover = format!(
                    "{} {}",
                    self.session.label("switchTo"),
                    lang.toggled().native_name()
                );
                if ui
                    .button(format!("🌐 {}", lang.code().to_uppercase()))
                    .on_hover_text(hover)
                    .clicked()
                {
                    self.session.toggle_language();
                }
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.session.label("footer"));
                ui.separator();
                ui.label(format!(
                    "{}: Dec 2025 · {}: {}",
                    self.session.label("lastUpdated"),
                    self.session.label("dataSource"),
                    self.session.label("academicRegistry")
                ));
            });
            if let Some(notification) = &self.session.state().notification {
                ui.colored_label(egui::Color32::LIGHT_GREEN, notification.message.as_str());
            }
        });

        if self.session.state().panel_open {
            self.render_panel(ctx);
        }

        egui::SidePanel::left("nav").show(ctx, |ui| {
            ui.label(self.session.label("analyticsPlatform"));
            ui.separator();
            let active = self.session.state().active_section;
            for section in Section::all() {
                if ui
                    .selectable_label(active == *section, self.session.label(section.as_str()))
                    .clicked()
                {
                    self.session.set_active_section(section.as_str());
                }
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.state().loading {
                ui.spinner();
                ui.label(self.session.label("loading"));
                return;
            }
            if let Some(error) = &self.session.state().error {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("{}: {}", self.session.label("error"), error),
                );
            }
            let view = section_view(&self.store, self.session.state());
            egui::ScrollArea::vertical().show(ui, |ui| match &view {
                SectionView::Overview {
                    cards,
                    usage,
                    gpa,
                    demographics,
                    performance,
                } => {
                    self.render_cards(ui, cards);
                    self.render_filters(ui);
                    self.render_usage(ui, usage);
                    self.render_gpa(ui, gpa);
                    self.render_demographics(ui, demographics);
                    self.render_performance(ui, performance);
                }
                SectionView::Analytics { adoption } => self.render_analytics(ui, adoption),
                SectionView::Reports { rows } => {
                    self.render_filters(ui);
                    self.render_report(ui, rows);
                }
                SectionView::Settings { shortcuts, .. } => {
                    ui.heading(self.session.label("dashboardSettings"));
                    ui.horizontal(|ui| {
                        ui.label(self.session.label("language"));
                        let code = self.session.state().language.code().to_uppercase();
                        if ui.button(format!("🌐 {}", code)).clicked() {
                            self.session.toggle_language();
                        }
                    });
                    ui.label(self.session.label("chooseLanguage"));
                    ui.separator();
                    ui.heading(self.session.label("keyboardShortcuts"));
                    egui::Grid::new("shortcuts").striped(true).show(ui, |ui| {
                        for shortcut in shortcuts.iter() {
                            ui.label(self.session.label(shortcut.label_key));
                            ui.monospace(shortcut.keys);
                            ui.end_row();
                        }
                    });
                }
            });
        });

        // Keep ticking so notifications clear without user input.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl DashboardGui {
    fn render_panel(&mut self, ctx: &egui::Context) {
        let mut close = false;
        let mut selected = None;
        egui::Window::new(self.session.label("analyticsPlatform"))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                let close_button = ui.button(format!("✖ {}", self.session.label("closePanel")));
                if self.focus_pending {
                    close_button.request_focus();
                    self.focus_pending = false;
                }
                if close_button.clicked() {
                    close = true;
                }
                ui.separator();
                for section in Section::all() {
                    if ui.button(self.session.label(section.as_str())).clicked() {
                        selected = Some(*section);
                    }
                }
            });
        if let Some(section) = selected {
            self.session.select_from_panel(section.as_str());
        } else if close {
            self.set_panel_open(false);
        }
    }

    fn render_cards(&self, ui: &mut egui::Ui, cards: &[StatCard]) {
        ui.horizontal_wrapped(|ui| {
            for card in cards {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        ui.label(self.session.label(card.title_key));
                        ui.heading(card.value);
                        let color = if card.is_positive() {
                            egui::Color32::LIGHT_GREEN
                        } else {
                            egui::Color32::LIGHT_RED
                        };
                        ui.horizontal(|ui| {
                            ui.colored_label(color, card.change);
                            ui.weak(self.session.label(card.description_key));
                        });
                    });
                });
            }
        });
        ui.separator();
    }

    fn render_filters(&mut self, ui: &mut egui::Ui) {
        let lang = self.session.state().language;
        let current_group = self.session.state().selected_group.clone();
        let current_year = self.session.state().selected_year_bound.clone();
        let options = group_options(lang);
        let selected_label = options
            .iter()
            .find(|o| o.key == current_group)
            .map(|o| o.label.to_string())
            .unwrap_or_else(|| current_group.clone());

        let mut new_group = None;
        let mut new_year = None;
        ui.horizontal(|ui| {
            egui::ComboBox::from_label(self.session.label("facultyFilter"))
                .selected_text(selected_label)
                .show_ui(ui, |ui| {
                    for option in &options {
                        if ui
                            .selectable_label(option.key == current_group, option.label)
                            .clicked()
                        {
                            new_group = Some(option.key);
                        }
                    }
                });
            egui::ComboBox::from_label(self.session.label("yearBound"))
                .selected_text(current_year.clone())
                .show_ui(ui, |ui| {
                    for record in self.store.gpa() {
                        let year = record.year.to_string();
                        if ui.selectable_label(year == current_year, year.as_str()).clicked() {
                            new_year = Some(year);
                        }
                    }
                });
        });
        if let Some(group) = new_group {
            self.session.set_selected_group(group);
        }
        if let Some(year) = new_year {
            self.session.set_selected_year_bound(&year);
        }
        ui.separator();
    }

    fn render_usage(&self, ui: &mut egui::Ui, usage: &[UsageRecord]) {
        let lang = self.session.state().language;
        ui.heading(self.session.label("llmUsageTitle"));
        egui::Grid::new("usage").num_columns(2).show(ui, |ui| {
            for record in usage {
                ui.label(self.session.label(&record.purpose));
                ui.add(
                    egui::ProgressBar::new((record.percentage / 100.0) as f32)
                        .text(usage_tooltip(record, lang)),
                );
                ui.end_row();
            }
        });
        ui.separator();
    }

    fn render_gpa(&self, ui: &mut egui::Ui, gpa: &[GpaRecord]) {
        ui.heading(self.session.label("gpaTitle"));
        if gpa.is_empty() {
            ui.weak(self.session.label("noData"));
        }
        egui::Grid::new("gpa").striped(true).show(ui, |ui| {
            ui.strong(self.session.label("year"));
            for institution in INSTITUTION_KEYS {
                ui.strong(self.session.label(institution));
            }
            ui.end_row();
            for record in gpa {
                ui.label(record.year.to_string());
                for institution in INSTITUTION_KEYS {
                    ui.label(format_gpa(record.gpa_for(institution).unwrap_or_default()));
                }
                ui.end_row();
            }
        });
        ui.separator();
    }

    fn render_demographics(&self, ui: &mut egui::Ui, demographics: &[DemographicSlice]) {
        let lang = self.session.state().language;
        ui.heading(self.session.label("demographicsTitle"));
        egui::Grid::new("demographics").num_columns(2).show(ui, |ui| {
            for slice in demographics {
                ui.label(self.session.label(&slice.name));
                ui.add(
                    egui::ProgressBar::new((slice.value / 100.0) as f32)
                        .text(demographic_tooltip(slice, lang)),
                );
                ui.end_row();
            }
        });
        ui.separator();
    }

    fn render_performance(&self, ui: &mut egui::Ui, performance: &[PerformanceMetric]) {
        ui.heading(self.session.label("performanceTitle"));
        egui::Grid::new("performance").striped(true).show(ui, |ui| {
            for metric in performance {
                ui.label(metric.metric.as_str());
                ui.label(format!("{} → {}", metric.before, metric.after));
                ui.colored_label(egui::Color32::LIGHT_GREEN, metric.improvement.as_str());
                ui.weak(self.session.label("improvement"));
                ui.end_row();
            }
        });
    }

    fn render_analytics(&self, ui: &mut egui::Ui, adoption: &[AdoptionPoint]) {
        ui.heading(self.session.label("advancedAnalytics"));
        if adoption.is_empty() {
            ui.weak(self.session.label("noData"));
            return;
        }
        let peak = adoption
            .iter()
            .map(|p| p.llm_users.max(p.non_llm_users))
            .max()
            .unwrap_or(1)
            .max(1) as f32;
        egui::Grid::new("adoption").num_columns(3).show(ui, |ui| {
            ui.strong(self.session.label("year"));
            ui.strong(self.session.label("llmUsers"));
            ui.strong(self.session.label("nonLlmUsers"));
            ui.end_row();
            for point in adoption {
                ui.label(point.year.to_string());
                ui.add(
                    egui::ProgressBar::new(point.llm_users as f32 / peak)
                        .text(point.llm_users.to_string()),
                );
                ui.add(
                    egui::ProgressBar::new(point.non_llm_users as f32 / peak)
                        .text(point.non_llm_users.to_string()),
                );
                ui.end_row();
            }
        });
    }

    fn render_report(&self, ui: &mut egui::Ui, rows: &[ReportRow]) {
        ui.heading(self.session.label("dataTableTitle"));
        egui::Grid::new("report").striped(true).show(ui, |ui| {
            ui.strong(self.session.label("purpose"));
            ui.strong(self.session.label("usagePercent"));
            ui.strong(self.session.label("students"));
            ui.strong(self.session.label("trend"));
            ui.end_row();
            for row in rows {
                ui.label(row.purpose.as_str());
                ui.label(row.usage.as_str());
                ui.label(row.students.to_string());
                ui.colored_label(egui::Color32::LIGHT_GREEN, row.trend.as_str());
                ui.end_row();
            }
        });
    }
}
