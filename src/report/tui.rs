// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive terminal dashboard

use crate::config::DashboardConfig;
use crate::dataset::DatasetStore;
use crate::report::formatter::DashboardFormatter;
use crate::session::{Clock, Key, KeyInput, Session};
use crate::types::{Section, DEFAULT_YEAR_BOUND, GROUP_KEYS};
use crate::views::{section_view, YearBound};
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::Duration;

pub struct DashboardTui;

impl DashboardTui {
    pub fn run(store: &DatasetStore, config: &DashboardConfig) -> Result<()> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(store, config);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(store: &DatasetStore, config: &DashboardConfig) -> Result<()> {
        let mut stdout = stdout();
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let mut session = Session::new(config);
        let mut panel_cursor = 0;

        loop {
            session.tick();
            Self::render(&mut stdout, store, &session, panel_cursor)?;

            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(KeyEvent {
                    code, modifiers, ..
                }) = event::read()?
                {
                    if session.handle_key(key_input(code, modifiers)) {
                        continue;
                    }
                    if session.state().panel_open {
                        let sections = Section::all();
                        match code {
                            KeyCode::Char('j') | KeyCode::Down => {
                                panel_cursor = (panel_cursor + 1) % sections.len();
                            }
                            KeyCode::Char('k') | KeyCode::Up => {
                                panel_cursor = (panel_cursor + sections.len() - 1) % sections.len();
                            }
                            KeyCode::Enter => {
                                session.select_from_panel(sections[panel_cursor].as_str());
                            }
                            KeyCode::Char('q') => break,
                            _ => {}
                        }
                        continue;
                    }
                    match code {
                        KeyCode::Char('q') => break,
                        KeyCode::Tab => {
                            let next = session.state().active_section.next();
                            session.set_active_section(next.as_str());
                        }
                        KeyCode::BackTab => {
                            let previous = session.state().active_section.previous();
                            session.set_active_section(previous.as_str());
                        }
                        KeyCode::Char('m') => {
                            panel_cursor = Section::all()
                                .iter()
                                .position(|s| *s == session.state().active_section)
                                .unwrap_or(0);
                            session.set_panel_open(true);
                        }
                        KeyCode::Char('g') => {
                            let group = cycle_group(&session.state().selected_group, 1);
                            session.set_selected_group(group);
                        }
                        KeyCode::Char('G') => {
                            let group = cycle_group(&session.state().selected_group, -1);
                            session.set_selected_group(group);
                        }
                        KeyCode::Char('y') => {
                            let year = step_year(&session.state().selected_year_bound, -1);
                            session.set_selected_year_bound(&year);
                        }
                        KeyCode::Char('Y') => {
                            let year = step_year(&session.state().selected_year_bound, 1);
                            session.set_selected_year_bound(&year);
                        }
                        _ => {}
                    }
                }
            }
        }

        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn render<C: Clock>(
        stdout: &mut impl Write,
        store: &DatasetStore,
        session: &Session<C>,
        panel_cursor: usize,
    ) -> Result<()> {
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let state = session.state();
        let formatter = DashboardFormatter::new(state.language);

        let mut lines = Vec::new();
        if state.panel_open {
            lines.extend(formatter.panel_lines(state.active_section, panel_cursor));
            lines.push(String::new());
        }
        lines.extend(formatter.lines(state, &section_view(store, state)));
        lines.push(String::new());
        lines.push(
            "Controls: [Tab] Section, [m] Menu, [g/G] Group, [y/Y] Year, [Ctrl+L] Language, [q] Quit"
                .dimmed()
                .to_string(),
        );

        // Raw mode does not translate \n into a carriage return.
        for line in lines {
            write!(stdout, "{}\r\n", line)?;
        }
        stdout.flush()?;
        Ok(())
    }
}

fn key_input(code: KeyCode, modifiers: KeyModifiers) -> KeyInput {
    let key = match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    };
    KeyInput {
        key,
        ctrl: modifiers.contains(KeyModifiers::CONTROL),
    }
}

/// Next (or previous) group key; unknown groups restart from `"all"`.
fn cycle_group(current: &str, step: isize) -> &'static str {
    let len = GROUP_KEYS.len() as isize;
    let next = match GROUP_KEYS.iter().position(|g| *g == current) {
        Some(idx) => (idx as isize + step).rem_euclid(len),
        None => 0,
    };
    GROUP_KEYS[next as usize]
}

/// Move the year bound by one; an unusable bound resets to the default.
fn step_year(current: &str, step: i64) -> String {
    match YearBound::parse(current) {
        YearBound::Year(year) => year.saturating_add(step).to_string(),
        YearBound::Invalid => DEFAULT_YEAR_BOUND.to_string(),
    }
}
