// SPDX-License-Identifier: PMPL-1.0-or-later

//! Selection state and the controller that owns it.
//!
//! A [`Session`] is the only writer of its [`SelectionState`]. Renderers
//! read the state through [`Session::state`] and change it exclusively
//! through the named operations below, each of which completes before it
//! returns. The one deferred effect, clearing a notification, runs from
//! [`Session::tick`].

mod keys;
mod scheduler;

pub use keys::{shortcut_for, Key, KeyInput, Shortcut, ShortcutAction, SHORTCUTS};
pub use scheduler::{Clock, ManualClock, Scheduler, SystemClock, TaskHandle};

use crate::config::DashboardConfig;
use crate::i18n::{resolve_language, t, Lang};
use crate::types::{Section, DEFAULT_GROUP, DEFAULT_YEAR_BOUND};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long a notification stays up unless replaced.
pub const NOTIFICATION_WINDOW: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub deadline: Instant,
    generation: u64,
}

/// Where keyboard focus currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Page,
    /// First interactive element of the navigation panel.
    PanelClose,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub language: Lang,
    pub active_section: Section,
    pub selected_group: String,
    pub selected_year_bound: String,
    pub panel_open: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub notification: Option<Notification>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            language: Lang::En,
            active_section: Section::Overview,
            selected_group: DEFAULT_GROUP.to_string(),
            selected_year_bound: DEFAULT_YEAR_BOUND.to_string(),
            panel_open: false,
            loading: false,
            error: None,
            notification: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionTask {
    ClearNotification { generation: u64 },
}

pub struct Session<C: Clock = SystemClock> {
    state: SelectionState,
    focus: FocusTarget,
    clock: C,
    scheduler: Scheduler<SessionTask>,
    notification_window: Duration,
    notification_task: Option<TaskHandle>,
    generation: u64,
}

impl Session<SystemClock> {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for Session<SystemClock> {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(config: &DashboardConfig, clock: C) -> Self {
        let state = SelectionState {
            language: resolve_language(&config.default_language),
            selected_group: config.default_group.clone(),
            selected_year_bound: config.default_year_bound.clone(),
            ..SelectionState::default()
        };
        Self {
            state,
            focus: FocusTarget::Page,
            clock,
            scheduler: Scheduler::new(),
            notification_window: config.notification_window(),
            notification_task: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// Number of deferred tasks still waiting to run.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Shorthand for a label in the session's current language.
    pub fn label<'a>(&self, key: &'a str) -> &'a str {
        t(self.state.language, key)
    }

    // ─── Mutators ───────────────────────────────────────────────────

    /// Switch to `code`; codes without a dictionary select the default
    /// language instead.
    pub fn set_language(&mut self, code: &str) -> Lang {
        let lang = resolve_language(code);
        debug!(from = %self.state.language, to = %lang, "language set");
        self.state.language = lang;
        lang
    }

    /// Flip between English and French and announce it in the new language.
    pub fn toggle_language(&mut self) -> Lang {
        let lang = self.state.language.toggled();
        debug!(from = %self.state.language, to = %lang, "language toggled");
        self.state.language = lang;
        self.notify(t(lang, "dataUpdated").to_string());
        lang
    }

    /// Returns `false`, leaving the state untouched, for anything other than
    /// a known section identifier.
    pub fn set_active_section(&mut self, section: &str) -> bool {
        match Section::parse(section) {
            Some(section) => {
                debug!(%section, "section selected");
                self.state.active_section = section;
                true
            }
            None => {
                warn!(section, "ignoring unknown section");
                false
            }
        }
    }

    /// Navigation-panel click: select the section and close the panel.
    pub fn select_from_panel(&mut self, section: &str) -> bool {
        let accepted = self.set_active_section(section);
        self.set_panel_open(false);
        accepted
    }

    /// Any group is accepted; unknown ones resolve to `"all"` at view time.
    pub fn set_selected_group(&mut self, group: &str) {
        debug!(group, "group filter applied");
        self.state.selected_group = group.to_string();
        let message = t(self.state.language, "filterApplied").to_string();
        self.notify(message);
    }

    pub fn set_selected_year_bound(&mut self, year: &str) {
        debug!(year, "year bound set");
        self.state.selected_year_bound = year.to_string();
    }

    pub fn set_panel_open(&mut self, open: bool) {
        self.state.panel_open = open;
        self.focus = if open {
            FocusTarget::PanelClose
        } else {
            FocusTarget::Page
        };
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.state.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        if let Some(message) = &error {
            warn!(error = %message, "dashboard error");
        }
        self.state.error = error;
    }

    /// Route a key press through the global shortcuts. Returns whether the
    /// press was consumed.
    pub fn handle_key(&mut self, input: KeyInput) -> bool {
        match shortcut_for(input) {
            Some(ShortcutAction::ToggleLanguage) => {
                self.toggle_language();
                true
            }
            Some(ShortcutAction::ClosePanel) if self.state.panel_open => {
                self.set_panel_open(false);
                true
            }
            _ => false,
        }
    }

    // ─── Notifications ──────────────────────────────────────────────

    /// Show `message`, replacing (and cancelling the clear of) any earlier
    /// notification.
    pub fn notify(&mut self, message: String) {
        if let Some(previous) = self.notification_task.take() {
            self.scheduler.cancel(previous);
        }
        self.generation += 1;
        let now = self.clock.now();
        // Windows too large for the platform's Instant use the default.
        let deadline = now
            .checked_add(self.notification_window)
            .unwrap_or(now + NOTIFICATION_WINDOW);
        let handle = self.scheduler.schedule(
            deadline,
            SessionTask::ClearNotification {
                generation: self.generation,
            },
        );
        debug!(text = %message, generation = self.generation, "notification shown");
        self.notification_task = Some(handle);
        self.state.notification = Some(Notification {
            message,
            deadline,
            generation: self.generation,
        });
    }

    /// Run deferred tasks that have come due. Returns how many ran.
    pub fn tick(&mut self) -> usize {
        let due = self.scheduler.take_due(self.clock.now());
        let count = due.len();
        for task in due {
            match task {
                SessionTask::ClearNotification { generation } => {
                    self.clear_notification(generation)
                }
            }
        }
        count
    }

    fn clear_notification(&mut self, generation: u64) {
        let current = self
            .state
            .notification
            .as_ref()
            .map(|notification| notification.generation);
        if current == Some(generation) {
            debug!(generation, "notification cleared");
            self.state.notification = None;
            self.notification_task = None;
        }
    }
}
