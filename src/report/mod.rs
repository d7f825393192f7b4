// SPDX-License-Identifier: PMPL-1.0-or-later

//! Presentation of the derived views: console, terminal UI, native window
//! and file export.

pub mod formatter;
pub mod gui;
pub mod output;
pub mod tui;

use crate::dataset::DatasetStore;
use crate::session::SelectionState;
use crate::views::section_view;

pub use formatter::DashboardFormatter;
pub use gui::DashboardGui;
pub use output::{snapshot, write_snapshot, DashboardSnapshot, ExportFormat};
pub use tui::DashboardTui;

/// Print the active section to the console
pub fn print_section(store: &DatasetStore, state: &SelectionState) {
    let formatter = DashboardFormatter::new(state.language);
    formatter.print(state, &section_view(store, state));
}
