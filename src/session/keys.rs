// SPDX-License-Identifier: PMPL-1.0-or-later

//! Toolkit-neutral key input and the global shortcut table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    ToggleLanguage,
    ClosePanel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub keys: &'static str,
    pub label_key: &'static str,
}

/// Shortcuts listed on the settings page.
pub const SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        keys: "Ctrl+L",
        label_key: "toggleLanguage",
    },
    Shortcut {
        keys: "Esc",
        label_key: "closePanelShortcut",
    },
];

/// Map a key press to the global action it triggers, if any.
pub fn shortcut_for(input: KeyInput) -> Option<ShortcutAction> {
    match input {
        KeyInput {
            key: Key::Char('l'),
            ctrl: true,
        } => Some(ShortcutAction::ToggleLanguage),
        KeyInput {
            key: Key::Escape, ..
        } => Some(ShortcutAction::ClosePanel),
        _ => None,
    }
}
