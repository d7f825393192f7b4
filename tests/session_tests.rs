// SPDX-License-Identifier: PMPL-1.0-or-later

//! Session state transitions and the notification timer

use llm_edu_dashboard::config::DashboardConfig;
use llm_edu_dashboard::i18n::{t, Lang};
use llm_edu_dashboard::session::{FocusTarget, Key, KeyInput, ManualClock, Session};
use llm_edu_dashboard::types::Section;
use std::time::Duration;

fn session() -> (Session<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let session = Session::with_clock(&DashboardConfig::default(), clock.clone());
    (session, clock)
}

fn message(session: &Session<ManualClock>) -> Option<&str> {
    session
        .state()
        .notification
        .as_ref()
        .map(|n| n.message.as_str())
}

#[test]
fn test_toggle_language_announces_in_french_and_clears() {
    let (mut session, clock) = session();

    assert_eq!(session.toggle_language(), Lang::Fr);
    assert_eq!(session.state().language, Lang::Fr);
    assert_eq!(message(&session), Some("Données mises à jour avec succès"));

    clock.advance(Duration::from_millis(2999));
    assert_eq!(session.tick(), 0);
    assert!(session.state().notification.is_some());

    clock.advance(Duration::from_millis(1));
    assert_eq!(session.tick(), 1);
    assert!(session.state().notification.is_none());
    assert_eq!(session.pending_tasks(), 0);
}

#[test]
fn test_toggle_twice_returns_to_english() {
    let (mut session, _) = session();
    session.toggle_language();
    session.toggle_language();

    assert_eq!(session.state().language, Lang::En);
    assert_eq!(message(&session), Some(t(Lang::En, "dataUpdated")));
}

#[test]
fn test_newer_notification_supersedes_older_timer() {
    let (mut session, clock) = session();

    session.notify("first".to_string());
    clock.advance(Duration::from_secs(2));
    session.notify("second".to_string());
    assert_eq!(session.pending_tasks(), 1);

    // The first timer would have fired here.
    clock.advance(Duration::from_secs(1));
    assert_eq!(session.tick(), 0);
    assert_eq!(message(&session), Some("second"));

    clock.advance(Duration::from_secs(2));
    assert_eq!(session.tick(), 1);
    assert!(session.state().notification.is_none());
}

#[test]
fn test_unknown_section_is_ignored() {
    let (mut session, _) = session();
    session.set_active_section("reports");

    assert!(!session.set_active_section("bogus"));
    assert_eq!(session.state().active_section, Section::Reports);
    assert!(!session.set_active_section("Overview"));
    assert_eq!(session.state().active_section, Section::Reports);
}

#[test]
fn test_every_section_is_selectable() {
    let (mut session, _) = session();
    for section in Section::all() {
        assert!(session.set_active_section(section.as_str()));
        assert_eq!(session.state().active_section, *section);
    }
}

#[test]
fn test_ctrl_l_toggles_from_any_section() {
    let (mut session, _) = session();
    let mut expected = Lang::En;
    for section in Section::all() {
        session.set_active_section(section.as_str());
        assert!(session.handle_key(KeyInput::ctrl('l')));
        expected = expected.toggled();
        assert_eq!(session.state().language, expected);
    }
    // Plain "l" is not a shortcut.
    assert!(!session.handle_key(KeyInput::plain(Key::Char('l'))));
    assert_eq!(session.state().language, expected);
}

#[test]
fn test_escape_closes_panel_and_returns_focus() {
    let (mut session, _) = session();
    session.set_panel_open(true);
    assert_eq!(session.focus(), FocusTarget::PanelClose);

    assert!(session.handle_key(KeyInput::plain(Key::Escape)));
    assert!(!session.state().panel_open);
    assert_eq!(session.focus(), FocusTarget::Page);
}

#[test]
fn test_group_filter_notifies_and_accepts_unknown_groups() {
    let (mut session, clock) = session();
    session.set_language("fr");
    session.set_selected_group("not-a-faculty");

    assert_eq!(session.state().selected_group, "not-a-faculty");
    assert_eq!(message(&session), Some(t(Lang::Fr, "filterApplied")));

    clock.advance(Duration::from_secs(3));
    session.tick();
    assert!(session.state().notification.is_none());
}

#[test]
fn test_year_bound_is_stored_verbatim() {
    let (mut session, _) = session();
    session.set_selected_year_bound("2021abc");

    assert_eq!(session.state().selected_year_bound, "2021abc");
    assert!(session.state().notification.is_none());
}

#[test]
fn test_config_sets_initial_selection() {
    let config = DashboardConfig {
        default_language: "fr".to_string(),
        default_group: "medicine".to_string(),
        default_year_bound: "2022".to_string(),
        ..DashboardConfig::default()
    };
    let session = Session::with_clock(&config, ManualClock::new());

    assert_eq!(session.state().language, Lang::Fr);
    assert_eq!(session.state().selected_group, "medicine");
    assert_eq!(session.state().selected_year_bound, "2022");
}

#[test]
fn test_oversized_notification_window_falls_back_to_default() {
    let clock = ManualClock::new();
    let config = DashboardConfig {
        notification_secs: u64::MAX,
        ..DashboardConfig::default()
    };
    let mut session = Session::with_clock(&config, clock.clone());

    session.set_selected_group("law");
    assert_eq!(message(&session), Some(t(Lang::En, "filterApplied")));

    clock.advance(Duration::from_secs(3));
    assert_eq!(session.tick(), 1);
    assert!(session.state().notification.is_none());
}
