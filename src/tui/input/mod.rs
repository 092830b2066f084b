mod confirm;
mod edit;
mod insert;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // The alert popup intercepts all input; acknowledge is its only action
    if app.alert.is_some() {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
        ) {
            app.alert = None;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Insert => insert::handle_insert(app, key),
        Mode::Edit => edit::handle_edit(app, key),
        Mode::Confirm => confirm::handle_confirm(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;
    use crossterm::event::KeyModifiers;

    pub(super) fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub(super) fn press(app: &mut App, code: KeyCode) {
        handle_key(app, key(code));
    }

    pub(super) fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn alert_intercepts_everything_until_dismissed() {
        let mut app = App::new(&AppConfig::default());
        app.store.add("Buy milk").unwrap();
        app.alert = Some(crate::tui::app::Alert::duplicate_title());

        // Keys that would normally mutate state do nothing
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.alert.is_some());
        assert_eq!(app.store.len(), 1);
        assert!(!app.store.tasks()[0].done);

        press(&mut app, KeyCode::Enter);
        assert!(app.alert.is_none());
    }
}
