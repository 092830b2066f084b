//! End-to-end scenario driven entirely through key events, the way a
//! user would exercise the app: add, reject a duplicate, toggle, edit,
//! and remove with confirmation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use ticklist::model::config::AppConfig;
use ticklist::tui::app::{App, Mode};
use ticklist::tui::input::handle_key;

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn add_duplicate_toggle_edit_remove() {
    let mut app = App::new(&AppConfig::default());
    assert!(app.store.is_empty());

    // Add "Buy milk"
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.mode, Mode::Insert);
    type_str(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.tasks()[0].title, "Buy milk");
    assert!(!app.store.tasks()[0].done);

    // Add the same title again: alert, count unchanged
    type_str(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);
    assert!(app.alert.is_some());
    assert_eq!(app.store.len(), 1);

    // While the alert is up, input is intercepted
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Enter);
    assert!(app.alert.is_none());

    // Back to the list, toggle done
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, Mode::Navigate);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.store.tasks()[0].done);

    // Edit the title; done survives the edit
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Edit);
    for _ in 0..4 {
        press(&mut app, KeyCode::Backspace);
    }
    type_str(&mut app, "oat milk");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.store.tasks()[0].title, "Buy oat milk");
    assert!(app.store.tasks()[0].done);

    // Delete: cancelled first, then confirmed
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.mode, Mode::Confirm);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.store.len(), 1);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert!(app.store.is_empty());
    assert_eq!(app.mode, Mode::Navigate);
}

#[test]
fn cancelled_edit_keeps_the_old_title() {
    let mut app = App::new(&AppConfig::default());
    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "Water the plants");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('e'));
    type_str(&mut app, " tomorrow");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.store.tasks()[0].title, "Water the plants");
    assert_eq!(app.mode, Mode::Navigate);
}

#[test]
fn several_tasks_keep_insertion_order_across_operations() {
    let mut app = App::new(&AppConfig::default());
    press(&mut app, KeyCode::Char('a'));
    for title in ["one", "two", "three"] {
        type_str(&mut app, title);
        press(&mut app, KeyCode::Enter);
    }
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.store.len(), 3);

    // Remove the middle task; order of the rest is preserved
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));

    let titles: Vec<&str> = app.store.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["one", "three"]);
}
