use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Selection movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < app.store.len() {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G')) => {
            app.cursor = app.store.len().saturating_sub(1);
        }

        // Focus the new-task entry row
        (KeyModifiers::NONE, KeyCode::Char('a')) | (KeyModifiers::NONE, KeyCode::Char('i')) => {
            app.mode = Mode::Insert;
        }

        // Start editing the selected task
        (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('e')) => {
            app.start_edit();
        }

        // Toggle completion
        (KeyModifiers::NONE, KeyCode::Char(' ')) | (KeyModifiers::NONE, KeyCode::Char('x')) => {
            if let Some(task) = app.selected_task() {
                let id = task.id;
                app.store.toggle_done(id);
            }
        }

        // Delete (goes through confirmation)
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            app.request_remove();
        }

        _ => {}
    }
}
