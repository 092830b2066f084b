use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Submit the draft; stays in Insert so several tasks can be added in a row
        (_, KeyCode::Enter) => {
            app.submit_entry();
        }
        // Back to the list; the draft is kept for next time
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Backspace) => {
            app.entry_backspace();
        }
        (_, KeyCode::Left) => {
            app.entry_move_left();
        }
        (_, KeyCode::Right) => {
            app.entry_move_right();
        }
        (_, KeyCode::Home) => {
            app.entry_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.entry_cursor = app.entry_draft.len();
        }
        (mods, KeyCode::Char(c))
            if mods.is_empty() || mods == KeyModifiers::SHIFT =>
        {
            app.entry_insert_char(c);
        }
        _ => {}
    }
}
