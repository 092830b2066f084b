use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Commit path: submit finalizes the draft
        (_, KeyCode::Enter) => {
            app.commit_edit();
        }
        // Cancel path: draft discarded, title untouched
        (_, KeyCode::Esc) => {
            app.cancel_edit();
        }
        (_, KeyCode::Backspace) => {
            app.editor.backspace();
        }
        (_, KeyCode::Delete) => {
            app.editor.delete_forward();
        }
        (_, KeyCode::Left) => {
            app.editor.move_left();
        }
        (_, KeyCode::Right) => {
            app.editor.move_right();
        }
        (_, KeyCode::Home) => {
            app.editor.move_home();
        }
        (_, KeyCode::End) => {
            app.editor.move_end();
        }
        (mods, KeyCode::Char(c))
            if mods.is_empty() || mods == KeyModifiers::SHIFT =>
        {
            app.editor.insert_char(c);
        }
        _ => {}
    }
}
