use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let pending = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(ConfirmAction::RemoveTask { task_id }) = pending {
                app.store.remove(task_id);
                app.clamp_cursor();
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::press;
    use crate::model::config::AppConfig;
    use crate::tui::app::{App, Mode};
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    fn confirming_app() -> App {
        let mut app = App::new(&AppConfig::default());
        app.store.add("one").unwrap();
        app.store.add("two").unwrap();
        app.cursor = 1;
        app.request_remove();
        app
    }

    #[test]
    fn y_removes_the_pending_task_and_clamps_cursor() {
        let mut app = confirming_app();
        press(&mut app, KeyCode::Char('y'));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tasks()[0].title, "one");
        assert_eq!(app.cursor, 0);
        assert!(app.confirm.is_none());
    }

    #[test]
    fn n_cancels_with_no_state_change() {
        let mut app = confirming_app();
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.len(), 2);
        assert!(app.confirm.is_none());
    }

    #[test]
    fn esc_dismisses_like_cancel() {
        let mut app = confirming_app();
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.store.len(), 2);
        assert!(app.confirm.is_none());
    }

    #[test]
    fn other_keys_leave_the_dialog_open() {
        let mut app = confirming_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.mode, Mode::Confirm);
        assert_eq!(app.store.len(), 2);
    }
}
