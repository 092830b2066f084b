pub mod alert_popup;
pub mod confirm_popup;
pub mod entry_row;
pub mod header;
pub mod helpers;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | entry row | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + blank
            Constraint::Length(1), // new-task entry row
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    entry_row::render_entry_row(frame, app, chunks[1]);
    list_view::render_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Popups are drawn on top of everything
    if app.confirm.is_some() {
        confirm_popup::render_confirm_popup(frame, app, frame.area());
    }
    if app.alert.is_some() {
        alert_popup::render_alert_popup(frame, app, frame.area());
    }
}
