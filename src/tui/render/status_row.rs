use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): per-mode key hints.
/// The delete hint disappears while editing, matching the disabled
/// delete affordance.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if !app.show_key_hints {
        let blank = Paragraph::new(Line::from(Span::styled(
            " ".repeat(area.width as usize),
            Style::default().bg(bg),
        )));
        frame.render_widget(blank, area);
        return;
    }

    let hint = match app.mode {
        Mode::Navigate => " j/k move  a add  Enter edit  Space done  d delete  q quit",
        Mode::Insert => " Enter add  Esc back",
        Mode::Edit => " Enter save  Esc cancel",
        Mode::Confirm => " y remove  n cancel",
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(app.theme.dim).bg(bg),
    )))
    .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
