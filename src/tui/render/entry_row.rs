use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

const PROMPT: &str = " + ";
const PLACEHOLDER: &str = "Add a task\u{2026}";

/// Render the new-task entry row. While in Insert mode the terminal
/// cursor sits inside the field (the focus effect).
pub fn render_entry_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Insert;

    let prompt_style = if focused {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let mut spans = vec![Span::styled(PROMPT, prompt_style)];
    if app.entry_draft.is_empty() && !focused {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            app.entry_draft.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if focused {
        let col = unicode::byte_offset_to_display_col(&app.entry_draft, app.entry_cursor);
        let x = area.x + (unicode::display_width(PROMPT) + col) as u16;
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(1)), area.y));
    }
}
