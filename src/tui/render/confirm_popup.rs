use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, ConfirmAction};
use crate::util::unicode;

use super::helpers::centered_rect_fixed;

/// Render the delete confirmation popup (two choices: cancel / remove)
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ConfirmAction::RemoveTask { task_id }) = &app.confirm else {
        return;
    };
    let title = app
        .store
        .get(*task_id)
        .map(|t| t.title.as_str())
        .unwrap_or("");

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.danger)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let quoted = format!(
        "  \"{}\"",
        unicode::truncate_to_width(title, popup_w.saturating_sub(6) as usize)
    );

    let lines = vec![
        Line::from(Span::styled(" Remove task", header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(quoted, bright_style)),
        Line::from(Span::styled(
            "  Are you sure you want to remove it?",
            text_style,
        )),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("y", dim_style),
            Span::styled(" remove  ", text_style),
            Span::styled("n", dim_style),
            Span::styled(" cancel", text_style),
        ]),
    ];

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.danger).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}
