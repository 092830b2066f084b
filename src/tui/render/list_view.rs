use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::checkbox_symbol;

const INDENT: &str = " ";
const GAP: &str = " ";

/// Render the task list in store order, one row per task, windowed by
/// the scroll offset which follows the selection cursor.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            " No tasks yet. Press a to add one.",
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(hint, area);
        return;
    }

    let height = area.height as usize;
    ensure_cursor_visible(app, height);

    let selected_bg = app.theme.selection_bg;
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_position: Option<Position> = None;

    let end = (app.scroll_offset + height).min(app.store.len());
    for idx in app.scroll_offset..end {
        let task = &app.store.tasks()[idx];
        let is_selected = idx == app.cursor && app.mode != Mode::Insert;
        let is_editing = app.edit_target == Some(task.id) && app.editor.is_editing();
        let row_bg = if is_selected { selected_bg } else { bg };

        let checkbox_fg = if task.done {
            app.theme.done
        } else {
            app.theme.dim
        };
        let mut spans = vec![
            Span::styled(INDENT, Style::default().bg(row_bg)),
            Span::styled(
                checkbox_symbol(task),
                Style::default().fg(checkbox_fg).bg(row_bg),
            ),
            Span::styled(GAP, Style::default().bg(row_bg)),
        ];

        let text_budget = (area.width as usize)
            .saturating_sub(unicode::display_width(INDENT) + 3 + unicode::display_width(GAP));

        if is_editing {
            // The row shows the mutable draft; the terminal cursor moves
            // into the field below.
            let draft = app.editor.draft().unwrap_or("");
            spans.push(Span::styled(
                unicode::truncate_to_width(draft, text_budget),
                Style::default().fg(app.theme.text_bright).bg(row_bg),
            ));
            let col = app.editor.cursor_col().unwrap_or(0);
            let x = area.x
                + (unicode::display_width(INDENT) + 3 + unicode::display_width(GAP) + col) as u16;
            let y = area.y + (idx - app.scroll_offset) as u16;
            cursor_position = Some(Position::new(x.min(area.right().saturating_sub(1)), y));
        } else {
            let mut style = Style::default().bg(row_bg);
            style = if task.done {
                style.fg(app.theme.done).add_modifier(Modifier::CROSSED_OUT)
            } else if is_selected {
                style.fg(app.theme.text_bright)
            } else {
                style.fg(app.theme.text)
            };
            spans.push(Span::styled(
                unicode::truncate_to_width(&task.title, text_budget),
                style,
            ));
        }

        // Pad the selection highlight to the full row width
        if is_selected {
            let used: usize = spans
                .iter()
                .map(|s| unicode::display_width(&s.content))
                .sum();
            if used < area.width as usize {
                spans.push(Span::styled(
                    " ".repeat(area.width as usize - used),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if let Some(pos) = cursor_position {
        frame.set_cursor_position(pos);
    }
}

/// Keep the selected row inside the visible window
fn ensure_cursor_visible(app: &mut App, height: usize) {
    if height == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
    // Shrink the window after removals
    let max_offset = app.store.len().saturating_sub(height);
    app.scroll_offset = app.scroll_offset.min(max_offset);
}
