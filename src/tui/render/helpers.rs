use ratatui::layout::Rect;

use crate::model::task::Task;

/// Checkbox for a task row
pub(super) fn checkbox_symbol(task: &Task) -> &'static str {
    if task.done { "[x]" } else { "[ ]" }
}

/// Pluralized task counter for the header
pub(super) fn counter_text(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", count)
    }
}

/// A fixed-size rect centered inside `area`
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}
