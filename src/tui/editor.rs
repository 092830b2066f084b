use crate::util::unicode;

/// Inline title editor for a single task row.
///
/// A two-state machine: `Viewing` (the row is read-only) and `Editing`
/// (the row shows a mutable draft with its own cursor). The draft starts
/// as a copy of the task's title; cancel throws it away, commit hands it
/// back to the caller. The store is never touched from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEditor {
    Viewing,
    Editing {
        draft: String,
        /// Byte offset into `draft`, always on a grapheme boundary.
        cursor: usize,
    },
}

impl Default for ItemEditor {
    fn default() -> Self {
        ItemEditor::Viewing
    }
}

impl ItemEditor {
    pub fn is_editing(&self) -> bool {
        matches!(self, ItemEditor::Editing { .. })
    }

    /// Viewing → Editing. The draft is initialized to the task's current
    /// title with the cursor at the end. Already editing: no-op.
    pub fn start(&mut self, title: &str) {
        if self.is_editing() {
            return;
        }
        *self = ItemEditor::Editing {
            cursor: title.len(),
            draft: title.to_string(),
        };
    }

    /// Editing → Viewing, discarding the draft.
    pub fn cancel(&mut self) {
        *self = ItemEditor::Viewing;
    }

    /// Editing → Viewing, returning the draft for the caller to commit.
    /// Returns None when not editing.
    pub fn commit(&mut self) -> Option<String> {
        match std::mem::take(self) {
            ItemEditor::Editing { draft, .. } => Some(draft),
            ItemEditor::Viewing => None,
        }
    }

    /// The draft text, when editing.
    pub fn draft(&self) -> Option<&str> {
        match self {
            ItemEditor::Editing { draft, .. } => Some(draft),
            ItemEditor::Viewing => None,
        }
    }

    /// Draft cursor as a display column, for placing the terminal cursor.
    pub fn cursor_col(&self) -> Option<usize> {
        match self {
            ItemEditor::Editing { draft, cursor } => {
                Some(unicode::byte_offset_to_display_col(draft, *cursor))
            }
            ItemEditor::Viewing => None,
        }
    }

    // --- draft text operations (Editing only) ---

    pub fn insert_char(&mut self, c: char) {
        if let ItemEditor::Editing { draft, cursor } = self {
            draft.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if let ItemEditor::Editing { draft, cursor } = self
            && let Some(prev) = unicode::prev_grapheme_boundary(draft, *cursor)
        {
            draft.drain(prev..*cursor);
            *cursor = prev;
        }
    }

    /// Delete the grapheme under the cursor.
    pub fn delete_forward(&mut self) {
        if let ItemEditor::Editing { draft, cursor } = self
            && *cursor < draft.len()
        {
            let end = unicode::next_grapheme_boundary(draft, *cursor).unwrap_or(draft.len());
            draft.drain(*cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        if let ItemEditor::Editing { draft, cursor } = self
            && let Some(prev) = unicode::prev_grapheme_boundary(draft, *cursor)
        {
            *cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let ItemEditor::Editing { draft, cursor } = self
            && let Some(next) = unicode::next_grapheme_boundary(draft, *cursor)
        {
            *cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        if let ItemEditor::Editing { cursor, .. } = self {
            *cursor = 0;
        }
    }

    pub fn move_end(&mut self) {
        if let ItemEditor::Editing { draft, cursor } = self {
            *cursor = draft.len();
        }
    }
}
