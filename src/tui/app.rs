use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::config::AppConfig;
use crate::model::task::{Task, TaskId};
use crate::store::TaskStore;
use crate::util::unicode;

use super::editor::ItemEditor;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving the selection through the list
    Navigate,
    /// Typing a new task title into the entry row
    Insert,
    /// Editing the selected task's title inline
    Edit,
    /// Delete confirmation pending
    Confirm,
}

/// Pending action behind the confirmation popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveTask { task_id: TaskId },
}

/// A single-acknowledgment alert popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub body: &'static str,
}

impl Alert {
    /// Shown when `add` rejects a duplicate title.
    pub fn duplicate_title() -> Self {
        Alert {
            title: "Task already exists",
            body: "You cannot add a task with the same title.",
        }
    }
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Selection index into the task list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// New-task draft (entry row)
    pub entry_draft: String,
    /// Byte offset into `entry_draft`, on a grapheme boundary
    pub entry_cursor: usize,
    /// Inline editor for the task being edited
    pub editor: ItemEditor,
    /// Which task the editor is bound to
    pub edit_target: Option<TaskId>,
    /// Pending confirmation, when in Confirm mode
    pub confirm: Option<ConfirmAction>,
    /// Modal alert; intercepts all input while present
    pub alert: Option<Alert>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            store: TaskStore::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            entry_draft: String::new(),
            entry_cursor: 0,
            editor: ItemEditor::default(),
            edit_target: None,
            confirm: None,
            alert: None,
        }
    }

    /// The task under the selection cursor
    pub fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.cursor)
    }

    /// Keep the cursor inside the list after removals
    pub fn clamp_cursor(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(len - 1);
        }
    }

    // --- Item editor transitions ---

    /// Begin editing the selected task. The terminal cursor moves into the
    /// row's text field on the next draw.
    pub fn start_edit(&mut self) {
        let (id, title) = match self.selected_task() {
            Some(task) => (task.id, task.title.clone()),
            None => return,
        };
        self.editor.start(&title);
        self.edit_target = Some(id);
        self.mode = Mode::Edit;
    }

    /// Commit the draft to the store and leave Edit mode. Focus is
    /// released whether or not the title actually changed.
    pub fn commit_edit(&mut self) {
        if let (Some(id), Some(draft)) = (self.edit_target.take(), self.editor.commit()) {
            self.store.edit(id, &draft);
        }
        self.mode = Mode::Navigate;
    }

    /// Discard the draft and leave Edit mode.
    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
        self.edit_target = None;
        self.mode = Mode::Navigate;
    }

    // --- Entry row (new-task input) ---

    /// Submit the entry draft as a new task. An empty draft is ignored; a
    /// duplicate title opens the alert. The draft is cleared afterward
    /// either way.
    pub fn submit_entry(&mut self) {
        if self.entry_draft.is_empty() {
            return;
        }
        if self.store.add(&self.entry_draft).is_err() {
            self.alert = Some(Alert::duplicate_title());
        }
        self.entry_draft.clear();
        self.entry_cursor = 0;
    }

    pub fn entry_insert_char(&mut self, c: char) {
        self.entry_draft.insert(self.entry_cursor, c);
        self.entry_cursor += c.len_utf8();
    }

    pub fn entry_backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.entry_draft, self.entry_cursor) {
            self.entry_draft.drain(prev..self.entry_cursor);
            self.entry_cursor = prev;
        }
    }

    pub fn entry_move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.entry_draft, self.entry_cursor) {
            self.entry_cursor = prev;
        }
    }

    pub fn entry_move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.entry_draft, self.entry_cursor) {
            self.entry_cursor = next;
        }
    }

    // --- Removal ---

    /// Ask for confirmation before removing the selected task.
    /// Unavailable while editing (the row's delete affordance is dimmed).
    pub fn request_remove(&mut self) {
        let id = match self.selected_task() {
            Some(task) => task.id,
            None => return,
        };
        self.confirm = Some(ConfirmAction::RemoveTask { task_id: id });
        self.mode = Mode::Confirm;
    }
}

/// Run the TUI application
pub fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
