use chrono::Local;

use crate::model::task::{Task, TaskId};

/// Rejection raised by [`TaskStore::add`].
#[derive(Debug, thiserror::Error)]
pub enum AddError {
    #[error("a task titled \"{0}\" already exists")]
    DuplicateTitle(String),
}

/// The authoritative in-memory holder of the ordered task sequence.
///
/// All mutation goes through the four operations below. Each accepted
/// mutation builds a fresh sequence and swaps it in, then bumps the
/// generation counter; rejected or no-op calls leave both untouched, so
/// observers can detect change by comparing generations.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    generation: u64,
    last_id: TaskId,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// The current ordered task sequence.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Bumped once per accepted mutation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Append a new open task with a fresh id.
    ///
    /// Rejected without any state change when an existing task's title
    /// exactly equals `title`. Titles are taken as-is; no trimming.
    pub fn add(&mut self, title: &str) -> Result<TaskId, AddError> {
        if self.tasks.iter().any(|t| t.title == title) {
            return Err(AddError::DuplicateTitle(title.to_string()));
        }
        let id = self.next_id();
        let mut next = self.tasks.clone();
        next.push(Task::new(id, title));
        self.replace(next);
        Ok(id)
    }

    /// Replace the matching task's title. Missing id is a silent no-op;
    /// `done` and `id` are untouched. Editing into a title collision with
    /// another task is not checked (only `add` checks).
    pub fn edit(&mut self, id: TaskId, new_title: &str) {
        if self.get(id).is_none() {
            return;
        }
        let next = self
            .tasks
            .iter()
            .cloned()
            .map(|mut task| {
                if task.id == id {
                    task.title = new_title.to_string();
                }
                task
            })
            .collect();
        self.replace(next);
    }

    /// Flip the matching task's completion flag. Missing id is a silent no-op.
    pub fn toggle_done(&mut self, id: TaskId) {
        if self.get(id).is_none() {
            return;
        }
        let next = self
            .tasks
            .iter()
            .cloned()
            .map(|mut task| {
                if task.id == id {
                    task.done = !task.done;
                }
                task
            })
            .collect();
        self.replace(next);
    }

    /// Exclude the matching task, preserving the order of the rest.
    /// Missing id is a silent no-op. Confirmation is the caller's job;
    /// by the time this runs the user already said yes.
    pub fn remove(&mut self, id: TaskId) {
        if self.get(id).is_none() {
            return;
        }
        let next = self
            .tasks
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        self.replace(next);
    }

    fn replace(&mut self, next: Vec<Task>) {
        self.tasks = next;
        self.generation += 1;
    }

    /// Fresh id from the wall clock in milliseconds, nudged forward when
    /// the clock hasn't advanced since the last one.
    fn next_id(&mut self) -> TaskId {
        let now = Local::now().timestamp_millis();
        let id = if now > self.last_id {
            now
        } else {
            self.last_id + 1
        };
        self.last_id = id;
        id
    }
}
