/// Unique task identifier, assigned once at creation.
///
/// Derived from the wall clock in milliseconds, nudged forward when the
/// clock does not advance between creations, so ids never repeat within
/// a session.
pub type TaskId = i64;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Immutable identifier.
    pub id: TaskId,
    /// Display title. Never reordered, duplicates rejected at add time.
    pub title: String,
    /// Completion flag.
    pub done: bool,
}

impl Task {
    /// Create a new open task with the given id and title.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_open() {
        let task = Task::new(42, "Buy milk");
        assert_eq!(task.id, 42);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
    }
}
