use super::{Filter, Task, TaskId};

/// Widget state: ordered tasks, the pending input text and the active filter.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    tasks: Vec<Task>,
    draft: String,
    filter: Filter,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a specific filter selected
    pub fn with_filter(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    // Draft text

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn push_draft_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop_draft_char(&mut self) {
        self.draft.pop();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    // Transitions

    /// Submit the draft as a new task.
    ///
    /// A draft that is empty after trimming is left untouched and nothing is
    /// created. Otherwise the trimmed text is appended as an active task and
    /// the draft is cleared.
    pub fn add_task(&mut self) -> Option<TaskId> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }

        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, text.to_string()));
        self.draft.clear();
        Some(id)
    }

    /// Flip the completion flag of the task with `id`. Returns false if no task matched.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// Remove every completed task, keeping the survivors in order. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_completed());
        before - self.tasks.len()
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    // Derived views

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks passing the current filter, in insertion order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| self.filter.matches(task)).collect()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_completed()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Footer text, e.g. "1 item left" or "3 items left"
    pub fn items_left_label(&self) -> String {
        let count = self.active_count();
        let noun = if count == 1 { "item" } else { "items" };
        format!("{} {} left", count, noun)
    }
}
