//! View state and the pure projection used for rendering.
//!
//! The active filter and sort direction live in an immutable [`ViewState`]
//! that only changes through [`ViewState::apply`]. It is never persisted.

use crate::{DueDateSorter, SortDirection, Task, TaskFilter, TaskId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub filter: TaskFilter,
    pub sort: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    SelectFilter(TaskFilter),
    ToggleSort,
}

impl ViewState {
    pub fn new(filter: TaskFilter, sort: SortDirection) -> Self {
        Self { filter, sort }
    }

    #[must_use]
    pub fn apply(self, action: ViewAction) -> Self {
        match action {
            ViewAction::SelectFilter(filter) => Self { filter, ..self },
            ViewAction::ToggleSort => Self {
                sort: self.sort.toggled(),
                ..self
            },
        }
    }
}

/// One displayed line of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub due_label: String,
    pub completed: bool,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        let due_label = if task.has_due_date() {
            format!(" • due: {}", task.due_date)
        } else {
            String::new()
        };
        Self {
            id: task.id.clone(),
            text: task.text.clone(),
            due_label,
            completed: task.completed,
        }
    }
}

/// Filters, sorts and maps tasks into display rows.
pub fn project(tasks: &[Task], view: ViewState) -> Vec<TaskRow> {
    let mut visible = view.filter.apply(tasks);
    DueDateSorter::new(view.sort).sort(&mut visible);
    visible.into_iter().map(TaskRow::from_task).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_is_pure() {
        let initial = ViewState::default();
        let filtered = initial.apply(ViewAction::SelectFilter(TaskFilter::Completed));
        let sorted = filtered.apply(ViewAction::ToggleSort);

        assert_eq!(initial, ViewState::default());
        assert_eq!(filtered.filter, TaskFilter::Completed);
        assert_eq!(filtered.sort, SortDirection::Ascending);
        assert_eq!(sorted.sort, SortDirection::Descending);
        assert_eq!(sorted.filter, TaskFilter::Completed);
    }

    #[test]
    fn test_project_orders_and_labels() {
        let a = Task::new("a".to_string(), "A", "2024-01-05").unwrap();
        let b = Task::new("b".to_string(), "B", "2024-01-01").unwrap();
        let c = Task::new("c".to_string(), "C", "").unwrap();

        let rows = project(&[a, b, c], ViewState::default());
        let texts: Vec<_> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["B", "A", "C"]);
        assert_eq!(rows[0].due_label, " • due: 2024-01-01");
        assert_eq!(rows[2].due_label, "");
    }

    #[test]
    fn test_project_filters_before_sorting() {
        let mut done = Task::new("d".to_string(), "Done", "2024-01-01").unwrap();
        done.completed = true;
        let open = Task::new("o".to_string(), "Open", "").unwrap();

        let view = ViewState::new(TaskFilter::Active, SortDirection::Descending);
        let rows = project(&[done, open], view);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "o");
    }
}
