use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tasklist_core::{TaskError, TaskResult};
use uuid::Uuid;

pub type TaskId = String;

/// Format produced by date pickers and accepted on input.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One to-do item as stored in the task slot.
///
/// Field names on disk are `id`, `text`, `dueDate` and `completed`. An absent
/// due date is stored as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Builds a new, not yet completed task.
    ///
    /// The text is trimmed and must not be empty. A non-empty due date must
    /// parse as `YYYY-MM-DD`.
    pub fn new(id: TaskId, text: &str, due_date: &str) -> TaskResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::Validation(
                "Please write a task description".to_string(),
            ));
        }
        let due_date = due_date.trim();
        if !due_date.is_empty() && parse_due_date(due_date).is_none() {
            return Err(TaskError::Validation(format!(
                "Invalid due date '{}', expected YYYY-MM-DD",
                due_date
            )));
        }
        Ok(Self {
            id,
            text: text.to_string(),
            due_date: due_date.to_string(),
            completed: false,
        })
    }

    /// Parsed due date, `None` when empty or unreadable.
    pub fn due(&self) -> Option<NaiveDate> {
        parse_due_date(&self.due_date)
    }

    pub fn has_due_date(&self) -> bool {
        !self.due_date.trim().is_empty()
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Random identifier for a newly created task.
pub fn new_task_id() -> TaskId {
    Uuid::new_v4().to_string()
}

/// Timestamp-derived identifier, milliseconds since the Unix epoch.
pub fn timestamp_task_id(now: DateTime<Utc>) -> TaskId {
    now.timestamp_millis().to_string()
}

fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
