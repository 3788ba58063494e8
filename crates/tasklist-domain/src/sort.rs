//! Task sorting by due date.
//!
//! A missing or unreadable due date sorts as if it were infinitely far in
//! the future. Ties keep their original relative order.

use crate::Task;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tasklist_core::TaskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("asc"),
            Self::Descending => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(TaskError::Validation(format!(
                "Unknown sort direction '{}', expected asc or desc",
                other
            ))),
        }
    }
}

/// Compares two tasks by due date, ascending, absent dates last.
pub fn compare_due(a: &Task, b: &Task) -> Ordering {
    match (a.due(), b.due()) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub struct DueDateSorter {
    direction: SortDirection,
}

impl DueDateSorter {
    pub fn new(direction: SortDirection) -> Self {
        Self { direction }
    }

    /// Sort a slice in place. Works with both `&Task` and `Task` elements.
    pub fn sort<T: Borrow<Task>>(&self, tasks: &mut [T]) {
        tasks.sort_by(|a, b| {
            let cmp = compare_due(a.borrow(), b.borrow());
            match self.direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
    }
}
