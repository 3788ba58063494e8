pub mod commands;
pub mod filter;
pub mod sort;
pub mod task;
pub mod view;

pub use filter::TaskFilter;
pub use sort::{DueDateSorter, SortDirection};
pub use task::{new_task_id, timestamp_task_id, Task, TaskId};
pub use view::{project, TaskRow, ViewAction, ViewState};
