use crate::context::CliContext;
use crate::output;
use tasklist_core::{TaskError, TaskResult};
use tasklist_domain::commands::{AddTask, Command, DeleteTask, SetTaskCompletion, ToggleTask};
use tasklist_domain::{DueDateSorter, SortDirection, Task, TaskFilter};

pub async fn add(ctx: &CliContext, text: String, due: String) -> TaskResult<()> {
    let tasks = ctx.execute(&AddTask::new(text, due)).await?;
    // AddTask appends, so the new task is last
    let task = tasks
        .last()
        .ok_or_else(|| TaskError::NotFound("added task".to_string()))?;
    output::output_success(task);
    Ok(())
}

pub async fn list(ctx: &CliContext, filter: TaskFilter, sort: SortDirection) -> TaskResult<()> {
    let tasks = ctx.tasks().await;
    let mut visible = filter.apply(&tasks);
    DueDateSorter::new(sort).sort(&mut visible);
    output::output_list(visible);
    Ok(())
}

pub async fn toggle(ctx: &CliContext, id: String) -> TaskResult<()> {
    ctx.require(&id).await?;
    update(ctx, &ToggleTask { id: id.clone() }, &id).await
}

pub async fn set_completed(ctx: &CliContext, id: String, completed: bool) -> TaskResult<()> {
    ctx.require(&id).await?;
    update(ctx, &SetTaskCompletion { id: id.clone(), completed }, &id).await
}

pub async fn delete(ctx: &CliContext, id: String) -> TaskResult<()> {
    ctx.require(&id).await?;
    ctx.execute(&DeleteTask { id: id.clone() }).await?;
    output::output_success(serde_json::json!({ "deleted": id }));
    Ok(())
}

async fn update(ctx: &CliContext, command: &dyn Command, id: &str) -> TaskResult<()> {
    let tasks = ctx.execute(command).await?;
    let task = find(tasks, id)?;
    output::output_success(&task);
    Ok(())
}

fn find(tasks: Vec<Task>, id: &str) -> TaskResult<Task> {
    tasks
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| TaskError::NotFound(format!("task {}", id)))
}
