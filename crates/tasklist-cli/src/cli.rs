use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklist_domain::{SortDirection, TaskFilter};

#[derive(Parser)]
#[command(name = "tasks")]
#[command(about = "A terminal task list with due dates", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to the task data file (or set TASKLIST_FILE env var)
    #[arg(value_name = "FILE", env = "TASKLIST_FILE")]
    pub file: Option<PathBuf>,

    /// Skip fetching starter tasks when the list is empty
    #[arg(long)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add {
        #[arg(long)]
        text: String,
        /// Due date as YYYY-MM-DD
        #[arg(long, default_value = "")]
        due: String,
    },
    /// List tasks
    List {
        #[arg(long, default_value = "all")]
        filter: TaskFilter,
        #[arg(long, default_value = "asc")]
        sort: SortDirection,
    },
    /// Flip a task between active and completed
    Toggle {
        #[arg(long)]
        id: String,
    },
    /// Mark a task completed
    Complete {
        #[arg(long)]
        id: String,
    },
    /// Mark a task active again
    Reopen {
        #[arg(long)]
        id: String,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Fetch starter tasks if the list is empty
    Seed,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
