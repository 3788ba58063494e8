mod cli;
mod context;
mod handlers;
mod logging;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use std::path::PathBuf;
use std::sync::Arc;
use tasklist_core::{AppConfig, TaskResult};
use tasklist_persistence::{HttpSeedSource, JsonFileStore};
use tasklist_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::choose_target(
        cli.command.is_none(),
        std::env::var_os("TASKLIST_DEBUG_LOG").map(PathBuf::from),
        AppConfig::tui_log_file(),
    ))?;

    let config = AppConfig::load();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "tasks", &mut std::io::stdout());
        }
        None => {
            let path = config.resolve_data_file(cli.file.as_deref());
            tracing::info!("Opening task list at {}", path.display());

            let mut app = App::new(Arc::new(JsonFileStore::new(&path)));
            if config.seed.enabled && !cli.no_seed {
                app.start_seed(Arc::new(HttpSeedSource::from_config(&config.seed)));
            }
            app.run().await?;
        }
        Some(cmd) => {
            let path = config.resolve_data_file(cli.file.as_deref());
            let ctx = CliContext::open(&path);

            if let Err(e) = run_command(&ctx, &config, cmd).await {
                tracing::debug!("Command failed: {}", e);
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}

async fn run_command(ctx: &CliContext, config: &AppConfig, cmd: Commands) -> TaskResult<()> {
    match cmd {
        Commands::Add { text, due } => handlers::task::add(ctx, text, due).await,
        Commands::List { filter, sort } => handlers::task::list(ctx, filter, sort).await,
        Commands::Toggle { id } => handlers::task::toggle(ctx, id).await,
        Commands::Complete { id } => handlers::task::set_completed(ctx, id, true).await,
        Commands::Reopen { id } => handlers::task::set_completed(ctx, id, false).await,
        Commands::Delete { id } => handlers::task::delete(ctx, id).await,
        Commands::Seed => handlers::seed::handle(ctx, &config.seed).await,
        Commands::Completions { .. } => Ok(()),
    }
}
