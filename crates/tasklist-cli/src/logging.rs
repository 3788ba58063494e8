use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Where log output goes for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// `TASKLIST_DEBUG_LOG`: everything at DEBUG with source locations.
    DebugFile(PathBuf),
    /// WARN and above to a file while the TUI owns the terminal.
    File(PathBuf),
    /// WARN and above to stderr, for scripted subcommands.
    Stderr,
    /// No subscriber at all.
    Discard,
}

/// The terminal UI never gets a stderr writer: anything printed there lands
/// inside the alternate screen.
pub fn choose_target(
    interactive: bool,
    debug_log: Option<PathBuf>,
    tui_log: Option<PathBuf>,
) -> LogTarget {
    match (debug_log, interactive) {
        (Some(path), _) => LogTarget::DebugFile(path),
        (None, true) => tui_log.map(LogTarget::File).unwrap_or(LogTarget::Discard),
        (None, false) => LogTarget::Stderr,
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn open_append(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

pub fn init(target: LogTarget) -> anyhow::Result<()> {
    match target {
        LogTarget::DebugFile(path) => {
            let log_file = open_append(&path)?;
            tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_max_level(tracing::Level::DEBUG)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .init();
        }
        LogTarget::File(path) => {
            // An unwritable log location must not stop the UI from starting
            if let Ok(log_file) = open_append(&path) {
                tracing_subscriber::fmt()
                    .with_writer(log_file)
                    .with_env_filter(env_filter())
                    .with_ansi(false)
                    .init();
            }
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::Discard => {}
    }
    Ok(())
}
