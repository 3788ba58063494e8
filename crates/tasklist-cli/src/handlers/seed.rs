use crate::context::CliContext;
use crate::output;
use tasklist_core::{SeedConfig, TaskError, TaskResult};
use tasklist_persistence::{seed_if_empty, HttpSeedSource, SeedOutcome};

/// Runs the seed on request. `seed.enabled` only governs the automatic run
/// at TUI startup, so it is not consulted here.
pub async fn handle(ctx: &CliContext, config: &SeedConfig) -> TaskResult<()> {
    let source = HttpSeedSource::from_config(config);

    match seed_if_empty(ctx.store(), &source).await {
        SeedOutcome::Seeded(count) => {
            output::output_success(serde_json::json!({ "status": "seeded", "count": count }));
            Ok(())
        }
        SeedOutcome::Skipped => {
            output::output_success(serde_json::json!({ "status": "skipped", "count": 0 }));
            Ok(())
        }
        SeedOutcome::Failed(reason) => Err(TaskError::Seed(reason)),
    }
}
