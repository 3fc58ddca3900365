//! Subprocess runner - executes steps as child processes

use crate::core::CheckStep;
use crate::runner::{CommandRunner, ExitOutcome, RunnerError};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Runs each step as a child process with inherited stdio, cwd and environment
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    /// Spawn `step.command` with `step.args` and wait for it to exit.
    ///
    /// The child is killed if this future is dropped before it exits, which
    /// is how a step timeout takes effect.
    ///
    /// # Errors
    /// Returns `RunnerError` if:
    /// - The program cannot be spawned
    /// - Waiting on the child fails
    async fn run(&self, step: &CheckStep) -> Result<ExitOutcome, RunnerError> {
        debug!("Spawning {} with {} args", step.command, step.args.len());

        let mut child = Command::new(&step.command)
            .args(&step.args)
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunnerError::Spawn {
                command: step.command.clone(),
                source,
            })?;

        let status = child.wait().await.map_err(|source| RunnerError::Wait {
            command: step.command.clone(),
            source,
        })?;

        let outcome = ExitOutcome::from(status);
        if !outcome.success() {
            debug!("{} ended with {:?}", step.command, outcome);
        }

        Ok(outcome)
    }
}
