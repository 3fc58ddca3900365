//! Step executor - runs individual steps with the command runner

use crate::{
    core::{CheckStep, FailureReason},
    runner::{CommandRunner, ExitOutcome, RunnerError},
};
use tokio::time::{timeout, Duration};
use tracing::{debug, error, info};

/// Result of executing a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Step exited with status 0
    Passed,
    /// Step did not pass
    Failed(FailureReason),
}

/// Executes a single step
pub struct StepExecutor<R> {
    runner: R,
}

impl<R: CommandRunner> StepExecutor<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Execute a step and return the result
    pub async fn execute(&self, step: &CheckStep) -> ExecutionResult {
        info!("Executing step: {}", step.id);

        let outcome = match step.timeout_secs {
            Some(secs) => match timeout(Duration::from_secs(secs), self.runner.run(step)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    error!("Timeout for step {} after {}s", step.id, secs);
                    return ExecutionResult::Failed(FailureReason::TimedOut(secs));
                }
            },
            None => self.runner.run(step).await,
        };

        match outcome {
            Ok(ExitOutcome::Code(0)) => {
                debug!("Step {} passed", step.id);
                ExecutionResult::Passed
            }
            Ok(ExitOutcome::Code(code)) => {
                info!("Step {} exited with status {}", step.id, code);
                ExecutionResult::Failed(FailureReason::Exited(code))
            }
            Ok(ExitOutcome::Signal(signal)) => {
                error!("Step {} terminated by signal {}", step.id, signal);
                ExecutionResult::Failed(FailureReason::Signaled(signal))
            }
            Err(e) => {
                error!("Runner error for step {}: {}", step.id, e);
                let reason = match &e {
                    RunnerError::Spawn { source, .. }
                        if source.kind() == std::io::ErrorKind::PermissionDenied =>
                    {
                        FailureReason::NotExecutable(e.to_string())
                    }
                    RunnerError::Spawn { .. } => FailureReason::SpawnFailed(e.to_string()),
                    // The child was started, so there is no status to propagate
                    RunnerError::Wait { .. } => FailureReason::Exited(1),
                };
                ExecutionResult::Failed(reason)
            }
        }
    }
}
