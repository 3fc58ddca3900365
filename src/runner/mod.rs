//! Command runners for executing check steps

pub mod error;
pub mod process;

use crate::core::CheckStep;
use async_trait::async_trait;
use std::process::ExitStatus;

pub use error::RunnerError;
pub use process::ProcessRunner;

/// How a step's process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Exited normally with this status code
    Code(i32),
    /// Killed by this signal number
    Signal(i32),
}

impl ExitOutcome {
    pub fn success(&self) -> bool {
        matches!(self, ExitOutcome::Code(0))
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExitOutcome::Code(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExitOutcome::Signal(signal);
            }
        }

        ExitOutcome::Code(1)
    }
}

/// Trait for step execution - allows substituting the OS process layer
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the step to completion and report how it ended
    async fn run(&self, step: &CheckStep) -> Result<ExitOutcome, RunnerError>;
}

#[async_trait]
impl<R: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<R> {
    async fn run(&self, step: &CheckStep) -> Result<ExitOutcome, RunnerError> {
        (**self).run(step).await
    }
}
