//! Run outcome models

use crate::core::{CheckKind, CheckStep};
use thiserror::Error;

/// Exit status used when a step could not be started (shell convention)
pub const EXIT_SPAWN_FAILED: i32 = 127;

/// Exit status used when a step's program exists but may not be executed
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Exit status used when a step exceeded its timeout (matches `timeout(1)`)
pub const EXIT_TIMED_OUT: i32 = 124;

/// Offset added to a terminating signal number (shell convention)
pub const EXIT_SIGNAL_BASE: i32 = 128;

/// Why a step did not pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("exited with status {0}")]
    Exited(i32),

    #[error("terminated by signal {0}")]
    Signaled(i32),

    #[error("could not be started: {0}")]
    SpawnFailed(String),

    #[error("is not executable: {0}")]
    NotExecutable(String),

    #[error("timed out after {0} seconds")]
    TimedOut(u64),
}

impl FailureReason {
    /// Process exit status to propagate for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            FailureReason::Exited(code) => *code,
            FailureReason::Signaled(signal) => EXIT_SIGNAL_BASE + signal,
            FailureReason::SpawnFailed(_) => EXIT_SPAWN_FAILED,
            FailureReason::NotExecutable(_) => EXIT_NOT_EXECUTABLE,
            FailureReason::TimedOut(_) => EXIT_TIMED_OUT,
        }
    }
}

/// The first step that did not pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("step {position} ({step_id}) failed: {reason}")]
pub struct StepFailure {
    /// 1-indexed position of the step in the pipeline
    pub position: usize,

    pub step_id: String,

    pub kind: CheckKind,

    /// The command line as it was traced
    pub command_line: String,

    pub reason: FailureReason,
}

impl StepFailure {
    pub fn new(position: usize, step: &CheckStep, reason: FailureReason) -> Self {
        Self {
            position,
            step_id: step.id.clone(),
            kind: step.kind,
            command_line: step.command_line(),
            reason,
        }
    }
}

/// Outcome of running a whole pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    /// Every step exited successfully
    Passed { steps_run: usize },
    /// Execution stopped at the first failing step
    Failed(StepFailure),
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RunResult::Passed { .. })
    }

    pub fn failure(&self) -> Option<&StepFailure> {
        match self {
            RunResult::Passed { .. } => None,
            RunResult::Failed(failure) => Some(failure),
        }
    }

    /// Overall process exit status: 0 on success, otherwise the failing step's
    pub fn exit_code(&self) -> i32 {
        match self {
            RunResult::Passed { .. } => 0,
            RunResult::Failed(failure) => failure.reason.exit_code(),
        }
    }

    /// Number of steps that were actually started
    pub fn steps_run(&self) -> usize {
        match self {
            RunResult::Passed { steps_run } => *steps_run,
            RunResult::Failed(failure) => failure.position,
        }
    }
}
