//! check-pipeline - format, wasm build and lint gate for a Cargo workspace

pub mod cli;
pub mod core;
pub mod execution;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{CheckKind, CheckStep, FailureReason, Pipeline, RunResult, StepFailure};
pub use crate::execution::{ExecutionEngine, ExecutionEvent};
pub use crate::runner::{CommandRunner, ExitOutcome, ProcessRunner, RunnerError};
