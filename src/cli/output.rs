//! CLI output formatting

use crate::execution::ExecutionEvent;
use console::Emoji;
use std::time::Duration;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Format an execution event for display, or `None` for events that only
/// the trace line covers
pub fn format_execution_event(event: &ExecutionEvent) -> Option<String> {
    match event {
        ExecutionEvent::PipelineStarted {
            pipeline_name,
            total_steps,
        } => Some(format!(
            "{}{} ({} checks)",
            ROCKET,
            style(pipeline_name).bold(),
            total_steps
        )),
        ExecutionEvent::StepStarted { .. } => None,
        ExecutionEvent::StepPassed {
            position,
            step_id,
            elapsed,
        } => Some(format!(
            "{}{} {} {}",
            CHECK,
            style(format!("[{}]", position)).dim(),
            style(step_id).green(),
            style(format_duration(*elapsed)).dim()
        )),
        ExecutionEvent::StepFailed { failure, elapsed } => Some(format!(
            "{}{} {}: {} {}",
            CROSS,
            style(format!("[{}]", failure.position)).dim(),
            style(&failure.step_id).red(),
            failure.reason,
            style(format_duration(*elapsed)).dim()
        )),
        ExecutionEvent::PipelineFinished {
            pipeline_name,
            passed,
            steps_run,
        } => {
            if *passed {
                Some(format!(
                    "{}{} passed {}",
                    CHECK,
                    style(pipeline_name).bold(),
                    style(format!("({} checks)", steps_run)).dim()
                ))
            } else {
                Some(format!(
                    "{}{} {}",
                    CROSS,
                    style(pipeline_name).bold(),
                    style("failed").red()
                ))
            }
        }
    }
}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
