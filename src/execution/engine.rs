//! Main execution engine - runs the pipeline's steps in order, stopping at the
//! first failure

use crate::{
    core::{CheckStep, Pipeline, RunResult, StepFailure},
    execution::{ExecutionResult, StepExecutor},
    runner::CommandRunner,
};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Events that can occur during pipeline execution
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    PipelineStarted {
        pipeline_name: String,
        total_steps: usize,
    },
    StepStarted {
        position: usize,
        total_steps: usize,
        step_id: String,
    },
    StepPassed {
        position: usize,
        step_id: String,
        elapsed: Duration,
    },
    StepFailed {
        failure: StepFailure,
        elapsed: Duration,
    },
    PipelineFinished {
        pipeline_name: String,
        passed: bool,
        steps_run: usize,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(&ExecutionEvent) + Send + Sync>;

/// Pipeline execution engine
///
/// Every step gets a `+ <command line>` trace line written to the trace sink
/// before it starts. The sink is stderr unless replaced with [`with_trace`].
///
/// [`with_trace`]: ExecutionEngine::with_trace
pub struct ExecutionEngine<R> {
    executor: StepExecutor<R>,
    trace: Mutex<Box<dyn Write + Send>>,
    event_handlers: Vec<EventHandler>,
}

impl<R: CommandRunner> ExecutionEngine<R> {
    pub fn new(runner: R) -> Self {
        Self {
            executor: StepExecutor::new(runner),
            trace: Mutex::new(Box::new(io::stderr())),
            event_handlers: Vec::new(),
        }
    }

    /// Replace the trace sink
    pub fn with_trace<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.trace = Mutex::new(Box::new(sink));
        self
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(&ExecutionEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Arc::new(handler));
    }

    /// Emit an event to all handlers
    fn emit_event(&self, event: ExecutionEvent) {
        for handler in &self.event_handlers {
            handler(&event);
        }
    }

    /// Echo the step's command line to the trace sink
    fn trace(&self, step: &CheckStep) {
        let line = format!("+ {}", step.command_line());
        let mut sink = match self.trace.lock() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(sink, "{}", line).and_then(|_| sink.flush()) {
            warn!("Failed to write trace line for {}: {}", step.id, e);
        }
    }

    /// Execute the entire pipeline
    pub async fn execute(&self, pipeline: &Pipeline) -> RunResult {
        let total_steps = pipeline.len();

        info!("Starting pipeline: {} ({} steps)", pipeline.name, total_steps);
        self.emit_event(ExecutionEvent::PipelineStarted {
            pipeline_name: pipeline.name.clone(),
            total_steps,
        });

        for (index, step) in pipeline.steps().iter().enumerate() {
            let position = index + 1;

            self.trace(step);
            self.emit_event(ExecutionEvent::StepStarted {
                position,
                total_steps,
                step_id: step.id.clone(),
            });

            let started = Instant::now();
            let result = self.executor.execute(step).await;
            let elapsed = started.elapsed();

            match result {
                ExecutionResult::Passed => {
                    self.emit_event(ExecutionEvent::StepPassed {
                        position,
                        step_id: step.id.clone(),
                        elapsed,
                    });
                }
                ExecutionResult::Failed(reason) => {
                    let failure = StepFailure::new(position, step, reason);
                    info!("{}", failure);

                    self.emit_event(ExecutionEvent::StepFailed {
                        failure: failure.clone(),
                        elapsed,
                    });
                    self.emit_event(ExecutionEvent::PipelineFinished {
                        pipeline_name: pipeline.name.clone(),
                        passed: false,
                        steps_run: position,
                    });

                    return RunResult::Failed(failure);
                }
            }
        }

        info!("Pipeline finished: {} - all steps passed", pipeline.name);
        self.emit_event(ExecutionEvent::PipelineFinished {
            pipeline_name: pipeline.name.clone(),
            passed: true,
            steps_run: total_steps,
        });

        RunResult::Passed {
            steps_run: total_steps,
        }
    }
}
