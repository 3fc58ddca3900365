//! Test utility functions for check-pipeline

use check_pipeline::core::config::PipelineConfig;
use check_pipeline::{
    CheckStep, CommandRunner, ExecutionEngine, ExitOutcome, Pipeline, RunResult, RunnerError,
};

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Runner double that records every invocation and returns scripted outcomes.
///
/// Steps without a scripted outcome exit 0.
#[derive(Default)]
pub struct RecordingRunner {
    outcomes: HashMap<String, Result<ExitOutcome, String>>,
    calls: Mutex<Vec<String>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `step_id` exit with `code`
    pub fn exit_with(mut self, step_id: &str, code: i32) -> Self {
        self.outcomes.insert(step_id.to_string(), Ok(ExitOutcome::Code(code)));
        self
    }

    /// Make `step_id` die from `signal`
    pub fn killed_by(mut self, step_id: &str, signal: i32) -> Self {
        self.outcomes.insert(step_id.to_string(), Ok(ExitOutcome::Signal(signal)));
        self
    }

    /// Make `step_id` fail to spawn
    pub fn unspawnable(mut self, step_id: &str) -> Self {
        self.outcomes.insert(step_id.to_string(), Err("No such file or directory".to_string()));
        self
    }

    /// Step ids in the order they were invoked
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// How many times `step_id` was invoked
    pub fn invocations(&self, step_id: &str) -> usize {
        self.calls().iter().filter(|id| *id == step_id).count()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, step: &CheckStep) -> Result<ExitOutcome, RunnerError> {
        self.calls.lock().unwrap().push(step.id.clone());

        match self.outcomes.get(&step.id) {
            None => Ok(ExitOutcome::Code(0)),
            Some(Ok(outcome)) => Ok(*outcome),
            Some(Err(message)) => Err(RunnerError::Spawn {
                command: step.command.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, message.clone()),
            }),
        }
    }
}

/// In-memory trace sink that can be read back after the run
#[derive(Clone, Default)]
pub struct TraceBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for TraceBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TraceBuffer {
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .expect("trace output should be UTF-8")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Result of a test run: the pipeline outcome plus what was observed
pub struct PipelineTestResult {
    pub result: RunResult,
    pub trace: Vec<String>,
    pub runner: Arc<RecordingRunner>,
}

/// Run a pipeline with a recording runner, capturing trace output
pub async fn run_pipeline_with_runner(
    pipeline: &Pipeline,
    runner: RecordingRunner,
) -> PipelineTestResult {
    let runner = Arc::new(runner);
    let trace = TraceBuffer::default();

    let engine = ExecutionEngine::new(runner.clone()).with_trace(trace.clone());
    let result = engine.execute(pipeline).await;

    PipelineTestResult {
        result,
        trace: trace.lines(),
        runner,
    }
}

/// Run the built-in pipeline against a recording runner
pub async fn run_builtin(runner: RecordingRunner) -> PipelineTestResult {
    let pipeline = Pipeline::builtin().expect("built-in pipeline should load");
    run_pipeline_with_runner(&pipeline, runner).await
}

/// Parse a pipeline from YAML string
pub fn pipeline_from_yaml(yaml: &str) -> Pipeline {
    let config = PipelineConfig::from_yaml(yaml)
        .unwrap_or_else(|e| panic!("Failed to parse pipeline YAML: {}", e));
    config.to_pipeline()
}

/// Assert the run failed at `position` with `step_id`
pub fn assert_failed_at(result: &PipelineTestResult, position: usize, step_id: &str) {
    let failure = result
        .result
        .failure()
        .unwrap_or_else(|| panic!("Pipeline should have failed at step {}, but passed", position));

    assert_eq!(
        (failure.position, failure.step_id.as_str()),
        (position, step_id),
        "Pipeline failed at the wrong step: {}",
        failure
    );
}

/// Trace lines expected for the built-in steps, in order
pub const BUILTIN_TRACE: [&str; 3] = [
    "+ cargo fmt --check",
    "+ cargo build -p maelstrom-web --target wasm32-unknown-unknown",
    "+ cargo clippy --workspace",
];
