use anyhow::{Context, Result};
use check_pipeline::cli::output::format_execution_event;
use check_pipeline::cli::Cli;
use check_pipeline::{ExecutionEngine, Pipeline, ProcessRunner};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let pipeline = Pipeline::builtin()?;
    debug!("Loaded pipeline {} with {} steps", pipeline.name, pipeline.len());

    let mut engine = ExecutionEngine::new(ProcessRunner::new());
    engine.add_event_handler(|event| {
        if let Some(line) = format_execution_event(event) {
            eprintln!("{}", line);
        }
    });

    let result = engine.execute(&pipeline).await;

    if !result.is_success() {
        // Propagate the failing tool's status unchanged
        std::process::exit(result.exit_code());
    }

    Ok(())
}
