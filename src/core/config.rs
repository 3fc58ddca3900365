//! Step table configuration from YAML
//!
//! The step table is compiled into the binary; there is no runtime config
//! file. Parsing still goes through serde so the table is validated the same
//! way any other pipeline definition would be.

use crate::core::{CheckKind, CheckStep, Pipeline};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The built-in step table
pub const BUILTIN_CHECKS: &str = include_str!("checks.yaml");

/// Top-level pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pipeline name
    pub name: String,

    /// Steps, in execution order
    pub steps: Vec<StepConfig>,
}

/// Step configuration as written in the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConfig {
    /// Unique step identifier
    pub id: String,

    /// Gate this step implements
    pub kind: CheckKind,

    /// Program to run
    pub command: String,

    /// Arguments passed to the program
    #[serde(default)]
    pub args: Vec<String>,

    /// Timeout for this step (none means wait indefinitely)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl PipelineConfig {
    /// Load the step table compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CHECKS)
    }

    /// Parse pipeline configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: PipelineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the pipeline configuration
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            anyhow::bail!("Pipeline '{}' has no steps", self.name);
        }

        let mut seen_ids = HashSet::new();
        for step in &self.steps {
            if step.id.trim().is_empty() {
                anyhow::bail!("Pipeline '{}' has a step with an empty id", self.name);
            }
            if !seen_ids.insert(&step.id) {
                anyhow::bail!("Duplicate step ID: {}", step.id);
            }
            if step.command.trim().is_empty() {
                anyhow::bail!("Step '{}' has an empty command", step.id);
            }
            if step.timeout_secs == Some(0) {
                anyhow::bail!("Step '{}' has a zero timeout", step.id);
            }
        }

        Ok(())
    }

    /// Convert config to a Pipeline domain model
    pub fn to_pipeline(&self) -> Pipeline {
        Pipeline::from_config(self)
    }
}

impl StepConfig {
    pub fn to_step(&self) -> CheckStep {
        CheckStep {
            id: self.id.clone(),
            kind: self.kind,
            command: self.command.clone(),
            args: self.args.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
