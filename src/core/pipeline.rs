//! Pipeline domain model

use crate::core::{config::PipelineConfig, step::CheckStep};
use anyhow::{Context, Result};

/// An ordered, immutable sequence of check steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    /// Pipeline name
    pub name: String,

    steps: Vec<CheckStep>,
}

impl Pipeline {
    pub fn new(name: impl Into<String>, steps: Vec<CheckStep>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Create a pipeline from configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            config.name.clone(),
            config.steps.iter().map(|s| s.to_step()).collect(),
        )
    }

    /// The format / wasm build / lint pipeline compiled into the binary
    pub fn builtin() -> Result<Self> {
        let config = PipelineConfig::builtin().context("Built-in step table is invalid")?;
        Ok(config.to_pipeline())
    }

    /// Steps in execution order
    pub fn steps(&self) -> &[CheckStep] {
        &self.steps
    }

    /// Get a step by ID
    pub fn step(&self, id: &str) -> Option<&CheckStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
