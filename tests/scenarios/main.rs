//! Scenario-based tests for check-pipeline
//!
//! All scenarios run against a recording runner; no external tools are
//! invoked.

mod helpers;
