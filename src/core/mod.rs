//! Core domain models
//!
//! Check steps, the pipeline that orders them, the compiled-in step table,
//! and the result of a run.

pub mod config;
pub mod pipeline;
pub mod state;
pub mod step;

pub use pipeline::*;
pub use state::*;
pub use step::*;
