//! Command-line interface

pub mod output;

use clap::Parser;
use std::ffi::OsString;

/// Check that the workspace is formatted, builds for wasm, and passes clippy
#[derive(Debug, Parser, Clone)]
#[command(name = "check-pipeline")]
#[command(version)]
#[command(
    about = "Runs cargo fmt --check, a wasm32 build and cargo clippy; stops at the first failure",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
