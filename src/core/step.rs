//! Check step domain model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which quality gate a step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Formatter in verification mode
    Format,
    /// Target-scoped compilation
    Build,
    /// Static analysis
    Lint,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckKind::Format => "format",
            CheckKind::Build => "build",
            CheckKind::Lint => "lint",
        };
        f.write_str(name)
    }
}

/// A single external-tool invocation in a pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckStep {
    /// Unique step identifier
    pub id: String,

    /// The gate this step implements
    pub kind: CheckKind,

    /// Program to execute
    pub command: String,

    /// Arguments, passed through verbatim
    pub args: Vec<String>,

    /// Optional wall-clock limit in seconds
    pub timeout_secs: Option<u64>,
}

impl CheckStep {
    /// Create a step with no timeout
    pub fn new<I, S>(
        id: impl Into<String>,
        kind: CheckKind,
        command: impl Into<String>,
        args: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            kind,
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout_secs: None,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Render the command line the way a shell trace would echo it
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote_word)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Single-quote a word if it contains anything a shell would interpret
fn quote_word(word: &str) -> String {
    let is_plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));

    if is_plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
