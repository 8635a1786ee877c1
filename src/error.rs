//! Error types for optionscope-deploy
//!
//! Library code returns `DeployError` via `thiserror`; the binary wraps
//! everything in `anyhow` at the command layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// External program could not be started (usually: not installed)
    #[error("failed to run '{program}': {message}")]
    Spawn { program: String, message: String },

    /// External program ran and exited unsuccessfully
    #[error("'{command}' failed{}: {stderr}", exit_suffix(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Interactive prompt could not be shown or read
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Billing provider rejected a request
    #[error("billing API error ({status}): {message}")]
    BillingApi { status: u16, message: String },

    /// Transport-level failure talking to the billing provider
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

impl DeployError {
    /// An external tool failed to start or exited unsuccessfully
    pub fn is_external_command(&self) -> bool {
        matches!(
            self,
            DeployError::Spawn { .. } | DeployError::CommandFailed { .. }
        )
    }

    /// Text suitable for the "Deployment failed: ..." style messages.
    ///
    /// For command failures this is just the captured stderr, so the operator
    /// sees the platform's own wording.
    pub fn failure_text(&self) -> String {
        match self {
            DeployError::CommandFailed { stderr, .. } if !stderr.trim().is_empty() => {
                stderr.trim().to_string()
            }
            other => other.to_string(),
        }
    }
}
