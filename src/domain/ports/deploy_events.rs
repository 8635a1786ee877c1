//! Deploy Event Port
//!
//! Everything the deploy flow wants to tell the operator goes through here,
//! so the console rendering and the tests observe the same stream.

use std::path::PathBuf;

use crate::domain::value_objects::Platform;

/// Event emitted during a deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Dispatcher accepted a platform
    Started { platform: Platform },

    /// Platform name did not match any supported platform
    UnsupportedPlatform { name: String, supported: String },

    /// A routine began a named step ("Setting up environment variables...")
    Step { message: String },

    /// A required CLI is missing
    ToolMissing { tool: String, installing: bool },

    /// A secret was not pushed (blank or placeholder)
    SecretSkipped { key: String },

    /// A file was generated in the project
    FileWritten { path: PathBuf },

    /// Neutral information line
    Info { message: String },

    /// Something the operator should look at; the run continues
    Warning { message: String },

    /// A routine or billing step failed; the routine stops
    Failed { message: String },

    /// The platform's deploy command succeeded
    Deployed {
        platform: Platform,
        url: Option<String>,
    },

    /// Deployment needs to be finished by hand
    ManualFollowUp { instructions: String },

    /// Billing objects were created
    BillingConfigured { env_lines: Vec<String> },

    /// Billing setup was skipped (no key)
    BillingSkipped,

    /// Final summary for a live deployment
    Completed { url: String },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    fn on_event(&self, event: DeployEvent);
}

/// Sink that drops everything
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
