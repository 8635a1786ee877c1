//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started { platform } => serde_json::json!({
                "event": "start",
                "platform": platform.name(),
            }),

            DeployEvent::UnsupportedPlatform { name, supported } => serde_json::json!({
                "event": "unsupported_platform",
                "name": name,
                "supported": supported.split(", ").collect::<Vec<_>>(),
            }),

            DeployEvent::Step { message } => serde_json::json!({
                "event": "step",
                "message": message,
            }),

            DeployEvent::ToolMissing { tool, installing } => serde_json::json!({
                "event": "tool_missing",
                "tool": tool,
                "installing": installing,
            }),

            DeployEvent::SecretSkipped { key } => serde_json::json!({
                "event": "secret_skipped",
                "key": key,
            }),

            DeployEvent::FileWritten { path } => serde_json::json!({
                "event": "file_written",
                "path": path.display().to_string(),
            }),

            DeployEvent::Info { message } => serde_json::json!({
                "event": "info",
                "message": message,
            }),

            DeployEvent::Warning { message } => serde_json::json!({
                "event": "warning",
                "message": message,
            }),

            DeployEvent::Failed { message } => serde_json::json!({
                "event": "failed",
                "message": message,
            }),

            DeployEvent::Deployed { platform, url } => serde_json::json!({
                "event": "deployed",
                "platform": platform.name(),
                "url": url,
            }),

            DeployEvent::ManualFollowUp { instructions } => serde_json::json!({
                "event": "manual_follow_up",
                "instructions": instructions,
            }),

            DeployEvent::BillingConfigured { env_lines } => serde_json::json!({
                "event": "billing_configured",
                "env": env_lines,
            }),

            DeployEvent::BillingSkipped => serde_json::json!({
                "event": "billing_skipped",
            }),

            DeployEvent::Completed { url } => serde_json::json!({
                "event": "complete",
                "status": "success",
                "url": url,
            }),
        };

        self.write_event(json);
    }
}
