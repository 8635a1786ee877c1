//! Capabilities handed to every deploy routine

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::ports::{
    CommandOutput, CommandRunner, CommandSpec, DeployEvent, DeployEventSink, Prompter,
};
use crate::error::DeployResult;

/// Borrowed ports plus settings for one deployment run
#[derive(Clone, Copy)]
pub struct DeployContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub prompter: &'a dyn Prompter,
    pub events: &'a dyn DeployEventSink,
    pub config: &'a Config,
    pub project_dir: &'a Path,
}

impl<'a> DeployContext<'a> {
    pub fn emit(&self, event: DeployEvent) {
        self.events.on_event(event);
    }

    pub fn step(&self, message: impl Into<String>) {
        self.emit(DeployEvent::Step {
            message: message.into(),
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.emit(DeployEvent::Info {
            message: message.into(),
        });
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.emit(DeployEvent::Warning {
            message: message.into(),
        });
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.emit(DeployEvent::Failed {
            message: message.into(),
        });
    }

    /// Command rooted in the project directory
    pub fn command<I, S>(&self, program: &str, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new(program, args).current_dir(self.project_dir)
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_dir.join(relative)
    }

    /// Run a step that must succeed.
    ///
    /// An external command failure is reported as `"<context>: <error>"` and
    /// yields `Ok(None)`; the caller then abandons the routine. Local faults
    /// still propagate.
    pub fn run_step(
        &self,
        spec: &CommandSpec,
        context: &str,
    ) -> DeployResult<Option<CommandOutput>> {
        match self.runner.run_checked(spec) {
            Ok(output) => Ok(Some(output)),
            Err(err) if err.is_external_command() => {
                tracing::warn!(command = %spec, error = %err, "deploy step failed");
                self.fail(format!("{}: {}", context, err.failure_text()));
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
