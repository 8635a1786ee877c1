//! System Command Runner
//!
//! Implements the CommandRunner port with `std::process::Command`.

use std::io::{self, ErrorKind, Write};
use std::process::{ChildStdin, Command, Output, Stdio};
use std::thread;

use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec, OutputMode};
use crate::error::{DeployError, DeployResult};

/// Runs commands on the local machine, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> DeployResult<CommandOutput> {
        tracing::debug!(command = %spec, mode = ?spec.mode, "running external command");

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(dir) = &spec.cwd {
            cmd.current_dir(dir);
        }

        cmd.stdin(if spec.stdin.is_some() {
            Stdio::piped()
        } else if spec.mode == OutputMode::Inherit {
            Stdio::inherit()
        } else {
            Stdio::null()
        });

        match spec.mode {
            OutputMode::Capture => {
                cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
            }
            OutputMode::Inherit => {
                cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
        }

        let mut child = cmd.spawn().map_err(|e| DeployError::Spawn {
            program: spec.program.clone(),
            message: e.to_string(),
        })?;

        let feed = match (&spec.stdin, child.stdin.take()) {
            (Some(input), Some(pipe)) => Some((input.as_str(), pipe)),
            _ => None,
        };

        // stdin is fed on its own thread while stdout/stderr drain
        let output = thread::scope(|scope| -> DeployResult<Output> {
            let writer = feed.map(|(input, pipe)| scope.spawn(move || feed_stdin(pipe, input)));
            let output = child.wait_with_output()?;
            if let Some(Ok(result)) = writer.map(|w| w.join()) {
                result?;
            }
            Ok(output)
        })?;
        let result = CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if result.success {
            tracing::trace!(command = %spec, "command succeeded");
        } else {
            tracing::info!(command = %spec, code = ?result.code, "command exited unsuccessfully");
        }

        Ok(result)
    }
}

/// Writes `input` and closes the pipe. A child that exits without reading
/// its input is not an error here; its exit status reports the failure.
fn feed_stdin(mut pipe: ChildStdin, input: &str) -> io::Result<()> {
    match pipe.write_all(input.as_bytes()) {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
