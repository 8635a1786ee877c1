//! Command Runner Port
//!
//! Every external tool (platform CLIs, npm, git) is invoked through this trait
//! so deploy routines can be exercised against scripted fakes.

use std::fmt;
use std::path::PathBuf;

use crate::error::{DeployError, DeployResult};

/// How the child's stdout/stderr are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Capture stdout/stderr for inspection
    #[default]
    Capture,
    /// Let the child talk to the terminal (login flows, installers)
    Inherit,
}

/// Description of one external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Written to the child's stdin, then stdin is closed
    pub stdin: Option<String>,
    pub mode: OutputMode,
    pub cwd: Option<PathBuf>,
    /// Arguments carry secret values and must not be logged verbatim
    pub sensitive: bool,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            stdin: None,
            mode: OutputMode::Capture,
            cwd: None,
            sensitive: false,
        }
    }

    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    pub fn inherit(mut self) -> Self {
        self.mode = OutputMode::Inherit;
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// `program arg1 arg2`, with `KEY=value` arguments masked when sensitive
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        for arg in &self.args {
            if self.sensitive {
                if let Some((key, _)) = arg.split_once('=') {
                    parts.push(format!("{}=***", key));
                    continue;
                }
            }
            parts.push(arg.clone());
        }
        parts.join(" ")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Exit status and captured output of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    /// Empty when the command ran with inherited output
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Turn a non-zero exit into `DeployError::CommandFailed`.
    pub fn into_result(self, spec: &CommandSpec) -> DeployResult<CommandOutput> {
        if self.success {
            Ok(self)
        } else {
            Err(DeployError::CommandFailed {
                command: spec.display(),
                code: self.code,
                stderr: self.stderr,
            })
        }
    }
}

/// Runs external commands, blocking until they exit.
///
/// Implementations must return `Err(DeployError::Spawn)` when the program
/// cannot be started and `Ok` with `success == false` for a non-zero exit.
pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec) -> DeployResult<CommandOutput>;

    /// Run and require a zero exit status.
    fn run_checked(&self, spec: &CommandSpec) -> DeployResult<CommandOutput> {
        self.run(spec)?.into_result(spec)
    }

    /// Whether `program --version` starts and exits zero.
    fn is_available(&self, program: &str) -> bool {
        matches!(
            self.run(&CommandSpec::new(program, ["--version"])),
            Ok(output) if output.success
        )
    }
}
