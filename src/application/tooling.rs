//! Platform CLI availability

use crate::domain::ports::DeployEvent;
use crate::error::DeployResult;

use super::context::DeployContext;

/// A platform's command-line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliTool {
    /// Shown to the operator ("Vercel")
    pub label: &'static str,
    pub program: &'static str,
    /// npm package providing the tool; `None` when it must be installed by hand
    pub npm_package: Option<&'static str>,
}

pub const VERCEL_CLI: CliTool = CliTool {
    label: "Vercel",
    program: "vercel",
    npm_package: Some("vercel"),
};

pub const HEROKU_CLI: CliTool = CliTool {
    label: "Heroku",
    program: "heroku",
    npm_package: None,
};

pub const RAILWAY_CLI: CliTool = CliTool {
    label: "Railway",
    program: "railway",
    npm_package: Some("@railway/cli"),
};

/// Make sure `tool` can be run, installing it globally through npm when possible.
///
/// Returns `Ok(false)` when the tool is missing and could not be installed;
/// the failure has already been reported.
pub fn ensure_cli(ctx: &DeployContext<'_>, tool: CliTool) -> DeployResult<bool> {
    if ctx.runner.is_available(tool.program) {
        tracing::debug!(program = tool.program, "CLI available");
        return Ok(true);
    }

    ctx.emit(DeployEvent::ToolMissing {
        tool: tool.label.to_string(),
        installing: tool.npm_package.is_some(),
    });

    let Some(package) = tool.npm_package else {
        return Ok(false);
    };

    let install = ctx
        .command("npm", ["install", "-g", package])
        .inherit();
    let installed = ctx
        .run_step(&install, &format!("Failed to install {} CLI", tool.label))?
        .is_some();
    Ok(installed)
}
