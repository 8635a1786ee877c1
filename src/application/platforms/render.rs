//! Render: write a blueprint and leave the deploy to the dashboard

use crate::application::context::DeployContext;
use crate::domain::entities::{DeployOutcome, RenderBlueprint};
use crate::domain::ports::DeployEvent;
use crate::error::DeployResult;
use crate::infrastructure::fs::atomic_write;

pub const FOLLOW_UP: &str = "Connect your GitHub repo to Render dashboard to deploy";

pub fn deploy(ctx: &DeployContext<'_>) -> DeployResult<Option<DeployOutcome>> {
    ctx.step("Setting up Render deployment...");

    let settings = &ctx.config.render;
    let blueprint = RenderBlueprint::web_service(
        settings.service_name.as_str(),
        settings.runtime.as_str(),
        settings.build_command.as_str(),
        settings.start_command.as_str(),
    );

    let path = ctx.project_path(&settings.output);
    atomic_write(&path, blueprint.to_yaml()?.as_bytes())?;
    tracing::info!(path = %path.display(), "wrote Render blueprint");

    ctx.emit(DeployEvent::FileWritten {
        path: settings.output.clone().into(),
    });
    Ok(Some(DeployOutcome::manual(FOLLOW_UP)))
}
