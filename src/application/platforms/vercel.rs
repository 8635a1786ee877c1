//! Vercel: serverless deploy through the `vercel` CLI

use crate::application::context::DeployContext;
use crate::application::secrets::{collect_production_env_vars, push_env_vars};
use crate::application::tooling::{ensure_cli, VERCEL_CLI};
use crate::domain::entities::DeployOutcome;
use crate::domain::ports::DeployEvent;
use crate::domain::services::{join_url, vercel_url};
use crate::domain::value_objects::Platform;
use crate::error::DeployResult;
use crate::infrastructure::fs::copy_if_exists;

pub fn deploy(ctx: &DeployContext<'_>) -> DeployResult<Option<DeployOutcome>> {
    ctx.step("Deploying OptionScope to Vercel...");

    if !ensure_cli(ctx, VERCEL_CLI)? {
        return Ok(None);
    }

    let source = ctx.project_path(&ctx.config.vercel.requirements_source);
    let target = ctx.project_path(&ctx.config.vercel.requirements_target);
    if copy_if_exists(&source, &target)? {
        tracing::info!(
            from = %source.display(),
            to = %target.display(),
            "using Vercel requirements"
        );
    }

    ctx.step("Setting up environment variables...");
    let vars = collect_production_env_vars(ctx.prompter, ctx.events)?;
    let pushed = push_env_vars(&vars, ctx.events, |key, value| {
        let spec = ctx
            .command("vercel", ["env", "add", key])
            .stdin(value)
            .sensitive();
        Ok(ctx
            .run_step(&spec, &format!("Failed to set {}", key))?
            .is_some())
    })?;
    if !pushed {
        return Ok(None);
    }

    ctx.step("Deploying to Vercel...");
    let deploy = ctx.command("vercel", ["--prod"]);
    let Some(output) = ctx.run_step(&deploy, "Deployment failed")? else {
        return Ok(None);
    };

    let url = vercel_url(&output.stdout);
    ctx.emit(DeployEvent::Deployed {
        platform: Platform::Vercel,
        url: url.clone(),
    });
    if let Some(url) = &url {
        ctx.info(format!(
            "Set up Stripe webhooks at: {}",
            join_url(url, "auth/webhook/stripe")
        ));
    }

    Ok(Some(DeployOutcome::Live { url }))
}
