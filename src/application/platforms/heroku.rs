//! Heroku: app creation, Postgres add-on, config vars and a git push

use crate::application::context::DeployContext;
use crate::application::secrets::{collect_production_env_vars, push_env_vars};
use crate::application::tooling::{ensure_cli, HEROKU_CLI};
use crate::domain::entities::DeployOutcome;
use crate::domain::ports::DeployEvent;
use crate::domain::services::{heroku_url_from_info, heroku_url_from_json};
use crate::domain::value_objects::Platform;
use crate::error::DeployResult;

const FAILED: &str = "Heroku deployment failed";

pub fn deploy(ctx: &DeployContext<'_>) -> DeployResult<Option<DeployOutcome>> {
    ctx.step("Deploying OptionScope to Heroku...");

    if !ensure_cli(ctx, HEROKU_CLI)? {
        return Ok(None);
    }

    let app_name = ctx
        .prompter
        .input("Enter Heroku app name (or press Enter for auto-generated)")?;
    let app_name = app_name.trim();

    ctx.step("Creating Heroku app...");
    let mut create = vec!["create"];
    if !app_name.is_empty() {
        create.push(app_name);
    }
    if ctx.run_step(&ctx.command("heroku", create), FAILED)?.is_none() {
        return Ok(None);
    }

    ctx.step("Adding PostgreSQL database...");
    let addon = ctx.command(
        "heroku",
        ["addons:create", ctx.config.heroku.postgres_addon.as_str()],
    );
    if ctx.run_step(&addon, FAILED)?.is_none() {
        return Ok(None);
    }

    ctx.step("Setting environment variables...");
    let vars = collect_production_env_vars(ctx.prompter, ctx.events)?;
    let pushed = push_env_vars(&vars, ctx.events, |key, value| {
        let spec = ctx
            .command("heroku", ["config:set".to_string(), format!("{}={}", key, value)])
            .sensitive();
        Ok(ctx.run_step(&spec, FAILED)?.is_some())
    })?;
    if !pushed {
        return Ok(None);
    }

    ctx.step("Deploying to Heroku...");
    let heroku = &ctx.config.heroku;
    let git_steps = [
        ctx.command("git", ["add", "."]),
        ctx.command("git", ["commit", "-m", heroku.commit_message.as_str()]),
        ctx.command("git", ["push", "heroku", heroku.branch.as_str()]),
    ];
    for spec in &git_steps {
        if ctx.run_step(spec, FAILED)?.is_none() {
            return Ok(None);
        }
    }

    let url = app_url(ctx)?;
    ctx.emit(DeployEvent::Deployed {
        platform: Platform::Heroku,
        url: url.clone(),
    });
    Ok(Some(DeployOutcome::Live { url }))
}

/// `apps:info --json` first, then the text of `heroku info`.
fn app_url(ctx: &DeployContext<'_>) -> DeployResult<Option<String>> {
    match ctx.runner.run(&ctx.command("heroku", ["apps:info", "--json"])) {
        Ok(output) if output.success => {
            if let Some(url) = heroku_url_from_json(&output.stdout) {
                return Ok(Some(url));
            }
        }
        Ok(_) => {}
        Err(err) if err.is_external_command() => {}
        Err(err) => return Err(err),
    }
    tracing::debug!("falling back to `heroku info` text output");

    match ctx.runner.run(&ctx.command("heroku", ["info"])) {
        Ok(output) if output.success => Ok(heroku_url_from_info(&output.stdout)),
        Ok(_) => Ok(None),
        Err(err) if err.is_external_command() => Ok(None),
        Err(err) => Err(err),
    }
}
