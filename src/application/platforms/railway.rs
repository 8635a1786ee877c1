//! Railway: interactive login/init, variables, `railway up`

use crate::application::context::DeployContext;
use crate::application::secrets::{collect_production_env_vars, push_env_vars};
use crate::application::tooling::{ensure_cli, RAILWAY_CLI};
use crate::domain::entities::DeployOutcome;
use crate::error::DeployResult;

const FAILED: &str = "Railway deployment failed";

pub const FOLLOW_UP: &str = "Check Railway dashboard for your app URL";

pub fn deploy(ctx: &DeployContext<'_>) -> DeployResult<Option<DeployOutcome>> {
    ctx.step("Deploying OptionScope to Railway...");

    if !ensure_cli(ctx, RAILWAY_CLI)? {
        return Ok(None);
    }

    // Both open browser / TTY flows
    for args in [["login"], ["init"]] {
        if ctx
            .run_step(&ctx.command("railway", args).inherit(), FAILED)?
            .is_none()
        {
            return Ok(None);
        }
    }

    ctx.step("Setting environment variables...");
    let vars = collect_production_env_vars(ctx.prompter, ctx.events)?;
    let pushed = push_env_vars(&vars, ctx.events, |key, value| {
        let spec = ctx
            .command(
                "railway",
                [
                    "variables".to_string(),
                    "set".to_string(),
                    format!("{}={}", key, value),
                ],
            )
            .sensitive();
        Ok(ctx.run_step(&spec, FAILED)?.is_some())
    })?;
    if !pushed {
        return Ok(None);
    }

    ctx.step("Deploying to Railway...");
    if ctx.run_step(&ctx.command("railway", ["up"]), FAILED)?.is_none() {
        return Ok(None);
    }

    ctx.info("Deployment successful!");
    Ok(Some(DeployOutcome::manual(FOLLOW_UP)))
}
