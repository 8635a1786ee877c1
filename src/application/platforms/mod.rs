//! Per-platform deploy routines
//!
//! Each routine returns `Ok(None)` after reporting a failure, and
//! `Ok(Some(outcome))` when it ran to the end.

pub mod heroku;
pub mod railway;
pub mod render;
pub mod vercel;

use crate::domain::entities::DeployOutcome;
use crate::domain::value_objects::Platform;
use crate::error::DeployResult;

use super::context::DeployContext;

/// Run exactly the routine for `platform`.
pub fn run_platform(
    platform: Platform,
    ctx: &DeployContext<'_>,
) -> DeployResult<Option<DeployOutcome>> {
    match platform {
        Platform::Vercel => vercel::deploy(ctx),
        Platform::Heroku => heroku::deploy(ctx),
        Platform::Railway => railway::deploy(ctx),
        Platform::Render => render::deploy(ctx),
    }
}
