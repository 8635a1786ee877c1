//! Domain Entities
//!
//! - `DeployOutcome` - what a finished deploy routine reports
//! - `RenderBlueprint` - the generated `render.yaml`

mod deploy_outcome;
mod render_blueprint;

pub use deploy_outcome::DeployOutcome;
pub use render_blueprint::{RenderBlueprint, RenderEnvVar, RenderService};
