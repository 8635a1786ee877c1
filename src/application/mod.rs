//! Application Layer
//!
//! Use cases that orchestrate the deployment flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT talk to the terminal or network directly
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Dispatches to a platform routine and reports the outcome
//! - `setup_billing_products` - Creates Stripe products and prices
//! - `collect_production_env_vars` - Asks for the secrets pushed to a platform

pub mod billing;
pub mod context;
pub mod deploy;
pub mod platforms;
pub mod secrets;
pub mod tooling;

#[cfg(test)]
pub(crate) mod test_support;

pub use billing::setup_billing_products;
pub use context::DeployContext;
pub use deploy::{DeployReport, DeployUseCase};
pub use secrets::collect_production_env_vars;
