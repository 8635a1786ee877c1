//! OptionScope deploy - ship the OptionScope app to a hosting platform
//!
//! Drives the Vercel, Heroku and Railway CLIs (or writes a Render blueprint),
//! forwards production secrets, and optionally creates the Stripe products
//! and prices the app's subscription tiers rely on.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployReport, DeployUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::entities::DeployOutcome;
pub use domain::value_objects::{generate_secret_key, EnvVars, Platform};
pub use error::{DeployError, DeployResult};
