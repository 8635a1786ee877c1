//! Configuration module
//!
//! Configuration hierarchy:
//! 1. `--config <FILE>` (highest priority)
//! 2. Environment variables (OPTIONSCOPE_*), applied on top of any file
//! 3. Project config (.optionscope/deploy.toml)
//! 4. User config (~/.config/optionscope/deploy.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG};
pub use types::{
    BillingConfig, ColorMode, Config, HerokuConfig, OutputConfig, RenderConfig, VercelConfig,
};
