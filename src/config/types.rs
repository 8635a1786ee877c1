//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DeployResult;

use super::loader::{self, ConfigWarning};

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Vercel deployment settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VercelConfig {
    /// Copied over `requirements_target` before deploying, when present
    #[serde(default = "default_requirements_source")]
    pub requirements_source: String,

    #[serde(default = "default_requirements_target")]
    pub requirements_target: String,
}

impl Default for VercelConfig {
    fn default() -> Self {
        Self {
            requirements_source: default_requirements_source(),
            requirements_target: default_requirements_target(),
        }
    }
}

/// Heroku deployment settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HerokuConfig {
    #[serde(default = "default_postgres_addon")]
    pub postgres_addon: String,

    /// Branch pushed to the `heroku` remote
    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl Default for HerokuConfig {
    fn default() -> Self {
        Self {
            postgres_addon: default_postgres_addon(),
            branch: default_branch(),
            commit_message: default_commit_message(),
        }
    }
}

/// Render blueprint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Blueprint path, relative to the project directory
    #[serde(default = "default_render_output")]
    pub output: String,

    #[serde(default = "default_service_name")]
    pub service_name: String,

    #[serde(default = "default_runtime")]
    pub runtime: String,

    #[serde(default = "default_build_command")]
    pub build_command: String,

    #[serde(default = "default_start_command")]
    pub start_command: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: default_render_output(),
            service_name: default_service_name(),
            runtime: default_runtime(),
            build_command: default_build_command(),
            start_command: default_start_command(),
        }
    }
}

/// Billing provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            currency: default_currency(),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub vercel: VercelConfig,

    #[serde(default)]
    pub heroku: HerokuConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub billing: BillingConfig,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> DeployResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from explicit path, project config, user config, or defaults
    pub fn discover(
        explicit: Option<&Path>,
        project_dir: &Path,
    ) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, project_dir)
    }

    /// Apply `OPTIONSCOPE_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}

fn default_true() -> bool {
    true
}

fn default_requirements_source() -> String {
    "requirements-vercel.txt".to_string()
}

fn default_requirements_target() -> String {
    "requirements.txt".to_string()
}

fn default_postgres_addon() -> String {
    "heroku-postgresql:essential-0".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_commit_message() -> String {
    "Deploy OptionScope".to_string()
}

fn default_render_output() -> String {
    "render.yaml".to_string()
}

fn default_service_name() -> String {
    "optionscope".to_string()
}

fn default_runtime() -> String {
    "python".to_string()
}

fn default_build_command() -> String {
    "pip install -r requirements.txt".to_string()
}

fn default_start_command() -> String {
    "gunicorn app:server".to_string()
}

fn default_api_base() -> String {
    "https://api.stripe.com".to_string()
}

fn default_currency() -> String {
    "usd".to_string()
}
