use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use optionscope_deploy::config::ColorMode;

/// Deploy OptionScope to a hosting platform
#[derive(Parser, Debug)]
#[command(name = "optionscope-deploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run without a platform to choose one from a menu.")]
pub struct Cli {
    /// Target platform: vercel, heroku, railway or render
    pub platform: Option<String>,

    /// Project directory the platform CLIs run in
    #[arg(short = 'C', long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Config file (default: .optionscope/deploy.toml, then the user config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of formatted output
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Color output
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}
