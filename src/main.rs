//! optionscope-deploy - deploy OptionScope to Vercel, Heroku, Railway or Render
//!
//! Usage: optionscope-deploy [PLATFORM]
//!
//! Without a platform an interactive menu is shown.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    optionscope_deploy::logging::init(cli.verbose);
    commands::deploy::cmd_deploy(&cli)
}
