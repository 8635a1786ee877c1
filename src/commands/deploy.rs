use std::path::Path;

use anyhow::{Context, Result};
use optionscope_deploy::config::{Config, ConfigWarning};
use optionscope_deploy::domain::ports::{DeployEventSink, Prompter};
use optionscope_deploy::infrastructure::{
    ConsoleEventSink, DialoguerPrompter, JsonEventSink, LinePrompter, StripeConnector,
    SystemCommandRunner,
};
use optionscope_deploy::ui::primitives::icon::Icon;
use optionscope_deploy::ui::UiContext;
use optionscope_deploy::{DeployReport, DeployUseCase};

use crate::cli::Cli;

pub fn cmd_deploy(cli: &Cli) -> Result<()> {
    let project_dir = cli.project_dir.as_path();
    if !project_dir.is_dir() {
        anyhow::bail!("project directory not found: {}", project_dir.display());
    }

    let (config, warnings) = Config::discover(cli.config.as_deref(), project_dir)
        .context("failed to load configuration")?;
    let ui = UiContext::new(cli.color.map(Into::into), &config);
    print_config_warnings(&warnings, &ui);

    let prompter: Box<dyn Prompter> = if ui.rich_prompts {
        Box::new(DialoguerPrompter::new(ui.color))
    } else {
        Box::new(LinePrompter::stdio())
    };
    let events: Box<dyn DeployEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui))
    };
    let runner = SystemCommandRunner::new();
    let billing = StripeConnector::new(config.billing.api_base.as_str());

    let use_case = DeployUseCase::new(
        &runner,
        prompter.as_ref(),
        &billing,
        events.as_ref(),
        &config,
        project_dir,
    );

    let report = match &cli.platform {
        Some(name) => use_case.deploy(name)?,
        None => {
            let platform = use_case.choose_platform()?;
            use_case.deploy_to(platform)?
        }
    };
    log_report(&report, project_dir);

    // Handled failures were already reported; they do not change the exit status
    Ok(())
}

fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
    }
}

fn log_report(report: &DeployReport, project_dir: &Path) {
    let Some(platform) = report.platform() else {
        return;
    };
    if report.is_success() {
        tracing::info!(
            platform = platform.name(),
            dir = %project_dir.display(),
            url = ?report.url(),
            "deployment finished"
        );
    } else {
        tracing::info!(platform = platform.name(), "deployment failed");
    }
}
