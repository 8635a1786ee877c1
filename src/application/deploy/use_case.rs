//! Deploy Use Case
//!
//! Orchestrates one deployment run:
//! 1. Resolve the platform name (or ask via the menu)
//! 2. Optionally create the Stripe products and prices
//! 3. Run the platform's routine
//! 4. Report the outcome
//!
//! The use case is parameterized by its ports so tests can drive it with
//! scripted runners, prompters and billing fakes.

use std::path::Path;

use crate::application::billing::setup_billing_products;
use crate::application::context::DeployContext;
use crate::application::platforms::run_platform;
use crate::config::Config;
use crate::domain::entities::DeployOutcome;
use crate::domain::ports::{
    BillingConnector, CommandRunner, DeployEvent, DeployEventSink, Prompter,
};
use crate::domain::value_objects::{BillingPlan, Platform};
use crate::error::DeployResult;

use super::result::DeployReport;

/// Deploy use case - dispatches to the platform routines
pub struct DeployUseCase<'a> {
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn Prompter,
    billing: &'a dyn BillingConnector,
    events: &'a dyn DeployEventSink,
    config: &'a Config,
    project_dir: &'a Path,
}

impl<'a> DeployUseCase<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        prompter: &'a dyn Prompter,
        billing: &'a dyn BillingConnector,
        events: &'a dyn DeployEventSink,
        config: &'a Config,
        project_dir: &'a Path,
    ) -> Self {
        Self {
            runner,
            prompter,
            billing,
            events,
            config,
            project_dir,
        }
    }

    fn context(&self) -> DeployContext<'a> {
        DeployContext {
            runner: self.runner,
            prompter: self.prompter,
            events: self.events,
            config: self.config,
            project_dir: self.project_dir,
        }
    }

    /// Show the platform menu and read a choice; anything but `1`..`4` is Vercel.
    pub fn choose_platform(&self) -> DeployResult<Platform> {
        let ctx = self.context();
        ctx.info("OptionScope Deployment");
        ctx.info("Choose deployment platform:");
        for platform in Platform::ALL {
            ctx.info(platform.menu_label());
        }
        let choice = self.prompter.input("Enter choice (1-4)")?;
        Ok(Platform::from_menu_choice(&choice))
    }

    /// Deploy to the platform called `name`.
    ///
    /// An unknown name is reported with the supported list and nothing else
    /// happens: no prompt, no command.
    pub fn deploy(&self, name: &str) -> DeployResult<DeployReport> {
        let platform = match name.parse::<Platform>() {
            Ok(platform) => platform,
            Err(_) => {
                tracing::warn!(platform = name, "unsupported platform");
                self.events.on_event(DeployEvent::UnsupportedPlatform {
                    name: name.to_string(),
                    supported: Platform::supported_names(),
                });
                return Ok(DeployReport::Unsupported);
            }
        };
        self.deploy_to(platform)
    }

    /// Deploy to a known platform
    pub fn deploy_to(&self, platform: Platform) -> DeployResult<DeployReport> {
        tracing::info!(platform = platform.name(), "starting deployment");
        self.events.on_event(DeployEvent::Started { platform });

        if self.prompter.confirm("Set up Stripe products?", false)? {
            let plan = BillingPlan::optionscope(self.config.billing.currency.as_str());
            setup_billing_products(self.prompter, self.billing, &plan, self.events)?;
        }

        let outcome = run_platform(platform, &self.context())?;
        self.report(platform, outcome.as_ref());

        Ok(match outcome {
            Some(outcome) => DeployReport::Finished { platform, outcome },
            None => DeployReport::Failed { platform },
        })
    }

    fn report(&self, platform: Platform, outcome: Option<&DeployOutcome>) {
        match outcome {
            Some(DeployOutcome::Live { url: Some(url) }) => {
                self.events.on_event(DeployEvent::Completed { url: url.clone() });
            }
            Some(DeployOutcome::Live { url: None }) => {
                tracing::warn!(platform = platform.name(), "live URL not found");
            }
            Some(DeployOutcome::ManualFollowUp { instructions }) => {
                self.events.on_event(DeployEvent::ManualFollowUp {
                    instructions: instructions.clone(),
                });
            }
            None => {
                tracing::info!(platform = platform.name(), "deployment did not finish");
            }
        }
    }
}
