//! Scripted port implementations for application tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;

use crate::config::Config;
use crate::domain::ports::{
    BillingConnector, BillingGateway, CommandOutput, CommandRunner, CommandSpec, DeployEvent,
    DeployEventSink, NewPrice, Prompter,
};
use crate::error::{DeployError, DeployResult};

use super::context::DeployContext;

/// Records every command; answers by matching the displayed command prefix.
#[derive(Default)]
pub struct ScriptedRunner {
    pub calls: RefCell<Vec<CommandSpec>>,
    responses: Vec<(String, CommandOutput)>,
    missing: Vec<String>,
    faults: Vec<String>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, prefix: &str, output: CommandOutput) -> Self {
        self.responses.push((prefix.to_string(), output));
        self
    }

    /// Spawning `program` fails as if it were not installed
    pub fn missing(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    /// Commands starting with `prefix` fail locally, not as a tool error
    pub fn fault(mut self, prefix: &str) -> Self {
        self.faults.push(prefix.to_string());
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(CommandSpec::display).collect()
    }

    /// Commands excluding `--version` probes
    pub fn actions(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter(|c| !c.ends_with("--version"))
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> DeployResult<CommandOutput> {
        self.calls.borrow_mut().push(spec.clone());
        if self.missing.contains(&spec.program) {
            return Err(DeployError::Spawn {
                program: spec.program.clone(),
                message: "No such file or directory".into(),
            });
        }
        let display = spec.display();
        if self.faults.iter().any(|f| display.starts_with(f.as_str())) {
            return Err(DeployError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            )));
        }
        Ok(self
            .responses
            .iter()
            .find(|(prefix, _)| display.starts_with(prefix.as_str()))
            .map(|(_, output)| output.clone())
            .unwrap_or_else(|| CommandOutput::ok("")))
    }
}

/// Answers prompts from queues; an exhausted queue answers blank / default.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers<I, S>(self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers
            .borrow_mut()
            .extend(answers.into_iter().map(Into::into));
        self
    }

    pub fn confirms(self, confirms: &[bool]) -> Self {
        self.confirms.borrow_mut().extend(confirms.iter().copied());
        self
    }

    fn next(&self, prompt: &str) -> String {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or_default()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str) -> DeployResult<String> {
        Ok(self.next(prompt))
    }

    fn secret(&self, prompt: &str) -> DeployResult<String> {
        Ok(self.next(prompt))
    }

    fn confirm(&self, prompt: &str, default: bool) -> DeployResult<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.confirms.borrow_mut().pop_front().unwrap_or(default))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub events: RefCell<Vec<DeployEvent>>,
}

impl RecordingSink {
    pub fn failures(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                DeployEvent::Failed { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn has(&self, pred: impl Fn(&DeployEvent) -> bool) -> bool {
        self.events.borrow().iter().any(pred)
    }
}

impl DeployEventSink for RecordingSink {
    fn on_event(&self, event: DeployEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Billing fake; `fail_at` is the 1-based call that returns an API error.
#[derive(Default, Clone)]
pub struct FakeBilling {
    pub calls: Rc<RefCell<Vec<String>>>,
    pub keys: Rc<RefCell<Vec<String>>>,
    pub fail_at: Option<usize>,
}

struct FakeGateway(FakeBilling);

impl FakeGateway {
    fn record(&self, call: String) -> DeployResult<String> {
        let mut calls = self.0.calls.borrow_mut();
        calls.push(call);
        if Some(calls.len()) == self.0.fail_at {
            return Err(DeployError::BillingApi {
                status: 402,
                message: "Your card was declined".into(),
            });
        }
        Ok(format!("obj_{}", calls.len()))
    }
}

impl BillingGateway for FakeGateway {
    fn create_product(&self, name: &str, _description: &str) -> DeployResult<String> {
        self.record(format!("product {}", name))
    }

    fn create_price(&self, price: &NewPrice<'_>) -> DeployResult<String> {
        self.record(format!(
            "price {} {} {} {}",
            price.product_id,
            price.unit_amount,
            price.currency,
            price.interval.as_str()
        ))
    }
}

impl BillingConnector for FakeBilling {
    fn connect(&self, secret_key: &str) -> DeployResult<Box<dyn BillingGateway>> {
        self.keys.borrow_mut().push(secret_key.to_string());
        Ok(Box::new(FakeGateway(self.clone())))
    }
}

pub fn context<'a>(
    runner: &'a ScriptedRunner,
    prompter: &'a ScriptedPrompter,
    events: &'a RecordingSink,
    config: &'a Config,
    project_dir: &'a Path,
) -> DeployContext<'a> {
    DeployContext {
        runner,
        prompter,
        events,
        config,
        project_dir,
    }
}

/// Answers for the five secret prompts: three Stripe keys, then two optional keys
pub fn secret_answers() -> Vec<&'static str> {
    vec!["pk_live_1", "sk_live_2", "whsec_3", "", ""]
}
