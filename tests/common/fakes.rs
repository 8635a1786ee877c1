//! Scripted ports for driving the library without real tools or network.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use optionscope_deploy::domain::ports::{
    BillingConnector, BillingGateway, CommandOutput, CommandRunner, CommandSpec, DeployEvent,
    DeployEventSink, NewPrice, Prompter,
};
use optionscope_deploy::{DeployError, DeployResult};

/// Records commands; the first matching prefix decides the output.
#[derive(Default)]
pub struct FakeRunner {
    pub calls: RefCell<Vec<CommandSpec>>,
    responses: Vec<(String, CommandOutput)>,
}

impl FakeRunner {
    pub fn respond(mut self, prefix: &str, output: CommandOutput) -> Self {
        self.responses.push((prefix.to_string(), output));
        self
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.program.clone()).collect()
    }

    pub fn displayed(&self) -> Vec<String> {
        self.calls.borrow().iter().map(CommandSpec::display).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, spec: &CommandSpec) -> DeployResult<CommandOutput> {
        self.calls.borrow_mut().push(spec.clone());
        let display = spec.display();
        Ok(self
            .responses
            .iter()
            .find(|(prefix, _)| display.starts_with(prefix.as_str()))
            .map(|(_, out)| out.clone())
            .unwrap_or_else(|| CommandOutput::ok("")))
    }
}

#[derive(Default)]
pub struct FakePrompter {
    answers: RefCell<VecDeque<String>>,
    confirm: Option<bool>,
    pub asked: RefCell<Vec<String>>,
}

impl FakePrompter {
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn confirming(mut self, yes: bool) -> Self {
        self.confirm = Some(yes);
        self
    }

    fn next(&self, prompt: &str) -> String {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or_default()
    }
}

impl Prompter for FakePrompter {
    fn input(&self, prompt: &str) -> DeployResult<String> {
        Ok(self.next(prompt))
    }

    fn secret(&self, prompt: &str) -> DeployResult<String> {
        Ok(self.next(prompt))
    }

    fn confirm(&self, prompt: &str, default: bool) -> DeployResult<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.confirm.unwrap_or(default))
    }
}

#[derive(Default)]
pub struct EventLog {
    pub events: RefCell<Vec<DeployEvent>>,
}

impl EventLog {
    pub fn any(&self, pred: impl Fn(&DeployEvent) -> bool) -> bool {
        self.events.borrow().iter().any(pred)
    }
}

impl DeployEventSink for EventLog {
    fn on_event(&self, event: DeployEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Billing fake that fails on the `fail_at`-th create call (1-based)
#[derive(Clone, Default)]
pub struct FakeStripe {
    pub calls: Rc<RefCell<Vec<String>>>,
    pub fail_at: Option<usize>,
}

impl BillingConnector for FakeStripe {
    fn connect(&self, _secret_key: &str) -> DeployResult<Box<dyn BillingGateway>> {
        Ok(Box::new(self.clone()))
    }
}

impl FakeStripe {
    fn record(&self, call: String) -> DeployResult<String> {
        let mut calls = self.calls.borrow_mut();
        calls.push(call);
        if Some(calls.len()) == self.fail_at {
            return Err(DeployError::BillingApi {
                status: 500,
                message: "upstream unavailable".into(),
            });
        }
        Ok(format!("id{}", calls.len()))
    }
}

impl BillingGateway for FakeStripe {
    fn create_product(&self, name: &str, _description: &str) -> DeployResult<String> {
        self.record(format!("product:{}", name))
    }

    fn create_price(&self, price: &NewPrice<'_>) -> DeployResult<String> {
        self.record(format!(
            "price:{}:{}",
            price.unit_amount,
            price.interval.as_str()
        ))
    }
}
