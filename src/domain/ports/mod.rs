//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod billing_gateway;
pub mod command_runner;
pub mod deploy_events;
pub mod prompter;

pub use billing_gateway::{BillingConnector, BillingGateway, NewPrice};
pub use command_runner::{CommandOutput, CommandRunner, CommandSpec, OutputMode};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use prompter::Prompter;
