//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process` - Subprocess runner for platform CLIs
//! - `prompt` - Terminal and line-based prompters
//! - `stripe` - Stripe REST client
//! - `events` - Console and NDJSON event sinks
//! - `fs` - Atomic writes and file copies

pub mod events;
pub mod fs;
pub mod process;
pub mod prompt;
pub mod stripe;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use process::SystemCommandRunner;
pub use prompt::{DialoguerPrompter, LinePrompter};
pub use stripe::StripeConnector;
