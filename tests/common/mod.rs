//! Common test utilities.
//!
//! - `TestEnv`: isolated temp directories plus helpers to run the binary
//! - Scripted fakes for the command, prompt, billing and event ports

#![allow(dead_code)]

pub mod env;
pub mod fakes;

pub use env::*;
pub use fakes::*;
