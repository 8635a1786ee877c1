//! Prompter Port
//!
//! Interactive questions asked of the operator. Answers are returned
//! untrimmed; callers decide how to normalize them.

use crate::error::DeployResult;

pub trait Prompter {
    /// Free-text answer; empty is allowed.
    fn input(&self, prompt: &str) -> DeployResult<String>;

    /// Hidden answer for credentials; empty is allowed.
    fn secret(&self, prompt: &str) -> DeployResult<String>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> DeployResult<bool>;
}
