//! Environment variables collected for a single deployment run

use std::collections::BTreeMap;

/// Placeholder value from sample `.env` files; never pushed as a real secret.
pub const PLACEHOLDER_VALUE: &str = "your-key-here";

/// Well-known variable names
pub mod keys {
    pub const FLASK_ENV: &str = "FLASK_ENV";
    pub const SECRET_KEY: &str = "SECRET_KEY";
    pub const STRIPE_PUBLISHABLE_KEY: &str = "STRIPE_PUBLISHABLE_KEY";
    pub const STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
    pub const STRIPE_WEBHOOK_SECRET: &str = "STRIPE_WEBHOOK_SECRET";
    pub const ALPHA_VANTAGE_API_KEY: &str = "ALPHA_VANTAGE_API_KEY";
    pub const IEX_API_KEY: &str = "IEX_API_KEY";
}

/// Name → value mapping, ordered by name so pushes are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    vars: BTreeMap<String, String>,
}

impl EnvVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable unconditionally (blank values are kept).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Set a variable only when the trimmed value is non-blank.
    ///
    /// Returns whether the variable was stored.
    pub fn set_optional(&mut self, key: impl Into<String>, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        self.vars.insert(key.into(), value.to_string());
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Entries that may be sent to a platform: non-blank and not the placeholder.
    pub fn pushable(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars
            .iter()
            .filter(|(_, v)| is_pushable_value(v))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Names of entries that will be skipped by [`EnvVars::pushable`].
    pub fn skipped_keys(&self) -> Vec<&str> {
        self.vars
            .iter()
            .filter(|(_, v)| !is_pushable_value(v))
            .map(|(k, _)| k.as_str())
            .collect()
    }
}

/// A value is pushable when it carries real content.
pub fn is_pushable_value(value: &str) -> bool {
    !value.trim().is_empty() && value != PLACEHOLDER_VALUE
}
