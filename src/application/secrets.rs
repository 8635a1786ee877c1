//! Production environment variable collection

use crate::domain::ports::{DeployEvent, DeployEventSink, Prompter};
use crate::domain::value_objects::{generate_secret_key, keys, EnvVars};
use crate::error::DeployResult;

pub const STRIPE_KEYS_URL: &str = "https://dashboard.stripe.com/apikeys";

/// Ask for the Stripe keys and optional market data keys.
///
/// `FLASK_ENV` and a freshly generated `SECRET_KEY` are always present.
/// The three Stripe keys are kept even when blank; blank optional keys are
/// left out entirely.
pub fn collect_production_env_vars(
    prompter: &dyn Prompter,
    events: &dyn DeployEventSink,
) -> DeployResult<EnvVars> {
    events.on_event(DeployEvent::Step {
        message: "Setting up monetization (Stripe)...".to_string(),
    });
    events.on_event(DeployEvent::Info {
        message: format!("Get your Stripe keys from: {}", STRIPE_KEYS_URL),
    });

    let publishable = prompter.secret("Stripe Publishable Key (pk_live_...)")?;
    let secret = prompter.secret("Stripe Secret Key (sk_live_...)")?;
    let webhook = prompter.secret("Stripe Webhook Secret (whsec_...)")?;

    let mut vars = EnvVars::new();
    vars.set(keys::FLASK_ENV, "production");
    vars.set(keys::SECRET_KEY, generate_secret_key());
    vars.set(keys::STRIPE_PUBLISHABLE_KEY, publishable.trim());
    vars.set(keys::STRIPE_SECRET_KEY, secret.trim());
    vars.set(keys::STRIPE_WEBHOOK_SECRET, webhook.trim());

    events.on_event(DeployEvent::Info {
        message: "Optional: Market Data API Keys (press Enter to skip)".to_string(),
    });
    let alpha_vantage = prompter.input("Alpha Vantage API Key")?;
    vars.set_optional(keys::ALPHA_VANTAGE_API_KEY, &alpha_vantage);
    let iex = prompter.input("IEX Cloud API Key")?;
    vars.set_optional(keys::IEX_API_KEY, &iex);

    tracing::debug!(count = vars.len(), "collected production env vars");
    Ok(vars)
}

/// Push every pushable entry with `push`, reporting the ones held back.
///
/// Stops at the first push that does not succeed and returns `Ok(false)`.
pub fn push_env_vars<F>(
    vars: &EnvVars,
    events: &dyn DeployEventSink,
    mut push: F,
) -> DeployResult<bool>
where
    F: FnMut(&str, &str) -> DeployResult<bool>,
{
    for key in vars.skipped_keys() {
        events.on_event(DeployEvent::SecretSkipped {
            key: key.to_string(),
        });
    }
    for (key, value) in vars.pushable() {
        if !push(key, value)? {
            return Ok(false);
        }
    }
    Ok(true)
}
