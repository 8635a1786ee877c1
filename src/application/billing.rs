//! Stripe product and price setup

use crate::domain::ports::{
    BillingConnector, BillingGateway, DeployEvent, DeployEventSink, NewPrice, Prompter,
};
use crate::domain::value_objects::{BillingPlan, CreatedPrices};
use crate::error::DeployResult;

/// Create the plan's products and recurring prices.
///
/// A blank key skips setup without touching the API. The first failing call
/// ends the sequence; objects created before it are left in place. Returns
/// the created prices only when every call succeeded.
pub fn setup_billing_products(
    prompter: &dyn Prompter,
    connector: &dyn BillingConnector,
    plan: &BillingPlan,
    events: &dyn DeployEventSink,
) -> DeployResult<Option<CreatedPrices>> {
    events.on_event(DeployEvent::Step {
        message: "Setting up Stripe products...".to_string(),
    });

    let secret_key = prompter.secret("Enter your Stripe Secret Key")?;
    let secret_key = secret_key.trim();
    if secret_key.is_empty() {
        events.on_event(DeployEvent::BillingSkipped);
        return Ok(None);
    }

    let created = connector
        .connect(secret_key)
        .and_then(|gateway| create_plan(gateway.as_ref(), plan));

    match created {
        Ok(prices) => {
            events.on_event(DeployEvent::BillingConfigured {
                env_lines: prices.env_lines(),
            });
            Ok(Some(prices))
        }
        Err(err) => {
            tracing::warn!(error = %err, "billing setup aborted");
            events.on_event(DeployEvent::Failed {
                message: format!("Error setting up Stripe: {}", err),
            });
            Ok(None)
        }
    }
}

/// Product, monthly price, yearly price; tier by tier.
fn create_plan(gateway: &dyn BillingGateway, plan: &BillingPlan) -> DeployResult<CreatedPrices> {
    let mut prices = CreatedPrices::default();
    for tier in &plan.tiers {
        let product_id = gateway.create_product(tier.name, tier.description)?;
        tracing::info!(tier = tier.id, product = %product_id, "created product");

        for point in tier.price_points() {
            let price_id = gateway.create_price(&NewPrice {
                product_id: &product_id,
                unit_amount: point.unit_amount,
                currency: &plan.currency,
                interval: point.interval,
            })?;
            prices.push(tier.env_var(point.interval), price_id);
        }
    }
    Ok(prices)
}
