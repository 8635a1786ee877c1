//! Billing Gateway Port
//!
//! Product and price creation on the subscription billing provider.

use crate::domain::value_objects::Interval;
use crate::error::DeployResult;

/// Request to create a recurring price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrice<'a> {
    pub product_id: &'a str,
    pub unit_amount: u64,
    pub currency: &'a str,
    pub interval: Interval,
}

/// An authenticated session with the billing provider
pub trait BillingGateway {
    /// Create a product; returns its id.
    fn create_product(&self, name: &str, description: &str) -> DeployResult<String>;

    /// Create a recurring price; returns its id.
    fn create_price(&self, price: &NewPrice<'_>) -> DeployResult<String>;
}

/// Opens a gateway for a secret API key
pub trait BillingConnector {
    fn connect(&self, secret_key: &str) -> DeployResult<Box<dyn BillingGateway>>;
}
