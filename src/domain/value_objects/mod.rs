//! Value Objects
//!
//! Immutable types with no I/O of their own.

pub mod billing_plan;
pub mod env_vars;
pub mod platform;
pub mod secret_key;

pub use billing_plan::{BillingPlan, CreatedPrices, Interval, PricePoint, Tier};
pub use env_vars::{is_pushable_value, keys, EnvVars, PLACEHOLDER_VALUE};
pub use platform::{Platform, UnsupportedPlatform};
pub use secret_key::generate_secret_key;
