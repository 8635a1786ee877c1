//! Stripe billing gateway
//!
//! Form-encoded REST calls against `/v1/products` and `/v1/prices`.
//! Every create carries an `Idempotency-Key` derived from the request so a
//! transport-level resend within one setup run cannot duplicate objects.

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::domain::ports::{BillingConnector, BillingGateway, NewPrice};
use crate::domain::value_objects::generate_secret_key;
use crate::error::{DeployError, DeployResult};

pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Creates authenticated Stripe sessions
#[derive(Debug, Clone)]
pub struct StripeConnector {
    api_base: String,
}

impl StripeConnector {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }
}

impl BillingConnector for StripeConnector {
    fn connect(&self, secret_key: &str) -> DeployResult<Box<dyn BillingGateway>> {
        Ok(Box::new(StripeGateway::new(&self.api_base, secret_key)?))
    }
}

/// One authenticated Stripe session
#[derive(Debug)]
pub struct StripeGateway {
    client: Client,
    api_base: String,
    /// Scopes idempotency keys to this setup run
    run_id: String,
}

#[derive(Debug, Deserialize)]
struct Created {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl StripeGateway {
    pub fn new(api_base: &str, secret_key: &str) -> DeployResult<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", secret_key.trim()))
            .map_err(|_| DeployError::BillingApi {
                status: 0,
                message: "secret key contains characters not allowed in a header".to_string(),
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("optionscope-deploy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            run_id: generate_secret_key(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn post_form(&self, path: &str, form: &[(&str, String)]) -> DeployResult<String> {
        let key = idempotency_key(path, &self.run_id, form);
        tracing::debug!(path, "billing API request");

        let response = self
            .client
            .post(self.url(path))
            .header(IDEMPOTENCY_KEY_HEADER, key)
            .form(form)
            .send()?;

        handle_response(response)
    }
}

impl BillingGateway for StripeGateway {
    fn create_product(&self, name: &str, description: &str) -> DeployResult<String> {
        self.post_form(
            "/v1/products",
            &[
                ("name", name.to_string()),
                ("description", description.to_string()),
            ],
        )
    }

    fn create_price(&self, price: &NewPrice<'_>) -> DeployResult<String> {
        self.post_form(
            "/v1/prices",
            &[
                ("product", price.product_id.to_string()),
                ("unit_amount", price.unit_amount.to_string()),
                ("currency", price.currency.to_string()),
                ("recurring[interval]", price.interval.as_str().to_string()),
            ],
        )
    }
}

fn handle_response(response: Response) -> DeployResult<String> {
    let status = response.status();
    if status.is_success() {
        let created: Created = response.json()?;
        return Ok(created.id);
    }

    let text = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&text)
        .ok()
        .and_then(|env| match (env.error.message, env.error.kind) {
            (Some(message), _) => Some(message),
            (None, Some(kind)) => Some(kind),
            (None, None) => None,
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    Err(DeployError::BillingApi {
        status: status.as_u16(),
        message,
    })
}

/// Stable key for (endpoint, run, form body)
pub fn idempotency_key(path: &str, run_id: &str, form: &[(&str, String)]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    hasher.update(b"\n");
    hasher.update(run_id.as_bytes());
    for (name, value) in form {
        hasher.update(b"\n");
        hasher.update(name.as_bytes());
        hasher.update(b"=");
        hasher.update(value.as_bytes());
    }
    format!("optionscope_{:x}", hasher.finalize())
}
