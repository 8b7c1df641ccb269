//! HTTP client for the customer lookup endpoint.

use std::time::Duration;

use tracing::{debug, warn};

use super::model::Customer;
use crate::config::ComposerConfig;
use crate::error::{Error, Result};

/// Read-only client for the customer email lookup endpoint.
///
/// The endpoint takes no parameters and always answers with the full customer
/// list; all filtering happens client-side. Cloning is cheap and shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    http: reqwest::Client,
    url: String,
}

impl CustomerClient {
    /// Creates a client for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (e.g. TLS
    /// backend initialization failure).
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("email-composer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &ComposerConfig) -> Result<Self> {
        Self::new(config.lookup_url.clone(), config.request_timeout())
    }

    /// Fetches every customer record from the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failure, [`Error::Status`] if the
    /// endpoint answers with a non-success status, and [`Error::Http`] if the
    /// body is not a JSON array of customer records.
    pub async fn fetch_all(&self) -> Result<Vec<Customer>> {
        debug!(url = %self.url, "Fetching customer list");

        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "Customer lookup failed");
            return Err(Error::Status(status.as_u16()));
        }

        let customers: Vec<Customer> = response.json().await?;
        debug!(count = customers.len(), "Customer list received");
        Ok(customers)
    }
}
