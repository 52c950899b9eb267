//! random.org HTTP oracle.

use std::time::Duration;

use meal_core::{RandomError, RandomOracle};
use reqwest::blocking::Client;

/// One decimal fraction, two digits, plain text.
pub const RANDOM_ORG_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

/// Upper bound on a single draw request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Draws decimal fractions from random.org.
///
/// Each call performs one blocking GET; nothing is cached or retried.
pub struct RandomOrgOracle {
    /// Endpoint returning a single number as plain text
    url: String,

    /// HTTP client (carries the timeout)
    http_client: Client,
}

impl RandomOrgOracle {
    /// Oracle for the public random.org endpoint with the default timeout.
    pub fn new() -> Result<Self, RandomError> {
        Self::with_endpoint(RANDOM_ORG_URL, DEFAULT_TIMEOUT)
    }

    /// Oracle for a custom endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::Request`] if the HTTP client cannot be built.
    pub fn with_endpoint(url: impl Into<String>, timeout: Duration) -> Result<Self, RandomError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RandomError::Request(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            http_client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RandomOracle for RandomOrgOracle {
    fn random_fraction(&self) -> Result<f64, RandomError> {
        tracing::debug!("Fetching random number from {}", self.url);

        let body = self
            .http_client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(classify)?;

        let value = parse_fraction(&body)?;
        tracing::info!("Received random number: {:.3}", value);
        Ok(value)
    }
}

/// Parse the plain-text body returned by random.org.
///
/// Surrounding whitespace is ignored. Anything that is not a finite number is
/// rejected; the value itself is not range-checked.
pub fn parse_fraction(body: &str) -> Result<f64, RandomError> {
    let trimmed = body.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            tracing::error!("Invalid response from random.org: {}", trimmed);
            Err(RandomError::InvalidResponse(trimmed.to_string()))
        }
    }
}

fn classify(err: reqwest::Error) -> RandomError {
    if err.is_timeout() {
        tracing::error!("Request to random.org timed out.");
        RandomError::Timeout
    } else {
        tracing::error!("Request to random.org failed: {}", err);
        RandomError::Request(err.to_string())
    }
}
