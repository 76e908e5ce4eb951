//! HTTP client for the remote confidence classifier.
//!
//! The classifier is optional. When no endpoint or bearer token is
//! configured, or the circuit breaker is open, `analyze` answers from
//! local heuristics instead. Remote failures are never surfaced to the
//! caller.

mod breaker;
mod features;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Confidence;
use breaker::CircuitBreaker;

pub use breaker::BreakerState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);
const RETRY_BASE_DELAY: Duration = Duration::from_millis(100);
const MAX_ATTEMPTS: u32 = 2;
const BREAKER_FAILURE_THRESHOLD: u32 = 3;
const BREAKER_COOLDOWN: Duration = Duration::from_secs(60);

/// Connection settings for the confidence classifier service.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the service (e.g. `http://127.0.0.1:8321`).
    pub base_url: String,
    /// Bearer credential sent on every request.
    pub token: String,
}

/// Errors internal to the remote path. Callers of [`ConfidenceClient::analyze`]
/// never see these; they exist for health checks and breaker bookkeeping.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The HTTP client could not be initialised.
    #[error("failed to initialize HTTP client: {0}")]
    ClientInit(String),

    /// An HTTP request to the classifier failed or timed out.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The classifier answered with a non-success status code.
    #[error("classifier returned status {0}")]
    UnexpectedStatus(u16),

    /// No endpoint or token is configured.
    #[error("remote analysis is not configured")]
    Disabled,
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    secret_value: &'a str,
    context: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variable_name: Option<&'a str>,
    features: Vec<f64>,
}

// The service also reports `risk_level` and `is_likely_secret`; serde
// drops fields we never read.
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    enhanced_confidence: String,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Client for escalating borderline findings to the remote classifier.
///
/// Safe to share across concurrent scans; breaker state is atomic and a
/// single instance sees every outcome.
pub struct ConfidenceClient {
    config: Option<RemoteConfig>,
    http: reqwest::Client,
    breaker: CircuitBreaker,
}

impl ConfidenceClient {
    /// Creates a client. Passing `None` produces a client that answers
    /// every call from local heuristics.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::ClientInit`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: Option<RemoteConfig>) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(crate::USER_AGENT)
            .build()
            .map_err(|e| RemoteError::ClientInit(e.to_string()))?;

        Ok(Self {
            config,
            http,
            breaker: CircuitBreaker::new(BREAKER_FAILURE_THRESHOLD, BREAKER_COOLDOWN),
        })
    }

    /// Whether a remote endpoint is configured at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Current circuit breaker state.
    #[must_use]
    pub fn breaker_state(&self) -> BreakerState {
        self.breaker.state()
    }

    /// Classifies a candidate secret, falling back to local heuristics
    /// when the remote path is disabled, open, or failing.
    ///
    /// This never returns an error and never blocks longer than the
    /// request timeout plus one retry backoff.
    pub async fn analyze(
        &self,
        secret: &str,
        context: &str,
        variable_name: Option<&str>,
    ) -> Confidence {
        let Some(config) = &self.config else {
            return features::fallback_confidence(secret, context, variable_name);
        };

        if !self.breaker.allow_request() {
            return features::fallback_confidence(secret, context, variable_name);
        }

        match self
            .request_with_retry(config, secret, context, variable_name)
            .await
        {
            Ok(confidence) => {
                self.breaker.record_success();
                confidence
            }
            Err(_) => {
                self.breaker.record_failure();
                features::fallback_confidence(secret, context, variable_name)
            }
        }
    }

    /// Probes the classifier's health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Disabled`] when no endpoint is configured,
    /// or the underlying HTTP error when the probe fails.
    pub async fn health(&self) -> Result<bool, RemoteError> {
        let config = self.config.as_ref().ok_or(RemoteError::Disabled)?;

        let response = self
            .http
            .get(format!("{}/health", config.base_url))
            .bearer_auth(&config.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RemoteError::UnexpectedStatus(response.status().as_u16()));
        }

        let body: HealthResponse = response.json().await?;
        Ok(body.status == "ok")
    }

    async fn request_with_retry(
        &self,
        config: &RemoteConfig,
        secret: &str,
        context: &str,
        variable_name: Option<&str>,
    ) -> Result<Confidence, RemoteError> {
        let mut delay = RETRY_BASE_DELAY;
        let mut attempt = 1;
        loop {
            match self.request_once(config, secret, context, variable_name).await {
                Ok(confidence) => return Ok(confidence),
                Err(err) => {
                    if attempt >= MAX_ATTEMPTS {
                        return Err(err);
                    }
                    attempt += 1;
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }

    async fn request_once(
        &self,
        config: &RemoteConfig,
        secret: &str,
        context: &str,
        variable_name: Option<&str>,
    ) -> Result<Confidence, RemoteError> {
        let request = AnalyzeRequest {
            secret_value: secret,
            context,
            variable_name,
            features: features::feature_vector(secret, context, variable_name),
        };

        let response = self
            .http
            .post(format!("{}/analyze", config.base_url))
            .bearer_auth(&config.token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RemoteError::UnexpectedStatus(response.status().as_u16()));
        }

        let body: AnalyzeResponse = response.json().await?;
        Ok(body
            .enhanced_confidence
            .parse()
            .unwrap_or_else(|_| features::fallback_confidence(secret, context, variable_name)))
    }
}
