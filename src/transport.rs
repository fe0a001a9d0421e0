//! Native submission transport
//!
//! Sends form values the same way the browser form does, for callers
//! outside the browser (scripts, tests, other services).

use async_trait::async_trait;
use formkit_core::{SubmitTransport, TransportError, Values};
use reqwest::header::ACCEPT;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    action: String,
}

impl HttpTransport {
    /// `action` is the absolute URL the form posts to
    pub fn new(action: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_timeout(action, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(action: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self::with_client(client, action))
    }

    pub fn with_client(client: reqwest::Client, action: impl Into<String>) -> Self {
        Self {
            client,
            action: action.into(),
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

#[async_trait(?Send)]
impl SubmitTransport for HttpTransport {
    async fn send(&self, values: &Values) -> Result<(), TransportError> {
        let response = self
            .client
            .post(&self.action)
            .header(ACCEPT, "application/json")
            .json(values)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::debug!(%status, action = %self.action, "submission rejected");
            Err(TransportError::Status(status.as_u16()))
        }
    }
}
