//! Browser transport for form submissions

use async_trait::async_trait;
use formkit_core::{SubmitTransport, TransportError, Values};
use gloo_net::http::Request;

/// POSTs form values as JSON with `fetch`
#[derive(Clone, Debug)]
pub struct FetchTransport {
    action: String,
}

impl FetchTransport {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

#[async_trait(?Send)]
impl SubmitTransport for FetchTransport {
    async fn send(&self, values: &Values) -> Result<(), TransportError> {
        let response = Request::post(&self.action)
            .header("Accept", "application/json")
            .json(values)
            .map_err(|e| TransportError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(TransportError::Status(response.status()))
        }
    }
}
