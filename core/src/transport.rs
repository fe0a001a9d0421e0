//! Submission transport
//!
//! The controller hands the collected values to a [`SubmitTransport`] once
//! every field validates. Implementations POST the values as JSON and report
//! whether the server accepted them; the browser build uses `fetch`, native
//! callers use `reqwest`.

use async_trait::async_trait;
use thiserror::Error;

use crate::state::Values;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Failed to serialize body: {0}")]
    Serialize(String),
}

/// Sends form values to the form's action endpoint.
///
/// `Ok(())` means the server answered with a 2xx status. Futures are not
/// required to be `Send` so browser transports can implement this trait.
#[async_trait(?Send)]
pub trait SubmitTransport {
    async fn send(&self, values: &Values) -> Result<(), TransportError>;
}
