use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::domain::SubmissionPayload;

/// Raw HTTP answer: status code plus the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not build HTTP client: {0}")]
    Client(String),
    #[error("request failed: {0}")]
    Request(String),
}

/// Sends one JSON submission and waits for the answer.
pub trait Transport {
    fn post_json(
        &self,
        url: &str,
        payload: &SubmissionPayload,
    ) -> Result<TransportResponse, TransportError>;
}

/// Blocking HTTP transport. Requests are never retried and carry no timeout.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|err| TransportError::Client(err.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        url: &str,
        payload: &SubmissionPayload,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}
