//! HTTP DTOs for the webhook endpoint.
//!
//! These types define the JSON response structure Stripe sees. The shapes are
//! part of the wire contract and must stay stable.

use serde::Serialize;

/// Acknowledgement body returned for every accepted delivery.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

impl WebhookAck {
    pub fn received() -> Self {
        Self { received: true }
    }
}

/// Error body returned for every rejected delivery.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
