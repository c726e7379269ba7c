//! Billing provider port for Stripe API access.
//!
//! Defines the contract for fetching data the webhook payload does not
//! carry, currently just the line items of a completed checkout session.
//!
//! # Design
//!
//! - **Read-only**: the reconciler never mutates provider state
//! - **Gateway agnostic**: nothing Stripe-specific leaks through the types

use async_trait::async_trait;

/// Port for billing provider lookups.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// List the line items of a checkout session.
    ///
    /// Ordering matches the provider's ordering; the reconciler only
    /// reads the first item.
    async fn list_line_items(&self, session_id: &str) -> Result<Vec<LineItem>, ProviderError>;
}

/// A single line item on a checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Price id the item was purchased under, when the provider reports one.
    pub price_id: Option<String>,

    /// Purchased quantity.
    pub quantity: i64,
}

/// Errors from billing provider lookups.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Provider returned a non-success status.
    #[error("provider API error: status {status}: {message}")]
    Api { status: u16, message: String },

    /// Request never reached the provider or the connection failed.
    #[error("provider transport error: {0}")]
    Transport(String),

    /// Provider response could not be decoded.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}
