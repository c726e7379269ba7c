//! Stripe billing provider adapter.
//!
//! Implements the `BillingProvider` port against the Stripe REST API.
//! Checkout webhook payloads omit line items, so the reconciler calls back
//! into Stripe to learn what was purchased.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{BillingProvider, LineItem, ProviderError};

use super::types::LineItemList;

/// Stripe API client.
pub struct StripeClient {
    api_key: SecretString,
    api_base_url: String,
    http_client: reqwest::Client,
}

impl StripeClient {
    /// Create a client for the live Stripe API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[async_trait]
impl BillingProvider for StripeClient {
    async fn list_line_items(&self, session_id: &str) -> Result<Vec<LineItem>, ProviderError> {
        let url = format!(
            "{}/v1/checkout/sessions/{}/line_items",
            self.api_base_url, session_id
        );

        let response = self
            .http_client
            .get(&url)
            .basic_auth(self.api_key.expose_secret(), Option::<&str>::None)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status,
                session_id,
                "Stripe line items request failed"
            );
            return Err(ProviderError::Api {
                status,
                message: error_text,
            });
        }

        let list: LineItemList = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("Failed to parse Stripe response: {}", e)))?;

        Ok(list
            .data
            .into_iter()
            .map(|item| LineItem {
                price_id: item.price.map(|p| p.id),
                quantity: item.quantity.unwrap_or(1),
            })
            .collect())
    }
}
