//! Stripe configuration

use serde::Deserialize;

use crate::domain::billing::{DEFAULT_MAX_CLOCK_SKEW_SECS, DEFAULT_MAX_EVENT_AGE_SECS};

use super::error::ValidationError;

/// Stripe configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StripeConfig {
    /// Stripe API key
    pub api_key: String,

    /// Stripe webhook signing secret
    pub webhook_secret: String,

    /// Base URL for Stripe API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Maximum accepted age of a signed event in seconds
    #[serde(default = "default_max_event_age")]
    pub max_event_age_secs: i64,

    /// Clock skew tolerance for future timestamps in seconds
    #[serde(default = "default_max_clock_skew")]
    pub max_clock_skew_secs: i64,
}

impl StripeConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.api_key.starts_with("sk_test_")
    }

    /// Check if using Stripe live mode
    pub fn is_live_mode(&self) -> bool {
        self.api_key.starts_with("sk_live_")
    }

    /// Validate Stripe configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }
        if self.webhook_secret.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_WEBHOOK_SECRET"));
        }

        // Verify key prefixes for safety
        if !self.api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if !self.webhook_secret.starts_with("whsec_") {
            return Err(ValidationError::InvalidStripeWebhookSecret);
        }

        if self.max_event_age_secs <= 0 || self.max_clock_skew_secs <= 0 {
            return Err(ValidationError::InvalidSignatureTolerance);
        }

        Ok(())
    }
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            webhook_secret: String::new(),
            api_base_url: default_api_base_url(),
            max_event_age_secs: default_max_event_age(),
            max_clock_skew_secs: default_max_clock_skew(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.stripe.com".to_string()
}

fn default_max_event_age() -> i64 {
    DEFAULT_MAX_EVENT_AGE_SECS
}

fn default_max_clock_skew() -> i64 {
    DEFAULT_MAX_CLOCK_SKEW_SECS
}
