//! Stripe billing provider adapter.
//!
//! Implements the `BillingProvider` port for Stripe integration. Webhook
//! signature verification lives in the domain layer; this adapter covers the
//! outbound API calls the reconciler needs.
//!
//! # Configuration
//!
//! Required environment variables:
//! - `CREDIT_SYNC__STRIPE__API_KEY`: Stripe secret API key
//! - `CREDIT_SYNC__STRIPE__WEBHOOK_SECRET`: Webhook signing secret (whsec_...)

mod client;
mod types;

pub use client::StripeClient;
pub use types::{LineItemList, StripeLineItem, StripePrice};
