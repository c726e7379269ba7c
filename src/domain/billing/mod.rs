//! Billing domain module.
//!
//! Handles Stripe webhook verification, event classification, plan
//! resolution, and the patches applied to user records.
//!
//! # Module Structure
//!
//! - `event` - Webhook event envelope and payload views
//! - `signature` - Stripe-Signature verification (HMAC-SHA256)
//! - `plan` - Price id to plan catalog
//! - `reconcile` - Lookup keys and subscription patches
//! - `errors` - Webhook error taxonomy

mod errors;
mod event;
mod plan;
mod reconcile;
mod signature;

pub use errors::WebhookError;
pub use event::{
    BillingEvent, CheckoutSession, CustomerDetails, EventData, EventKind, PriceRef,
    SubscriptionItem, SubscriptionItems, SubscriptionView,
};
pub use plan::{Plan, PlanCatalog, FALLBACK_PLAN_CREDITS, FALLBACK_PLAN_NAME};
pub use reconcile::{LookupKey, SubscriptionPatch, SubscriptionStatus};
pub use signature::{
    SignatureHeader, WebhookVerifier, DEFAULT_MAX_CLOCK_SKEW_SECS, DEFAULT_MAX_EVENT_AGE_SECS,
};

#[cfg(test)]
pub use event::BillingEventBuilder;
#[cfg(test)]
pub use signature::compute_test_signature;
