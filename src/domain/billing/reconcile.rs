//! Reconciliation primitives.
//!
//! Defines the lookup key a user-record update is matched on and the patch
//! applied to every matched record.

use chrono::{DateTime, Utc};

use super::plan::Plan;

/// Subscription status stored on the user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
    Inactive,
}

impl SubscriptionStatus {
    /// Maps a provider-reported status to the stored status.
    ///
    /// Only the exact string "active" maps to `Active`. Everything else,
    /// including "trialing" and "past_due", is stored as inactive.
    pub fn from_provider(status: &str) -> Self {
        if status == "active" {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// The value written to the user record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Which user-record field an update is keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// Match on the email collected at checkout.
    ContactEmail(String),
    /// Match on the Stripe customer id.
    BillingCustomerId(String),
}

impl LookupKey {
    /// The value being matched.
    pub fn value(&self) -> &str {
        match self {
            Self::ContactEmail(email) => email,
            Self::BillingCustomerId(id) => id,
        }
    }

    /// Logical field name, used for logging and as the match column.
    pub fn field(&self) -> &'static str {
        match self {
            Self::ContactEmail(_) => "email",
            Self::BillingCustomerId(_) => "stripe_customer_id",
        }
    }
}

/// Field set applied to every user record matched by a lookup key.
///
/// Applying the same patch twice leaves the record in the same state, so
/// redelivered events are harmless.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPatch {
    /// New subscription status.
    pub status: SubscriptionStatus,
    /// Plan name to store.
    pub plan: String,
    /// Credit allowance to store.
    pub credits: i64,
    /// Stripe customer id to persist alongside the update, when newly learned.
    pub billing_customer_id: Option<String>,
    /// Reconciliation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl SubscriptionPatch {
    /// Builds a patch granting the given plan with the given status,
    /// stamped with the current time.
    pub fn for_plan(status: SubscriptionStatus, plan: &Plan) -> Self {
        Self {
            status,
            plan: plan.name.clone(),
            credits: plan.credits,
            billing_customer_id: None,
            updated_at: Utc::now(),
        }
    }

    /// Also persist a newly learned Stripe customer id.
    pub fn with_billing_customer_id(mut self, id: impl Into<String>) -> Self {
        self.billing_customer_id = Some(id.into());
        self
    }
}
