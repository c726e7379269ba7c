//! Stripe webhook event types.
//!
//! Defines the structures for parsing Stripe webhook payloads.
//! Only fields relevant to reconciliation are captured.

use serde::{Deserialize, Serialize};

/// Stripe webhook event (simplified).
///
/// Contains the essential fields needed for reconciliation. Additional
/// fields from Stripe's full event schema are ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BillingEvent {
    /// Unique identifier for the event (evt_xxx format).
    pub id: String,

    /// Type of event (e.g., "checkout.session.completed").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Time at which the event was created (Unix timestamp).
    pub created: i64,

    /// Object containing event-specific data.
    pub data: EventData,

    /// Whether this is a live mode event (vs test mode).
    #[serde(default)]
    pub livemode: bool,
}

/// Container for event-specific data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventData {
    /// The object that triggered the event (polymorphic based on event type).
    pub object: serde_json::Value,

    /// Previous values for updated attributes (only for update events).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_attributes: Option<serde_json::Value>,
}

impl BillingEvent {
    /// Returns true if this is a live mode event.
    pub fn is_live(&self) -> bool {
        self.livemode
    }

    /// Returns true if this is a test mode event.
    pub fn is_test(&self) -> bool {
        !self.livemode
    }

    /// Classify the event type into a known variant.
    pub fn kind(&self) -> EventKind {
        EventKind::from_str(&self.event_type)
    }

    /// Attempts to deserialize the data object as the specified type.
    pub fn deserialize_object<T: serde::de::DeserializeOwned>(
        &self,
    ) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }
}

/// Event types the reconciler acts on.
///
/// Anything outside this set maps to `Unrecognized` and is acknowledged
/// without touching user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Checkout session completed successfully.
    CheckoutCompleted,
    /// Customer subscription was deleted.
    SubscriptionDeleted,
    /// Customer subscription was updated.
    SubscriptionUpdated,
    /// Unknown or unhandled event type.
    Unrecognized,
}

impl EventKind {
    /// Parse event kind from the wire event type string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "checkout.session.completed" => Self::CheckoutCompleted,
            "customer.subscription.deleted" => Self::SubscriptionDeleted,
            "customer.subscription.updated" => Self::SubscriptionUpdated,
            _ => Self::Unrecognized,
        }
    }

    /// Convert to the Stripe event type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckoutCompleted => "checkout.session.completed",
            Self::SubscriptionDeleted => "customer.subscription.deleted",
            Self::SubscriptionUpdated => "customer.subscription.updated",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Checkout session payload view.
///
/// Captures the fields the reconciler reads from a
/// `checkout.session.completed` event.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    /// Session identifier (cs_xxx format).
    pub id: String,

    /// Stripe customer id attached to the session, if one exists yet.
    #[serde(default)]
    pub customer: Option<String>,

    /// Contact details collected during checkout.
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
}

/// Contact details nested inside a checkout session.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub email: Option<String>,
}

impl CheckoutSession {
    /// Customer email from the session, treating an empty string as absent.
    pub fn customer_email(&self) -> Option<&str> {
        self.customer_details
            .as_ref()
            .and_then(|details| details.email.as_deref())
            .filter(|email| !email.is_empty())
    }
}

/// Subscription payload view.
///
/// Shared by `customer.subscription.updated` and
/// `customer.subscription.deleted` events.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionView {
    /// Subscription identifier (sub_xxx format).
    pub id: String,

    /// Stripe customer id the subscription belongs to.
    pub customer: String,

    /// Provider-reported status (e.g. "active", "past_due", "canceled").
    pub status: String,

    /// Line items on the subscription.
    #[serde(default)]
    pub items: SubscriptionItems,
}

/// List wrapper for subscription items.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionItems {
    #[serde(default)]
    pub data: Vec<SubscriptionItem>,
}

/// A single subscription line item.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionItem {
    #[serde(default)]
    pub price: Option<PriceRef>,
}

/// Price reference nested inside a subscription item.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRef {
    pub id: String,
}

impl SubscriptionView {
    /// Price id of the first subscription item, if any.
    pub fn price_id(&self) -> Option<&str> {
        self.items
            .data
            .first()
            .and_then(|item| item.price.as_ref())
            .map(|price| price.id.as_str())
    }
}

/// Builder for creating test BillingEvent instances.
#[cfg(test)]
pub struct BillingEventBuilder {
    id: String,
    event_type: String,
    created: i64,
    object: serde_json::Value,
    previous_attributes: Option<serde_json::Value>,
    livemode: bool,
}

#[cfg(test)]
impl Default for BillingEventBuilder {
    fn default() -> Self {
        Self {
            id: "evt_test_123".to_string(),
            event_type: "checkout.session.completed".to_string(),
            created: chrono::Utc::now().timestamp(),
            object: serde_json::json!({}),
            previous_attributes: None,
            livemode: false,
        }
    }
}

#[cfg(test)]
impl BillingEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn created(mut self, created: i64) -> Self {
        self.created = created;
        self
    }

    pub fn object(mut self, object: serde_json::Value) -> Self {
        self.object = object;
        self
    }

    pub fn livemode(mut self, livemode: bool) -> Self {
        self.livemode = livemode;
        self
    }

    pub fn build(self) -> BillingEvent {
        BillingEvent {
            id: self.id,
            event_type: self.event_type,
            created: self.created,
            data: EventData {
                object: self.object,
                previous_attributes: self.previous_attributes,
            },
            livemode: self.livemode,
        }
    }
}
