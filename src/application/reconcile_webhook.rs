//! ReconcileWebhookHandler - Command handler for Stripe webhook reconciliation.
//!
//! Verifies the delivery, classifies the event, and applies the resulting
//! subscription patch to user records. Patches carry absolute state, so a
//! redelivered event converges to the same record instead of compounding.

use std::sync::Arc;

use crate::domain::billing::{
    BillingEvent, CheckoutSession, EventKind, LookupKey, PlanCatalog, SubscriptionPatch,
    SubscriptionStatus, SubscriptionView, WebhookError, WebhookVerifier,
};
use crate::ports::{BillingProvider, UserStore};

/// Command to reconcile a webhook delivery.
#[derive(Debug, Clone)]
pub struct ReconcileWebhookCommand {
    /// Raw webhook payload, exactly as received.
    pub payload: Vec<u8>,
    /// Stripe-Signature header value.
    pub signature: String,
}

/// Result of webhook reconciliation.
#[derive(Debug, Clone)]
pub enum ReconcileWebhookResult {
    /// A user record patch was applied.
    Reconciled {
        event_type: String,
        rows_affected: u64,
    },
    /// Event verified but intentionally not acted on.
    Ignored { event_type: String },
}

/// Handler for reconciling Stripe webhook deliveries against user records.
pub struct ReconcileWebhookHandler {
    verifier: WebhookVerifier,
    plans: PlanCatalog,
    provider: Arc<dyn BillingProvider>,
    store: Arc<dyn UserStore>,
}

impl ReconcileWebhookHandler {
    pub fn new(
        verifier: WebhookVerifier,
        plans: PlanCatalog,
        provider: Arc<dyn BillingProvider>,
        store: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            verifier,
            plans,
            provider,
            store,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReconcileWebhookCommand,
    ) -> Result<ReconcileWebhookResult, WebhookError> {
        // 1. Verify signature and parse event
        let event = self.verifier.verify_and_parse(&cmd.payload, &cmd.signature)?;

        tracing::debug!(
            event_id = %event.id,
            event_type = %event.event_type,
            livemode = event.is_live(),
            "Webhook verified"
        );

        // 2. Process based on event kind
        match event.kind() {
            EventKind::CheckoutCompleted => self.on_checkout_completed(&event).await,
            EventKind::SubscriptionDeleted => self.on_subscription_deleted(&event).await,
            EventKind::SubscriptionUpdated => self.on_subscription_updated(&event).await,
            EventKind::Unrecognized => {
                // Acknowledge so the provider stops redelivering
                tracing::info!(
                    event_id = %event.id,
                    event_type = %event.event_type,
                    "Unhandled event type"
                );
                Ok(ReconcileWebhookResult::Ignored {
                    event_type: event.event_type.clone(),
                })
            }
        }
    }

    /// Checkout completed: grant the purchased plan, keyed on the checkout
    /// email, and persist the Stripe customer id for later events.
    async fn on_checkout_completed(
        &self,
        event: &BillingEvent,
    ) -> Result<ReconcileWebhookResult, WebhookError> {
        let session: CheckoutSession = event
            .deserialize_object()
            .map_err(|e| WebhookError::MalformedEvent(e.to_string()))?;

        // The provider round trip happens before the contact check
        let line_items = self
            .provider
            .list_line_items(&session.id)
            .await
            .map_err(|e| WebhookError::Provider(e.to_string()))?;

        let price_id = line_items.first().and_then(|item| item.price_id.as_deref());
        let plan = self.plans.resolve(price_id);

        let email = session
            .customer_email()
            .ok_or(WebhookError::MissingCustomerContact)?;

        let mut patch = SubscriptionPatch::for_plan(SubscriptionStatus::Active, plan);
        if let Some(customer) = &session.customer {
            patch = patch.with_billing_customer_id(customer);
        }

        self.apply(
            &LookupKey::ContactEmail(email.to_string()),
            &patch,
            &event.event_type,
        )
        .await
    }

    /// Subscription deleted: reset the record to the fallback plan, keyed on
    /// the Stripe customer id.
    async fn on_subscription_deleted(
        &self,
        event: &BillingEvent,
    ) -> Result<ReconcileWebhookResult, WebhookError> {
        let sub: SubscriptionView = event
            .deserialize_object()
            .map_err(|e| WebhookError::MalformedEvent(e.to_string()))?;

        let patch = SubscriptionPatch::for_plan(SubscriptionStatus::Inactive, self.plans.fallback());

        self.apply(
            &LookupKey::BillingCustomerId(sub.customer),
            &patch,
            &event.event_type,
        )
        .await
    }

    /// Subscription updated: re-derive status and plan from the subscription
    /// object, keyed on the Stripe customer id.
    async fn on_subscription_updated(
        &self,
        event: &BillingEvent,
    ) -> Result<ReconcileWebhookResult, WebhookError> {
        let sub: SubscriptionView = event
            .deserialize_object()
            .map_err(|e| WebhookError::MalformedEvent(e.to_string()))?;

        let status = SubscriptionStatus::from_provider(&sub.status);
        let plan = self.plans.resolve(sub.price_id());
        let patch = SubscriptionPatch::for_plan(status, plan);

        self.apply(
            &LookupKey::BillingCustomerId(sub.customer.clone()),
            &patch,
            &event.event_type,
        )
        .await
    }

    /// Apply a patch and surface row-count anomalies.
    ///
    /// Zero or multiple matched rows is logged, not failed: the patch is
    /// absolute, so acknowledging keeps redeliveries convergent while the
    /// anomaly is investigated.
    async fn apply(
        &self,
        key: &LookupKey,
        patch: &SubscriptionPatch,
        event_type: &str,
    ) -> Result<ReconcileWebhookResult, WebhookError> {
        let outcome = self
            .store
            .update_where(key, patch)
            .await
            .map_err(|e| WebhookError::Store(e.to_string()))?;

        if outcome.is_exact() {
            tracing::info!(
                field = key.field(),
                plan = %patch.plan,
                status = patch.status.as_str(),
                event_type,
                "User record reconciled"
            );
        } else {
            tracing::warn!(
                field = key.field(),
                rows_affected = outcome.rows_affected,
                event_type,
                "Update matched an unexpected number of rows"
            );
        }

        Ok(ReconcileWebhookResult::Reconciled {
            event_type: event_type.to_string(),
            rows_affected: outcome.rows_affected,
        })
    }
}
