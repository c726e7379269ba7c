//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod reconcile_webhook;

pub use reconcile_webhook::{
    ReconcileWebhookCommand, ReconcileWebhookHandler, ReconcileWebhookResult,
};
