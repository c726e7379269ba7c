//! Axum router configuration for the webhook service.
//!
//! This module defines the route structure and wires routes to their
//! corresponding handlers. Middleware layers are applied at startup.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{handle_webhook, health, AppState};

/// Create the service router.
///
/// # Routes
///
/// - `GET /` - Liveness probe
/// - `POST /webhook` - Stripe webhook deliveries (no auth, signature verified)
pub fn app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/webhook", post(handle_webhook))
}
