//! HTTP adapter - REST API implementation.
//!
//! Exposes the webhook service via two routes:
//! - `GET /` - Liveness probe
//! - `POST /webhook` - Handle Stripe webhooks

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export key types for convenience
pub use handlers::AppState;
pub use routes::app_router;
