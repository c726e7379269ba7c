//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API exposing the webhook endpoint
//! - `postgres` - User record persistence via sqlx
//! - `stripe` - Stripe API client for line-item lookups

pub mod http;
pub mod postgres;
pub mod stripe;

pub use http::{app_router, AppState};
pub use postgres::PostgresUserStore;
pub use stripe::StripeClient;
