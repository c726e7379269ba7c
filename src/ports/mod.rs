//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Provider Ports
//!
//! - `BillingProvider` - Read access to the Stripe API
//!
//! ## Storage Ports
//!
//! - `UserStore` - Subscription state updates on user records

mod billing_provider;
mod user_store;

pub use billing_provider::{BillingProvider, LineItem, ProviderError};
pub use user_store::{StoreError, UpdateOutcome, UserStore};
