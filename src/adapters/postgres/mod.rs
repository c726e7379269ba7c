//! PostgreSQL adapters - Database implementations for storage ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresUserStore` - Applies subscription patches to user records

mod user_store;

pub use user_store::PostgresUserStore;
