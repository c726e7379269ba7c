//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `billing` - Webhook verification, event classification, plan resolution,
//!   and the reconciliation primitives applied to user records

pub mod billing;
