//! Credit Sync - Stripe Webhook Reconciliation Service
//!
//! This crate keeps user plans and credit balances in sync with Stripe by
//! verifying webhook deliveries and applying absolute-state patches to
//! user records.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
