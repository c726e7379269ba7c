//! Plan catalog mapping Stripe price ids to credit entitlements.
//!
//! Resolution is total: any price id that is unknown, malformed, or absent
//! resolves to the fallback plan, so a new price in Stripe never makes the
//! webhook path fail.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Name of the fallback plan granted when no price id matches.
pub const FALLBACK_PLAN_NAME: &str = "free";

/// Credit allowance granted by the fallback plan.
pub const FALLBACK_PLAN_CREDITS: i64 = 1000;

/// A subscription plan and the credit allowance it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan name as stored on the user record (e.g. "gold").
    pub name: String,
    /// Credits granted when this plan is applied.
    pub credits: i64,
}

impl Plan {
    /// Creates a plan with the given name and credit allowance.
    pub fn new(name: impl Into<String>, credits: i64) -> Self {
        Self {
            name: name.into(),
            credits,
        }
    }

    /// The plan applied when no price id matches the catalog.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_PLAN_NAME, FALLBACK_PLAN_CREDITS)
    }
}

/// Price ids shipped with the service. Deployments can replace these
/// through configuration without a rebuild.
static BUILT_IN_PLANS: Lazy<HashMap<String, Plan>> = Lazy::new(|| {
    HashMap::from([
        (
            "price_1QdFN7IvZBeqKnwP0Hs7sIoI".to_string(),
            Plan::new("gold", 2_000),
        ),
        (
            "price_1QdZAbIvZBeqKnwPP6Fv2zK1".to_string(),
            Plan::new("diamond", 100_000),
        ),
        (
            "price_1QdZAeIvZBeqKnwP9vmmaAkW".to_string(),
            Plan::new("elite", 500_000),
        ),
    ])
});

/// Total mapping from Stripe price ids to plans.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: HashMap<String, Plan>,
    fallback: Plan,
}

impl PlanCatalog {
    /// Creates a catalog from an explicit price table and fallback plan.
    pub fn new(plans: HashMap<String, Plan>, fallback: Plan) -> Self {
        Self { plans, fallback }
    }

    /// Creates a catalog with the built-in price table and the free fallback.
    pub fn built_in() -> Self {
        Self::new(BUILT_IN_PLANS.clone(), Plan::fallback())
    }

    /// Replace the fallback plan.
    pub fn with_fallback(mut self, fallback: Plan) -> Self {
        self.fallback = fallback;
        self
    }

    /// Resolves a price id to its plan.
    ///
    /// Never fails: `None` and unknown ids both resolve to the fallback plan.
    pub fn resolve(&self, price_id: Option<&str>) -> &Plan {
        price_id
            .and_then(|id| self.plans.get(id))
            .unwrap_or(&self.fallback)
    }

    /// The plan returned for unknown or absent price ids.
    pub fn fallback(&self) -> &Plan {
        &self.fallback
    }

    /// Number of known price ids.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// True when no price ids are configured.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::built_in()
    }
}
