//! Plan catalog configuration

use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::billing::{Plan, PlanCatalog, FALLBACK_PLAN_CREDITS, FALLBACK_PLAN_NAME};

use super::error::ValidationError;

/// Plan catalog configuration
///
/// The environment loader lowercases variable names, which would mangle
/// case-sensitive Stripe price ids as nested keys. The price table is
/// therefore configured as one JSON document.
#[derive(Debug, Clone, Deserialize)]
pub struct PlansConfig {
    /// JSON object mapping price ids to plan entries, e.g.
    /// `{"price_123": {"name": "gold", "credits": 2000}}`
    pub table_json: Option<String>,

    /// Plan name granted when no price id matches
    #[serde(default = "default_plan_name")]
    pub default_name: String,

    /// Credit allowance granted when no price id matches
    #[serde(default = "default_plan_credits")]
    pub default_credits: i64,
}

/// One entry in the configured price table.
#[derive(Debug, Clone, Deserialize)]
struct PlanEntry {
    name: String,
    credits: i64,
}

impl PlansConfig {
    /// Build the plan catalog from this configuration.
    ///
    /// Falls back to the built-in price table when no table is configured.
    pub fn catalog(&self) -> Result<PlanCatalog, ValidationError> {
        let fallback = Plan::new(self.default_name.clone(), self.default_credits);

        match &self.table_json {
            None => Ok(PlanCatalog::built_in().with_fallback(fallback)),
            Some(raw) => {
                let entries: HashMap<String, PlanEntry> = serde_json::from_str(raw)
                    .map_err(|e| ValidationError::InvalidPlanTable(e.to_string()))?;

                let plans = entries
                    .into_iter()
                    .map(|(price_id, entry)| (price_id, Plan::new(entry.name, entry.credits)))
                    .collect();

                Ok(PlanCatalog::new(plans, fallback))
            }
        }
    }

    /// Validate plan configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_name.is_empty() {
            return Err(ValidationError::MissingRequired("PLANS_DEFAULT_NAME"));
        }
        self.catalog().map(|_| ())
    }
}

impl Default for PlansConfig {
    fn default() -> Self {
        Self {
            table_json: None,
            default_name: default_plan_name(),
            default_credits: default_plan_credits(),
        }
    }
}

fn default_plan_name() -> String {
    FALLBACK_PLAN_NAME.to_string()
}

fn default_plan_credits() -> i64 {
    FALLBACK_PLAN_CREDITS
}
