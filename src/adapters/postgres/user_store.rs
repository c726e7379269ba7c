//! PostgreSQL implementation of UserStore.
//!
//! Applies subscription patches to the users table with a single UPDATE
//! keyed on the lookup field.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::billing::{LookupKey, SubscriptionPatch};
use crate::ports::{StoreError, UpdateOutcome, UserStore};

/// PostgreSQL implementation of the UserStore port.
///
/// Uses sqlx for database operations with connection pooling.
pub struct PostgresUserStore {
    pool: PgPool,
    case_insensitive_lookup: bool,
}

impl PostgresUserStore {
    /// Creates a new PostgresUserStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            case_insensitive_lookup: false,
        }
    }

    /// Match lookup values case-insensitively.
    ///
    /// Checkout emails arrive with whatever casing the customer typed, so
    /// deployments whose users table is not already citext can opt in here.
    pub fn with_case_insensitive_lookup(mut self, enabled: bool) -> Self {
        self.case_insensitive_lookup = enabled;
        self
    }
}

/// Renders the UPDATE statement for a lookup field.
///
/// `field` comes from `LookupKey::field()`, which only yields fixed column
/// names, never caller input.
fn update_statement(field: &str, case_insensitive: bool) -> String {
    let matcher = if case_insensitive {
        format!("LOWER({field}) = LOWER($1)")
    } else {
        format!("{field} = $1")
    };

    format!(
        r#"
        UPDATE users SET
            subscription_status = $2,
            plan = $3,
            credits = $4,
            subscription_updated_at = $5,
            stripe_customer_id = COALESCE($6, stripe_customer_id),
            updated_at = NOW()
        WHERE {matcher}
        "#
    )
}

fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(e.to_string())
        }
        other => StoreError::Query(other.to_string()),
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn update_where(
        &self,
        key: &LookupKey,
        patch: &SubscriptionPatch,
    ) -> Result<UpdateOutcome, StoreError> {
        let statement = update_statement(key.field(), self.case_insensitive_lookup);

        let result = sqlx::query(&statement)
            .bind(key.value())
            .bind(patch.status.as_str())
            .bind(&patch.plan)
            .bind(patch.credits)
            .bind(patch.updated_at)
            .bind(&patch.billing_customer_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(UpdateOutcome {
            rows_affected: result.rows_affected(),
        })
    }
}
