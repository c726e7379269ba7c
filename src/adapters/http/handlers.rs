//! HTTP handlers for the webhook service.
//!
//! These handlers connect Axum routes to the application layer. The webhook
//! handler returns 200 for every processed event and 400 for every rejection,
//! since Stripe redelivers on any other status.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::{ReconcileWebhookCommand, ReconcileWebhookHandler};
use crate::domain::billing::WebhookError;

use super::dto::{ErrorResponse, WebhookAck};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains an Arc-wrapped handler
/// for efficient sharing.
#[derive(Clone)]
pub struct AppState {
    pub reconciler: Arc<ReconcileWebhookHandler>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Liveness probe.
pub async fn health() -> &'static str {
    "Hello from credit-sync!"
}

/// POST /webhook - Handle Stripe webhook deliveries.
pub async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, WebhookApiError> {
    // Extract Stripe signature header
    let signature = headers
        .get("Stripe-Signature")
        .and_then(|v| v.to_str().ok())
        .ok_or(WebhookApiError::MissingSignatureHeader)?;

    let cmd = ReconcileWebhookCommand {
        payload: body.to_vec(),
        signature: signature.to_string(),
    };

    state.reconciler.handle(cmd).await?;

    Ok(Json(WebhookAck::received()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts reconciliation failures to HTTP responses.
#[derive(Debug)]
pub enum WebhookApiError {
    /// Request arrived without a Stripe-Signature header.
    MissingSignatureHeader,
    /// Reconciliation failed after the request reached the handler.
    Reconcile(WebhookError),
}

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self::Reconcile(err)
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Self::MissingSignatureHeader => (
                StatusCode::BAD_REQUEST,
                "Missing Stripe-Signature header".to_string(),
            ),
            Self::Reconcile(err) => {
                tracing::warn!(
                    error = %err,
                    retryable = err.is_retryable(),
                    "Webhook delivery rejected"
                );
                (err.status_code(), err.to_string())
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
