//! Webhook error types for Stripe webhook reconciliation.
//!
//! Defines all error conditions that can occur while verifying and applying
//! a webhook, with HTTP status code mapping and retryability semantics.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur during webhook processing.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The Stripe-Signature header could not be parsed.
    #[error("Malformed signature header: {0}")]
    MalformedSignatureHeader(String),

    /// The v1 signature did not match the computed HMAC.
    #[error("Signature verification failed")]
    SignatureMismatch,

    /// Signed timestamp is older than the acceptance window.
    #[error("Signature timestamp too old")]
    StaleTimestamp,

    /// Signed timestamp is in the future beyond clock skew tolerance.
    #[error("Signature timestamp in the future")]
    FutureTimestamp,

    /// Payload was not valid JSON or lacked a required field.
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    /// Checkout session carried no customer email to key the update on.
    #[error("Customer email is missing")]
    MissingCustomerContact,

    /// Stripe API call failed while enriching the event.
    #[error("Provider request failed: {0}")]
    Provider(String),

    /// User record update failed.
    #[error("Failed to update user subscription: {0}")]
    Store(String),
}

impl WebhookError {
    /// Returns true if a redelivery of the same event could succeed.
    ///
    /// Stripe redelivers on any non-2xx response. Retryable errors are
    /// transient downstream failures; everything else will fail the same
    /// way on every attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WebhookError::Provider(_) | WebhookError::Store(_))
    }

    /// Maps the error to the HTTP status for the webhook response.
    ///
    /// Every failure maps to 400: the provider treats any non-2xx as
    /// undelivered and schedules redelivery, so there is no reason to
    /// distinguish further on the wire.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Verification failures
            WebhookError::MalformedSignatureHeader(_)
            | WebhookError::SignatureMismatch
            | WebhookError::StaleTimestamp
            | WebhookError::FutureTimestamp => StatusCode::BAD_REQUEST,

            // Payload failures
            WebhookError::MalformedEvent(_) | WebhookError::MissingCustomerContact => {
                StatusCode::BAD_REQUEST
            }

            // Downstream failures
            WebhookError::Provider(_) | WebhookError::Store(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ══════════════════════════════════════════════════════════════
    // Error Display Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn signature_mismatch_displays_correctly() {
        let err = WebhookError::SignatureMismatch;
        assert_eq!(format!("{}", err), "Signature verification failed");
    }

    #[test]
    fn malformed_header_displays_detail() {
        let err = WebhookError::MalformedSignatureHeader("missing timestamp".to_string());
        assert_eq!(
            format!("{}", err),
            "Malformed signature header: missing timestamp"
        );
    }

    #[test]
    fn missing_customer_contact_matches_wire_message() {
        let err = WebhookError::MissingCustomerContact;
        assert_eq!(format!("{}", err), "Customer email is missing");
    }

    #[test]
    fn store_error_displays_detail() {
        let err = WebhookError::Store("connection refused".to_string());
        assert_eq!(
            format!("{}", err),
            "Failed to update user subscription: connection refused"
        );
    }

    #[test]
    fn malformed_event_displays_detail() {
        let err = WebhookError::MalformedEvent("missing field `customer`".to_string());
        assert_eq!(
            format!("{}", err),
            "Malformed event: missing field `customer`"
        );
    }

    // ══════════════════════════════════════════════════════════════
    // Retryability Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn provider_error_is_retryable() {
        let err = WebhookError::Provider("timeout".to_string());
        assert!(err.is_retryable());
    }

    #[test]
    fn store_error_is_retryable() {
        let err = WebhookError::Store("pool exhausted".to_string());
        assert!(err.is_retryable());
    }

    #[test]
    fn signature_mismatch_is_not_retryable() {
        let err = WebhookError::SignatureMismatch;
        assert!(!err.is_retryable());
    }

    #[test]
    fn stale_timestamp_is_not_retryable() {
        let err = WebhookError::StaleTimestamp;
        assert!(!err.is_retryable());
    }

    #[test]
    fn missing_customer_contact_is_not_retryable() {
        let err = WebhookError::MissingCustomerContact;
        assert!(!err.is_retryable());
    }

    #[test]
    fn malformed_event_is_not_retryable() {
        let err = WebhookError::MalformedEvent("bad json".to_string());
        assert!(!err.is_retryable());
    }

    // ══════════════════════════════════════════════════════════════
    // Status Code Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn every_variant_returns_bad_request() {
        let errors = [
            WebhookError::MalformedSignatureHeader("x".to_string()),
            WebhookError::SignatureMismatch,
            WebhookError::StaleTimestamp,
            WebhookError::FutureTimestamp,
            WebhookError::MalformedEvent("x".to_string()),
            WebhookError::MissingCustomerContact,
            WebhookError::Provider("x".to_string()),
            WebhookError::Store("x".to_string()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST, "{}", err);
        }
    }
}
