//! Stripe webhook signature verification.
//!
//! Implements secure verification of Stripe webhook signatures using HMAC-SHA256.
//! Includes timestamp validation to prevent replay attacks.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::WebhookError;
use super::event::BillingEvent;

/// Default maximum allowed age for webhook events (5 minutes).
pub const DEFAULT_MAX_EVENT_AGE_SECS: i64 = 300;

/// Default maximum allowed clock skew for future events (1 minute).
pub const DEFAULT_MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Parsed components from the Stripe-Signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Unix timestamp when the signature was generated.
    pub timestamp: i64,
    /// v1 signature (HMAC-SHA256).
    pub v1_signature: Vec<u8>,
    /// Optional v0 legacy signature.
    pub v0_signature: Option<Vec<u8>>,
}

impl SignatureHeader {
    /// Parses a Stripe-Signature header string.
    ///
    /// Format: `t=<timestamp>,v1=<signature>[,v0=<legacy>]`
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::MalformedSignatureHeader` if the header
    /// format is invalid.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let mut timestamp: Option<i64> = None;
        let mut v1_signature: Option<Vec<u8>> = None;
        let mut v0_signature: Option<Vec<u8>> = None;

        for part in header.split(',') {
            let (key, value) = part.split_once('=').ok_or_else(|| {
                WebhookError::MalformedSignatureHeader("invalid header format".to_string())
            })?;

            match key {
                "t" => {
                    timestamp = Some(value.parse().map_err(|_| {
                        WebhookError::MalformedSignatureHeader("invalid timestamp".to_string())
                    })?);
                }
                "v1" => {
                    v1_signature = Some(hex::decode(value).map_err(|_| {
                        WebhookError::MalformedSignatureHeader(
                            "invalid v1 signature hex".to_string(),
                        )
                    })?);
                }
                "v0" => {
                    v0_signature = Some(hex::decode(value).map_err(|_| {
                        WebhookError::MalformedSignatureHeader(
                            "invalid v0 signature hex".to_string(),
                        )
                    })?);
                }
                _ => {
                    // Ignore unknown fields for forward compatibility
                }
            }
        }

        let timestamp = timestamp.ok_or_else(|| {
            WebhookError::MalformedSignatureHeader("missing timestamp".to_string())
        })?;
        let v1_signature = v1_signature.ok_or_else(|| {
            WebhookError::MalformedSignatureHeader("missing v1 signature".to_string())
        })?;

        Ok(SignatureHeader {
            timestamp,
            v1_signature,
            v0_signature,
        })
    }
}

/// Verifier for Stripe webhook signatures.
pub struct WebhookVerifier {
    /// The webhook signing secret from the Stripe dashboard.
    secret: String,
    /// Oldest accepted signature age in seconds.
    max_event_age_secs: i64,
    /// Furthest accepted future timestamp in seconds.
    max_clock_skew_secs: i64,
}

impl WebhookVerifier {
    /// Creates a verifier with the default replay tolerances.
    pub fn new(secret: impl Into<String>) -> Self {
        Self::with_tolerances(
            secret,
            DEFAULT_MAX_EVENT_AGE_SECS,
            DEFAULT_MAX_CLOCK_SKEW_SECS,
        )
    }

    /// Creates a verifier with explicit replay tolerances.
    pub fn with_tolerances(
        secret: impl Into<String>,
        max_event_age_secs: i64,
        max_clock_skew_secs: i64,
    ) -> Self {
        Self {
            secret: secret.into(),
            max_event_age_secs,
            max_clock_skew_secs,
        }
    }

    /// Verifies the webhook signature and parses the event.
    ///
    /// # Verification Steps
    ///
    /// 1. Parse the signature header
    /// 2. Validate timestamp is within acceptable range
    /// 3. Compute expected signature using HMAC-SHA256
    /// 4. Compare signatures using constant-time comparison
    /// 5. Parse the JSON payload into a BillingEvent
    ///
    /// # Errors
    ///
    /// - `MalformedSignatureHeader` - Header could not be parsed
    /// - `StaleTimestamp` - Event is older than the acceptance window
    /// - `FutureTimestamp` - Event timestamp is in the future
    /// - `SignatureMismatch` - Signature verification failed
    /// - `MalformedEvent` - Failed to parse the JSON payload
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<BillingEvent, WebhookError> {
        // 1. Parse signature header
        let header = SignatureHeader::parse(signature_header)?;

        // 2. Validate timestamp
        self.validate_timestamp(header.timestamp)?;

        // 3. Compute expected signature
        let expected_signature = self.compute_signature(header.timestamp, payload);

        // 4. Compare signatures (constant-time)
        if !constant_time_compare(&expected_signature, &header.v1_signature) {
            return Err(WebhookError::SignatureMismatch);
        }

        // 5. Parse event
        let event: BillingEvent = serde_json::from_slice(payload)
            .map_err(|e| WebhookError::MalformedEvent(e.to_string()))?;

        Ok(event)
    }

    /// Validates that the timestamp is within acceptable bounds.
    fn validate_timestamp(&self, timestamp: i64) -> Result<(), WebhookError> {
        let now = chrono::Utc::now().timestamp();
        let age = now - timestamp;

        // Reject events that are too old
        if age > self.max_event_age_secs {
            return Err(WebhookError::StaleTimestamp);
        }

        // Reject events from the future (with clock skew tolerance)
        if age < -self.max_clock_skew_secs {
            return Err(WebhookError::FutureTimestamp);
        }

        Ok(())
    }

    /// Computes the HMAC-SHA256 signature for the given timestamp and payload.
    fn compute_signature(&self, timestamp: i64, payload: &[u8]) -> Vec<u8> {
        let signed_payload = format!("{}.{}", timestamp, String::from_utf8_lossy(payload));

        let mut mac =
            Hmac::<Sha256>::new_from_slice(self.secret.as_bytes()).expect("HMAC accepts any key");
        mac.update(signed_payload.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// This prevents timing attacks that could leak information about the expected signature.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes HMAC-SHA256 for use in test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, timestamp: i64, payload: &str) -> String {
    let signed_payload = format!("{}.{}", timestamp, payload);
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(signed_payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "whsec_test_secret_12345";

    // ══════════════════════════════════════════════════════════════
    // SignatureHeader Parsing Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn parse_header_with_v1_only() {
        let signature = "a".repeat(64); // Valid hex
        let header_str = format!("t=1234567890,v1={}", signature);

        let header = SignatureHeader::parse(&header_str).unwrap();

        assert_eq!(header.timestamp, 1234567890);
        assert_eq!(header.v1_signature.len(), 32); // 64 hex chars = 32 bytes
        assert!(header.v0_signature.is_none());
    }

    #[test]
    fn parse_header_with_v0_and_v1() {
        let v1_sig = "a".repeat(64);
        let v0_sig = "b".repeat(64);
        let header_str = format!("t=1234567890,v1={},v0={}", v1_sig, v0_sig);

        let header = SignatureHeader::parse(&header_str).unwrap();

        assert_eq!(header.timestamp, 1234567890);
        assert!(header.v0_signature.is_some());
        assert_eq!(header.v0_signature.unwrap().len(), 32);
    }

    #[test]
    fn parse_header_ignores_unknown_fields() {
        let signature = "a".repeat(64);
        let header_str = format!("t=1234567890,v1={},v2=future,scheme=hmac", signature);

        let header = SignatureHeader::parse(&header_str).unwrap();

        assert_eq!(header.timestamp, 1234567890);
        assert_eq!(header.v1_signature.len(), 32);
    }

    #[test]
    fn parse_header_missing_timestamp_fails() {
        let signature = "a".repeat(64);
        let header_str = format!("v1={}", signature);

        let result = SignatureHeader::parse(&header_str);

        assert!(matches!(
            result,
            Err(WebhookError::MalformedSignatureHeader(_))
        ));
    }

    #[test]
    fn parse_header_missing_v1_fails() {
        let header_str = "t=1234567890";

        let result = SignatureHeader::parse(header_str);

        assert!(matches!(
            result,
            Err(WebhookError::MalformedSignatureHeader(_))
        ));
    }

    #[test]
    fn parse_header_invalid_timestamp_fails() {
        let signature = "a".repeat(64);
        let header_str = format!("t=not_a_number,v1={}", signature);

        let result = SignatureHeader::parse(&header_str);

        assert!(matches!(
            result,
            Err(WebhookError::MalformedSignatureHeader(_))
        ));
    }

    #[test]
    fn parse_header_invalid_hex_fails() {
        let header_str = "t=1234567890,v1=not_valid_hex";

        let result = SignatureHeader::parse(header_str);

        assert!(matches!(
            result,
            Err(WebhookError::MalformedSignatureHeader(_))
        ));
    }

    #[test]
    fn parse_header_no_equals_fails() {
        let header_str = "t1234567890";

        let result = SignatureHeader::parse(header_str);

        assert!(matches!(
            result,
            Err(WebhookError::MalformedSignatureHeader(_))
        ));
    }

    // ══════════════════════════════════════════════════════════════
    // Signature Verification Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_valid_signature() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let payload = r#"{"id":"evt_test123","type":"checkout.session.completed","created":1704067200,"data":{"object":{}},"livemode":false}"#;
        let timestamp = chrono::Utc::now().timestamp();
        let signature = compute_test_signature(TEST_SECRET, timestamp, payload);
        let header = format!("t={},v1={}", timestamp, signature);

        let result = verifier.verify_and_parse(payload.as_bytes(), &header);

        assert!(result.is_ok());
        let event = result.unwrap();
        assert_eq!(event.id, "evt_test123");
    }

    #[test]
    fn verify_invalid_signature_fails() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let payload = r#"{"id":"evt_test"}"#;
        let timestamp = chrono::Utc::now().timestamp();
        let header = format!("t={},v1={}", timestamp, "a".repeat(64));

        let result = verifier.verify_and_parse(payload.as_bytes(), &header);

        assert!(matches!(result, Err(WebhookError::SignatureMismatch)));
    }

    #[test]
    fn verify_wrong_secret_fails() {
        let verifier = WebhookVerifier::new("wrong_secret");
        let payload = r#"{"id":"evt_test"}"#;
        let timestamp = chrono::Utc::now().timestamp();
        let signature = compute_test_signature(TEST_SECRET, timestamp, payload);
        let header = format!("t={},v1={}", timestamp, signature);

        let result = verifier.verify_and_parse(payload.as_bytes(), &header);

        assert!(matches!(result, Err(WebhookError::SignatureMismatch)));
    }

    #[test]
    fn verify_tampered_payload_fails() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let original_payload = r#"{"id":"evt_test"}"#;
        let tampered_payload = r#"{"id":"evt_hacked"}"#;
        let timestamp = chrono::Utc::now().timestamp();
        let signature = compute_test_signature(TEST_SECRET, timestamp, original_payload);
        let header = format!("t={},v1={}", timestamp, signature);

        let result = verifier.verify_and_parse(tampered_payload.as_bytes(), &header);

        assert!(matches!(result, Err(WebhookError::SignatureMismatch)));
    }

    #[test]
    fn verify_signed_timestamp_must_match_header_timestamp() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let payload = r#"{"id":"evt_test"}"#;
        let signed_at = chrono::Utc::now().timestamp() - 30;
        let signature = compute_test_signature(TEST_SECRET, signed_at, payload);
        // Header claims a different timestamp than the one signed over
        let header = format!("t={},v1={}", signed_at + 10, signature);

        let result = verifier.verify_and_parse(payload.as_bytes(), &header);

        assert!(matches!(result, Err(WebhookError::SignatureMismatch)));
    }

    // ══════════════════════════════════════════════════════════════
    // Timestamp Validation Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_timestamp_within_range_succeeds() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        // 2 minutes ago - within 5 minute window
        let timestamp = chrono::Utc::now().timestamp() - 120;

        let result = verifier.validate_timestamp(timestamp);

        assert!(result.is_ok());
    }

    #[test]
    fn verify_timestamp_too_old_fails() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        // 10 minutes ago - outside 5 minute window
        let timestamp = chrono::Utc::now().timestamp() - 600;

        let result = verifier.validate_timestamp(timestamp);

        assert!(matches!(result, Err(WebhookError::StaleTimestamp)));
    }

    #[test]
    fn verify_timestamp_at_boundary_succeeds() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        // Exactly 5 minutes ago
        let timestamp = chrono::Utc::now().timestamp() - 300;

        let result = verifier.validate_timestamp(timestamp);

        assert!(result.is_ok());
    }

    #[test]
    fn verify_timestamp_just_past_boundary_fails() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        // 5 minutes and 1 second ago
        let timestamp = chrono::Utc::now().timestamp() - 301;

        let result = verifier.validate_timestamp(timestamp);

        assert!(matches!(result, Err(WebhookError::StaleTimestamp)));
    }

    #[test]
    fn verify_timestamp_from_future_with_skew_succeeds() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        // 30 seconds in the future - within 60s clock skew tolerance
        let timestamp = chrono::Utc::now().timestamp() + 30;

        let result = verifier.validate_timestamp(timestamp);

        assert!(result.is_ok());
    }

    #[test]
    fn verify_timestamp_from_future_beyond_skew_fails() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        // 2 minutes in the future - beyond clock skew tolerance
        let timestamp = chrono::Utc::now().timestamp() + 120;

        let result = verifier.validate_timestamp(timestamp);

        assert!(matches!(result, Err(WebhookError::FutureTimestamp)));
    }

    #[test]
    fn custom_tolerances_are_honored() {
        let verifier = WebhookVerifier::with_tolerances(TEST_SECRET, 30, 5);

        // 1 minute old - fine for defaults, stale under a 30s window
        let old = chrono::Utc::now().timestamp() - 60;
        assert!(matches!(
            verifier.validate_timestamp(old),
            Err(WebhookError::StaleTimestamp)
        ));

        // 20 seconds in the future - beyond a 5s skew allowance
        let future = chrono::Utc::now().timestamp() + 20;
        assert!(matches!(
            verifier.validate_timestamp(future),
            Err(WebhookError::FutureTimestamp)
        ));

        let recent = chrono::Utc::now().timestamp() - 10;
        assert!(verifier.validate_timestamp(recent).is_ok());
    }

    // ══════════════════════════════════════════════════════════════
    // JSON Parsing Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_invalid_json_fails() {
        let verifier = WebhookVerifier::new(TEST_SECRET);
        let payload = "not valid json";
        let timestamp = chrono::Utc::now().timestamp();
        let signature = compute_test_signature(TEST_SECRET, timestamp, payload);
        let header = format!("t={},v1={}", timestamp, signature);

        let result = verifier.verify_and_parse(payload.as_bytes(), &header);

        assert!(matches!(result, Err(WebhookError::MalformedEvent(_))));
    }

    // ══════════════════════════════════════════════════════════════
    // Constant Time Comparison Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn constant_time_compare_equal_values() {
        let a = vec![1, 2, 3, 4, 5];
        let b = vec![1, 2, 3, 4, 5];
        assert!(constant_time_compare(&a, &b));
    }

    #[test]
    fn constant_time_compare_different_values() {
        let a = vec![1, 2, 3, 4, 5];
        let b = vec![1, 2, 3, 4, 6];
        assert!(!constant_time_compare(&a, &b));
    }

    #[test]
    fn constant_time_compare_different_lengths() {
        let a = vec![1, 2, 3];
        let b = vec![1, 2, 3, 4];
        assert!(!constant_time_compare(&a, &b));
    }

    #[test]
    fn constant_time_compare_empty_slices() {
        let a: Vec<u8> = vec![];
        let b: Vec<u8> = vec![];
        assert!(constant_time_compare(&a, &b));
    }

    // ══════════════════════════════════════════════════════════════
    // Integration Test
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn full_verification_flow() {
        let secret = "whsec_full_test_secret";
        let verifier = WebhookVerifier::new(secret);

        let payload = serde_json::json!({
            "id": "evt_full_test",
            "type": "customer.subscription.updated",
            "created": 1704067200,
            "data": {
                "object": {
                    "id": "sub_123",
                    "customer": "cus_456",
                    "status": "active"
                }
            },
            "livemode": true
        });
        let payload_str = serde_json::to_string(&payload).unwrap();

        let timestamp = chrono::Utc::now().timestamp();
        let signature = compute_test_signature(secret, timestamp, &payload_str);
        let header = format!("t={},v1={}", timestamp, signature);

        let result = verifier.verify_and_parse(payload_str.as_bytes(), &header);

        assert!(result.is_ok());
        let event = result.unwrap();
        assert_eq!(event.id, "evt_full_test");
        assert_eq!(event.event_type, "customer.subscription.updated");
        assert!(event.is_live());
    }
}
