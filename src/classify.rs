//! Classification of venue error responses.
//!
//! The venue reports failures as free-text messages rather than stable error
//! codes, so classification is table-driven: an exact-match table for known
//! messages, then a substring table scanned in declaration order. New venue
//! strings are absorbed by extending the tables, not by code changes.

use serde_json::Value;

use crate::errors::{ApiError, ErrorKind};

/// Known messages, matched verbatim. Consulted before the broad table.
const EXACT_ERRORS: &[(&str, ErrorKind)] = &[
    ("Invalid API key", ErrorKind::Authentication),
    (
        "Signature for this request is not valid.",
        ErrorKind::Authentication,
    ),
    ("Nonce is too small.", ErrorKind::InvalidNonce),
    (
        "Order amount too small for this trading pair.",
        ErrorKind::InvalidOrder,
    ),
    ("Requested order does not exist.", ErrorKind::OrderNotFound),
    (
        "Not enough exchange balance to place the order.",
        ErrorKind::InsufficientFunds,
    ),
    (
        "API access is restricted for this account.",
        ErrorKind::PermissionDenied,
    ),
];

/// Substring rules, scanned in order; the first hit wins. Order matters:
/// "not enough exchange balance" must precede "Invalid order" so that
/// messages like "Invalid order: not enough exchange balance for BTC"
/// classify as insufficient funds rather than a malformed order.
const BROAD_ERRORS: &[(&str, ErrorKind)] = &[
    ("not enough exchange balance", ErrorKind::InsufficientFunds),
    ("Invalid order", ErrorKind::InvalidOrder),
    ("too small", ErrorKind::InvalidNonce),
    ("does not exist", ErrorKind::OrderNotFound),
    ("Too many requests", ErrorKind::DdosProtection),
    ("rate limit", ErrorKind::DdosProtection),
    ("permission", ErrorKind::PermissionDenied),
    ("under maintenance", ErrorKind::ExchangeNotAvailable),
    ("Service unavailable", ErrorKind::ExchangeNotAvailable),
];

/// Classify an HTTP response into a typed venue error.
///
/// Returns `None` when the response should be treated as success: any status
/// below 400, or a body too short to judge. Once the status is 400 or above,
/// classification is total; bodies that do not parse as a JSON object or
/// carry no recognizable message degrade to [`ErrorKind::Exchange`] with the
/// raw body preserved.
pub fn classify(status: u16, body: &str, context: &str) -> Option<ApiError> {
    if body.len() < 2 {
        return None;
    }
    if status < 400 {
        return None;
    }

    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let Some(Value::Object(fields)) = parsed else {
        return Some(ApiError::new(ErrorKind::Exchange, body, body, context));
    };

    let message = fields
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| fields.get("error").and_then(Value::as_str));
    let Some(message) = message else {
        return Some(ApiError::new(ErrorKind::Exchange, body, body, context));
    };

    for (known, kind) in EXACT_ERRORS {
        if *known == message {
            return Some(ApiError::new(*kind, message, body, context));
        }
    }
    for (needle, kind) in BROAD_ERRORS {
        if message.contains(needle) {
            return Some(ApiError::new(*kind, message, body, context));
        }
    }

    Some(ApiError::new(ErrorKind::Exchange, message, body, context))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: &str = "gopax GET /test";

    #[test]
    fn test_success_status_is_never_an_error() {
        assert!(classify(200, r#"{"message":"Nonce is too small."}"#, CTX).is_none());
        assert!(classify(200, "[]", CTX).is_none());
        assert!(classify(399, r#"{"error":"anything"}"#, CTX).is_none());
    }

    #[test]
    fn test_short_body_is_indeterminate() {
        assert!(classify(500, "", CTX).is_none());
        assert!(classify(500, "x", CTX).is_none());
    }

    #[test]
    fn test_non_json_body_degrades_to_exchange_error() {
        let err = classify(502, "<html>Bad Gateway</html>", CTX).unwrap();
        assert_eq!(err.kind, ErrorKind::Exchange);
        assert_eq!(err.body, "<html>Bad Gateway</html>");
        assert_eq!(err.context, CTX);
    }

    #[test]
    fn test_object_without_message_degrades_to_exchange_error() {
        let err = classify(400, r#"{"code":10155}"#, CTX).unwrap();
        assert_eq!(err.kind, ErrorKind::Exchange);
    }

    #[test]
    fn test_exact_match() {
        let err = classify(400, r#"{"message":"Nonce is too small."}"#, CTX).unwrap();
        assert_eq!(err.kind, ErrorKind::InvalidNonce);
        assert_eq!(err.message, "Nonce is too small.");
    }

    #[test]
    fn test_message_read_from_error_field() {
        let err = classify(401, r#"{"error":"Invalid API key"}"#, CTX).unwrap();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_exact_wins_over_broad() {
        // The broad rule "too small" would classify this as InvalidNonce;
        // the exact entry pins it to InvalidOrder.
        let err = classify(
            400,
            r#"{"message":"Order amount too small for this trading pair."}"#,
            CTX,
        )
        .unwrap();
        assert_eq!(err.kind, ErrorKind::InvalidOrder);
    }

    #[test]
    fn test_broad_first_declared_key_wins() {
        // Contains both "not enough exchange balance" and "Invalid order";
        // the earlier table entry decides.
        let err = classify(
            400,
            r#"{"message":"Invalid order: not enough exchange balance for BTC"}"#,
            CTX,
        )
        .unwrap();
        assert_eq!(err.kind, ErrorKind::InsufficientFunds);
    }

    #[test]
    fn test_unrecognized_message_is_generic() {
        let err = classify(400, r#"{"message":"flux capacitor misaligned"}"#, CTX).unwrap();
        assert_eq!(err.kind, ErrorKind::Exchange);
        assert_eq!(err.message, "flux capacitor misaligned");
    }

    #[test]
    fn test_rate_limit_broad_match() {
        let err = classify(429, r#"{"message":"Too many requests, slow down"}"#, CTX).unwrap();
        assert_eq!(err.kind, ErrorKind::DdosProtection);
    }
}
