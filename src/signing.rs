//! Credentials, nonce issuance, and HMAC-SHA256 request signing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{
    consts::{ACCESS_DIGEST_HEADER, ACCESS_KEY_HEADER, ACCESS_TIMESTAMP_HEADER},
    prelude::*,
    request::{ApiRequest, Method},
    Error,
};

type HmacSha256 = Hmac<Sha256>;

/// API credentials for one venue session.
///
/// Always passed explicitly into signing, never read from ambient state, so
/// multiple sessions with different keys can coexist in one process.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Credentials {
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }
}

// Security: Custom Debug implementation to prevent secret leakage
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Per-session nonce source.
///
/// Issues epoch-millisecond timestamps that are strictly increasing across
/// concurrent callers: each call returns `max(previous + 1, now_ms)` under a
/// single atomic update, so no two calls ever observe the same value and the
/// venue never sees an out-of-order nonce from this session.
#[derive(Debug, Default)]
pub struct NonceCounter(AtomicU64);

impl NonceCounter {
    pub fn new() -> Self {
        NonceCounter(AtomicU64::new(0))
    }

    pub fn next(&self) -> u64 {
        let mut prev = self.0.load(Ordering::Relaxed);
        loop {
            let next = prev.max(now_ms().saturating_sub(1)) + 1;
            match self
                .0
                .compare_exchange_weak(prev, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Compute the request signature for the given payload components.
///
/// The signed payload is `api_key + timestamp + METHOD + path`, with the
/// serialized body appended for POST requests that carry one. Deterministic
/// for identical inputs; any single-byte change to the path or body changes
/// the digest.
pub fn signature_for(
    credentials: &Credentials,
    timestamp: u64,
    method: Method,
    path: &str,
    body: Option<&str>,
) -> Result<String> {
    let mut payload = format!(
        "{}{}{}{}",
        credentials.api_key,
        timestamp,
        method.as_str(),
        path
    );
    if method == Method::Post {
        if let Some(body) = body {
            payload.push_str(body);
        }
    }

    let mut mac = HmacSha256::new_from_slice(credentials.secret.as_bytes())
        .map_err(|e| Error::Authentication(e.to_string()))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Sign a private request, returning a new descriptor with auth headers set.
///
/// Fails with [`Error::Authentication`] before any network call when either
/// credential component is missing.
pub fn sign(
    request: ApiRequest,
    credentials: &Credentials,
    nonce: &NonceCounter,
) -> Result<ApiRequest> {
    if credentials.api_key.is_empty() {
        return Err(Error::Authentication("api key is not set".to_string()));
    }
    if credentials.secret.is_empty() {
        return Err(Error::Authentication("api secret is not set".to_string()));
    }

    let timestamp = nonce.next();
    let digest = signature_for(
        credentials,
        timestamp,
        request.method,
        &request.path,
        request.body.as_deref(),
    )?;

    let mut request = request;
    request
        .headers
        .push((ACCESS_KEY_HEADER.to_string(), credentials.api_key.clone()));
    request
        .headers
        .push((ACCESS_TIMESTAMP_HEADER.to_string(), timestamp.to_string()));
    request
        .headers
        .push((ACCESS_DIGEST_HEADER.to_string(), digest));
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{ApiClass, RequestBuilder};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn creds() -> Credentials {
        Credentials::new("key", "secret")
    }

    #[test]
    fn test_signature_is_deterministic() {
        let a = signature_for(&creds(), 1700000000000, Method::Get, "/v1/orders", None).unwrap();
        let b = signature_for(&creds(), 1700000000000, Method::Get, "/v1/orders", None).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // hex-encoded SHA-256
    }

    #[test]
    fn test_signature_changes_with_path() {
        let a = signature_for(&creds(), 1, Method::Get, "/v1/orders", None).unwrap();
        let b = signature_for(&creds(), 1, Method::Get, "/v1/orderz", None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_signature_changes_with_body() {
        let a = signature_for(&creds(), 1, Method::Post, "/v1/orders", Some(r#"{"a":1}"#)).unwrap();
        let b = signature_for(&creds(), 1, Method::Post, "/v1/orders", Some(r#"{"a":2}"#)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_body_only_signed_for_post() {
        let with = signature_for(&creds(), 1, Method::Get, "/v1/orders", Some("{}")).unwrap();
        let without = signature_for(&creds(), 1, Method::Get, "/v1/orders", None).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_sign_attaches_auth_headers() {
        let request = RequestBuilder::new("https://api.gopax.co.kr", "v1")
            .build(Method::Get, "/balances", &[], ApiClass::Private)
            .unwrap();
        let signed = sign(request, &creds(), &NonceCounter::new()).unwrap();

        let names: Vec<&str> = signed.headers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["ACCESS-KEY", "ACCESS-TIMESTAMP", "ACCESS-DIGEST"]);
        assert_eq!(signed.headers[0].1, "key");
    }

    #[test]
    fn test_sign_rejects_missing_credentials() {
        let request = RequestBuilder::new("https://api.gopax.co.kr", "v1")
            .build(Method::Get, "/balances", &[], ApiClass::Private)
            .unwrap();
        let nonce = NonceCounter::new();

        let err = sign(request.clone(), &Credentials::new("", "s"), &nonce).unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
        let err = sign(request, &Credentials::new("k", ""), &nonce).unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn test_nonce_strictly_increases() {
        let nonce = NonceCounter::new();
        let mut last = 0;
        for _ in 0..1000 {
            let n = nonce.next();
            assert!(n > last);
            last = n;
        }
    }

    #[test]
    fn test_nonce_unique_under_concurrency() {
        let nonce = Arc::new(NonceCounter::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let nonce = Arc::clone(&nonce);
            handles.push(std::thread::spawn(move || {
                (0..500).map(|_| nonce.next()).collect::<Vec<u64>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            let values = handle.join().unwrap();
            // Each thread observes its own strictly increasing sequence.
            assert!(values.windows(2).all(|w| w[0] < w[1]));
            for v in values {
                assert!(seen.insert(v), "duplicate nonce {v}");
            }
        }
        assert_eq!(seen.len(), 8 * 500);
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let out = format!("{:?}", Credentials::new("key-id", "hunter2"));
        assert!(out.contains("key-id"));
        assert!(!out.contains("hunter2"));
        assert!(out.contains("<redacted>"));
    }
}
