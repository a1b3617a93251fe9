use std::time::{Duration, Instant};

use cdnctl_crypto::{Clock, NonceSource, RandomNonce, RequestSigner, SignedRequest, SystemClock};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tracing::debug;

use crate::constants::{DATE_HEADER, DEFAULT_TIMEOUT, JSON_CONTENT_TYPE, NONCE_HEADER};
use crate::error::{Error, Result};
use crate::store::ProfileStore;

/// Sends signed requests to the provider API using credentials from a
/// [`ProfileStore`]. One attempt per call; callers own any retry policy.
pub struct ApiClient<C = SystemClock, N = RandomNonce> {
    http: reqwest::Client,
    store: ProfileStore,
    signer: RequestSigner<C, N>,
}

impl ApiClient {
    pub fn new(store: ProfileStore) -> Result<Self> {
        Self::with_signer(store, RequestSigner::system())
    }
}

impl<C: Clock, N: NonceSource> ApiClient<C, N> {
    pub fn with_signer(store: ProfileStore, signer: RequestSigner<C, N>) -> Result<Self> {
        Self::with_timeout(store, signer, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        store: ProfileStore,
        signer: RequestSigner<C, N>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            store,
            signer,
        })
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Calls `base_url` + `path`, signing `path` as the request URI.
    ///
    /// `profile` selects the credentials; an empty name uses the default
    /// profile. A missing or `null` body is sent as `{}`. The method is
    /// uppercased so the wire method matches the signed one. Returns the raw response body
    /// for any 2xx status.
    pub async fn call(
        &self,
        method: Method,
        base_url: &str,
        path: &str,
        body: Option<&serde_json::Value>,
        profile: &str,
    ) -> Result<Vec<u8>> {
        let credentials = self.store.resolve(profile)?.credentials();
        let method = canonical_method(method);
        let body = match body {
            Some(value) if !value.is_null() => serde_json::to_string(value)?,
            _ => "{}".to_string(),
        };
        let signed = self
            .signer
            .sign(method.as_str(), path, &body, &credentials)?;
        let headers = signed_headers(&signed)?;
        let url = format!("{}{}", base_url.trim_end_matches('/'), path);

        debug!(method = %method, url = %url, "http request");
        let start = Instant::now();
        let response = self
            .http
            .request(method.clone(), &url)
            .headers(headers)
            .body(body)
            .send()
            .await?;
        let status = response.status();
        debug!(
            method = %method,
            url = %url,
            status = %status,
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        let bytes = response.bytes().await?.to_vec();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body: bytes,
            });
        }
        Ok(bytes)
    }
}

/// Extension methods are case-sensitive in `http`, so `patch` would otherwise
/// go out lowercase while the signature covers `PATCH`.
fn canonical_method(method: Method) -> Method {
    let upper = method.as_str().to_ascii_uppercase();
    if upper == method.as_str() {
        return method;
    }
    Method::from_bytes(upper.as_bytes()).unwrap_or(method)
}

pub(crate) fn signed_headers(signed: &SignedRequest) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&signed.authorization())?);
    headers.insert(
        HeaderName::from_static(DATE_HEADER),
        HeaderValue::from_str(&signed.timestamp)?,
    );
    headers.insert(
        HeaderName::from_static(NONCE_HEADER),
        HeaderValue::from_str(&signed.nonce)?,
    );
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdnctl_crypto::{Credentials, FixedClock, FixedNonce};

    #[test]
    fn headers_carry_signature_timestamp_and_nonce() {
        let signer = RequestSigner::new(
            FixedClock::parse("20240101T000000Z").expect("clock"),
            FixedNonce(12345),
        );
        let signed = signer
            .sign("POST", "/v1.1/service_id", "{}", &Credentials::new("AK1", "SK1"))
            .expect("sign");
        let headers = signed_headers(&signed).expect("headers");
        assert_eq!(headers[CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(headers[AUTHORIZATION], signed.authorization().as_str());
        assert_eq!(headers["x-sfd-date"], "20240101T000000Z");
        assert_eq!(headers["x-sfd-nonce"], "12345");
    }

    #[test]
    fn access_key_with_newline_is_rejected_as_header() {
        let signer = RequestSigner::new(
            FixedClock::parse("20240101T000000Z").expect("clock"),
            FixedNonce(12345),
        );
        let signed = signer
            .sign("POST", "/", "{}", &Credentials::new("AK\n1", "SK1"))
            .expect("sign");
        assert!(matches!(signed_headers(&signed), Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn lowercase_method_is_sent_uppercase() {
        let lower = Method::from_bytes(b"patch").expect("method");
        assert_ne!(lower, Method::PATCH);
        assert_eq!(canonical_method(lower), Method::PATCH);
        assert_eq!(canonical_method(Method::GET), Method::GET);
        let custom = Method::from_bytes(b"purge").expect("method");
        assert_eq!(canonical_method(custom).as_str(), "PURGE");
    }
}
