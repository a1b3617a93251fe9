//! HMAC-SHA256 request signing.
//!
//! The signing string is the newline-joined sequence
//! `METHOD`, `uri`, `timestamp`, `nonce`, `access_key`, `body`. The remote
//! API recomputes it from the request it receives, so the field order and
//! the set of fields are fixed.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::instrument;

use crate::credentials::Credentials;
use crate::sources::{Clock, NonceSource, RandomNonce, SystemClock};

type HmacSha256 = Hmac<Sha256>;

pub const AUTH_SCHEME: &str = "HMAC-SHA256";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningError {
    InvalidKey,
}

impl std::fmt::Display for SigningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "invalid signing key"),
        }
    }
}

impl std::error::Error for SigningError {}

/// Everything the API client needs to attach to one outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: String,
    pub uri: String,
    pub body: String,
    pub timestamp: String,
    pub nonce: String,
    pub access_key: String,
    pub signature: String,
}

impl SignedRequest {
    #[must_use]
    pub fn signing_string(&self) -> String {
        signing_string(
            &self.method,
            &self.uri,
            &self.timestamp,
            &self.nonce,
            &self.access_key,
            &self.body,
        )
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("{AUTH_SCHEME} {}:{}", self.access_key, self.signature)
    }

    /// Recomputes the signature with `secret` and compares it in constant time.
    pub fn verify(&self, secret: &str) -> Result<bool, SigningError> {
        let expected = compute_signature(secret, &self.signing_string())?;
        Ok(expected
            .as_bytes()
            .ct_eq(self.signature.as_bytes())
            .into())
    }
}

#[must_use]
pub fn signing_string(
    method: &str,
    uri: &str,
    timestamp: &str,
    nonce: &str,
    access_key: &str,
    body: &str,
) -> String {
    [method, uri, timestamp, nonce, access_key, body].join("\n")
}

/// Lowercase hex HMAC-SHA256 of `message` keyed by the UTF-8 bytes of `secret`.
pub fn compute_signature(secret: &str, message: &str) -> Result<String, SigningError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| SigningError::InvalidKey)?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

pub struct RequestSigner<C = SystemClock, N = RandomNonce> {
    clock: C,
    nonces: N,
}

impl RequestSigner {
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock, RandomNonce)
    }
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock, N: NonceSource> RequestSigner<C, N> {
    #[must_use]
    pub fn new(clock: C, nonces: N) -> Self {
        Self { clock, nonces }
    }

    #[instrument(level = "debug", skip(self, body, credentials), fields(access_key = credentials.access_key()))]
    pub fn sign(
        &self,
        method: &str,
        uri: &str,
        body: &str,
        credentials: &Credentials,
    ) -> Result<SignedRequest, SigningError> {
        let method = method.to_ascii_uppercase();
        let timestamp = self.clock.now().format(TIMESTAMP_FORMAT).to_string();
        let nonce = self.nonces.next_nonce().to_string();
        let message = signing_string(
            &method,
            uri,
            &timestamp,
            &nonce,
            credentials.access_key(),
            body,
        );
        let signature = compute_signature(credentials.secret(), &message)?;
        Ok(SignedRequest {
            method,
            uri: uri.to_string(),
            body: body.to_string(),
            timestamp,
            nonce,
            access_key: credentials.access_key().to_string(),
            signature,
        })
    }
}
