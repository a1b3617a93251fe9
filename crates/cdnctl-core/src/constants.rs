use std::time::Duration;

pub const CDN_API_BASE_URL: &str = "https://cdn-api.swiftfederation.com";
pub const BASE_API_BASE_URL: &str = "https://base-api.swiftfederation.com";

pub const DATE_HEADER: &str = "x-sfd-date";
pub const NONCE_HEADER: &str = "x-sfd-nonce";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Client-side bound on a single API call, independent of server timeouts.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
