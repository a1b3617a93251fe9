use cdnctl_crypto::{
    compute_signature, signing_string, Credentials, FixedClock, FixedNonce, RequestSigner,
    NONCE_MAX, NONCE_MIN,
};
use chrono::DateTime;
use proptest::prelude::*;

const STAMP: &str = "20240101T000000Z";

const METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "PATCH"];

fn signer(nonce: u32) -> RequestSigner<FixedClock, FixedNonce> {
    RequestSigner::new(FixedClock::parse(STAMP).expect("clock"), FixedNonce(nonce))
}

fn signer_at(secs: i64) -> RequestSigner<FixedClock, FixedNonce> {
    let instant = DateTime::from_timestamp(secs, 0).expect("instant");
    RequestSigner::new(FixedClock(instant), FixedNonce(12345))
}

#[test]
fn end_to_end_vector_is_reproducible() {
    let body = "{\"domain\":\"example.com\"}";
    let signed = signer(12345)
        .sign("POST", "/v1.1/service_id", body, &Credentials::new("AK1", "SK1"))
        .expect("sign");
    let message = format!("POST\n/v1.1/service_id\n{STAMP}\n12345\nAK1\n{body}");
    let expected = compute_signature("SK1", &message).expect("signature");
    assert_eq!(signed.signature, expected);
    assert_eq!(signed.authorization(), format!("HMAC-SHA256 AK1:{expected}"));
}

proptest! {
    #[test]
    fn signing_is_deterministic(
        uri in "/[a-z0-9/._-]{0,32}",
        body in ".{0,64}",
        key in "[A-Za-z0-9]{1,16}",
        secret in ".{0,32}",
        nonce in NONCE_MIN..=NONCE_MAX,
    ) {
        let credentials = Credentials::new(key, secret);
        let first = signer(nonce).sign("POST", &uri, &body, &credentials).expect("sign");
        let second = signer(nonce).sign("POST", &uri, &body, &credentials).expect("sign");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn changing_body_changes_signature(body in ".{0,64}", other in ".{0,64}") {
        prop_assume!(body != other);
        let credentials = Credentials::new("AK1", "SK1");
        let first = signer(12345).sign("POST", "/v1.1/service_id", &body, &credentials).expect("sign");
        let second = signer(12345).sign("POST", "/v1.1/service_id", &other, &credentials).expect("sign");
        prop_assert_ne!(first.signature, second.signature);
    }

    #[test]
    fn changing_nonce_changes_signature(a in NONCE_MIN..=NONCE_MAX, b in NONCE_MIN..=NONCE_MAX) {
        prop_assume!(a != b);
        let credentials = Credentials::new("AK1", "SK1");
        let first = signer(a).sign("POST", "/", "{}", &credentials).expect("sign");
        let second = signer(b).sign("POST", "/", "{}", &credentials).expect("sign");
        prop_assert_ne!(first.signature, second.signature);
    }

    #[test]
    fn changing_secret_changes_signature(a in "[a-z]{1,16}", b in "[a-z]{1,16}") {
        prop_assume!(a != b);
        let message = signing_string("POST", "/", STAMP, "12345", "AK1", "{}");
        let first = compute_signature(&a, &message).expect("signature");
        let second = compute_signature(&b, &message).expect("signature");
        prop_assert_ne!(first, second);
    }

    #[test]
    fn changing_access_key_changes_signature(a in "[A-Z0-9]{1,12}", b in "[A-Z0-9]{1,12}") {
        prop_assume!(a != b);
        let first = signer(12345).sign("POST", "/", "{}", &Credentials::new(a, "SK1")).expect("sign");
        let second = signer(12345).sign("POST", "/", "{}", &Credentials::new(b, "SK1")).expect("sign");
        prop_assert_ne!(first.signature, second.signature);
    }

    #[test]
    fn changing_method_changes_signature(
        a in prop::sample::select(METHODS.to_vec()),
        b in prop::sample::select(METHODS.to_vec()),
    ) {
        prop_assume!(a != b);
        let credentials = Credentials::new("AK1", "SK1");
        let first = signer(12345).sign(a, "/", "{}", &credentials).expect("sign");
        let second = signer(12345).sign(b, "/", "{}", &credentials).expect("sign");
        prop_assert_ne!(first.signature, second.signature);
    }

    #[test]
    fn changing_uri_changes_signature(a in "/[a-z0-9/._-]{0,32}", b in "/[a-z0-9/._-]{0,32}") {
        prop_assume!(a != b);
        let credentials = Credentials::new("AK1", "SK1");
        let first = signer(12345).sign("POST", &a, "{}", &credentials).expect("sign");
        let second = signer(12345).sign("POST", &b, "{}", &credentials).expect("sign");
        prop_assert_ne!(first.signature, second.signature);
    }

    #[test]
    fn changing_timestamp_changes_signature(a in 0i64..4_000_000_000, b in 0i64..4_000_000_000) {
        prop_assume!(a != b);
        let credentials = Credentials::new("AK1", "SK1");
        let first = signer_at(a).sign("POST", "/", "{}", &credentials).expect("sign");
        let second = signer_at(b).sign("POST", "/", "{}", &credentials).expect("sign");
        prop_assert_ne!(&first.timestamp, &second.timestamp);
        prop_assert_ne!(first.signature, second.signature);
    }
}
