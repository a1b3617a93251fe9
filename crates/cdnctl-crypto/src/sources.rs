use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;

pub const NONCE_MIN: u32 = 10_000;
pub const NONCE_MAX: u32 = 99_999;

/// Source of the instant stamped onto each signed request.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of the per-request nonce. Implementations must stay within
/// `NONCE_MIN..=NONCE_MAX` so the rendered value is always five digits.
pub trait NonceSource {
    fn next_nonce(&self) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn next_nonce(&self) -> u32 {
        rand::thread_rng().gen_range(NONCE_MIN..=NONCE_MAX)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Parses a compact `YYYYMMDDTHHMMSSZ` stamp.
    pub fn parse(stamp: &str) -> Result<Self, chrono::ParseError> {
        let naive = chrono::NaiveDateTime::parse_from_str(stamp, crate::TIMESTAMP_FORMAT)?;
        Ok(Self(Utc.from_utc_datetime(&naive)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedNonce(pub u32);

impl NonceSource for FixedNonce {
    fn next_nonce(&self) -> u32 {
        self.0
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<T: NonceSource + ?Sized> NonceSource for &T {
    fn next_nonce(&self) -> u32 {
        (**self).next_nonce()
    }
}
