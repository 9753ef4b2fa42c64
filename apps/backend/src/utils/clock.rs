//! The single time source used for token and cache expiry.
//!
//! Every component that compares against "now" takes an `Arc<dyn Clock>` so
//! issuance, verification and cache freshness all agree on the same instant.

use std::sync::Arc;

use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};

pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

impl SystemClock {
    pub fn shared() -> Arc<dyn Clock> {
        Arc::new(SystemClock)
    }
}

/// A clock that only moves when told to. Used by tests to step across
/// token and cache expiry boundaries deterministically.
///
/// ```
/// use backend::utils::clock::{Clock, ManualClock};
/// use time::Duration;
///
/// let clock = ManualClock::starting_now();
/// let t0 = clock.now();
/// clock.advance(Duration::seconds(30));
/// assert_eq!(clock.now() - t0, Duration::seconds(30));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<OffsetDateTime>,
}

impl ManualClock {
    pub fn new(start: OffsetDateTime) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Start at the current wall-clock second (sub-second precision dropped,
    /// matching the resolution of token timestamps).
    pub fn starting_now() -> Self {
        let now = OffsetDateTime::now_utc();
        let truncated = OffsetDateTime::from_unix_timestamp(now.unix_timestamp()).unwrap_or(now);
        Self::new(truncated)
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock()
    }
}
