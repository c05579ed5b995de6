//! Request-rate limiting.
//!
//! EDGAR's fair-access policy caps automated clients at roughly ten
//! requests per second. The limiter enforces that as a minimum spacing
//! between request *starts*: a monitor over a single "next allowed slot"
//! instant. In-flight concurrency is not constrained; only initiation
//! spacing is.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

/// Enforces a minimum interval between consecutive request starts.
///
/// `acquire` serializes slot grants through one critical section: the
/// caller claims the next free slot and advances the shared cursor while
/// holding the lock, then sleeps until its slot outside the lock. No two
/// grants can be closer together than the configured interval, regardless
/// of how many tasks call concurrently, and a caller cancelled mid-sleep
/// leaves the cursor intact.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Creates a limiter with the given minimum spacing between requests.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Creates a limiter allowing `requests` starts per second.
    ///
    /// `requests == 0` disables limiting.
    pub fn per_second(requests: u32) -> Self {
        if requests == 0 {
            Self::unlimited()
        } else {
            Self::new(Duration::from_secs(1) / requests)
        }
    }

    /// Creates a limiter that never waits.
    pub fn unlimited() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Returns the configured minimum spacing.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Waits until the caller may start a request.
    ///
    /// Returns immediately when enough time has passed since the last
    /// grant; otherwise suspends the task until its slot comes up.
    pub async fn acquire(&self) {
        if self.min_interval.is_zero() {
            return;
        }

        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let grant = match *next {
                Some(at) if at > now => at,
                _ => now,
            };
            *next = Some(grant + self.min_interval);
            grant
        };

        sleep_until(slot).await;
    }
}

// ============================================================================
// Tests
// ============================================================================
