//! Retry policy with exponential backoff.

use std::time::Duration;

use crate::error::FetchError;

/// Decides whether a failed attempt is retried and how long to back off.
///
/// Delays grow geometrically with the attempt number and are capped at
/// `max_delay`, so the sequence is monotonically non-decreasing for any
/// `multiplier >= 1.0`.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts before giving up (including the first).
    pub max_attempts: u32,
    /// Delay after the first failed attempt.
    pub initial_delay: Duration,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
    /// Factor applied to the delay after each failed attempt.
    pub multiplier: f64,
}

impl RetryPolicy {
    /// Creates a policy with a custom attempt budget and default backoff.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Creates a policy that never retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            multiplier: 1.0,
        }
    }

    /// Sets the delay after the first failed attempt.
    #[must_use]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the upper bound on any single delay.
    #[must_use]
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Returns the backoff delay following the given (1-based) attempt.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let scaled = self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent as i32);
        Duration::from_secs_f64(scaled).min(self.max_delay)
    }

    /// Decides whether to retry after the given attempt failed with `error`.
    ///
    /// Returns the delay to sleep before the next attempt, or `None` when
    /// the error is not retryable or the attempt budget is spent.
    pub fn should_retry(&self, attempt: u32, error: &FetchError) -> Option<Duration> {
        if attempt >= self.max_attempts || !error.is_retryable() {
            return None;
        }
        Some(self.delay_for_attempt(attempt))
    }
}

impl Default for RetryPolicy {
    /// Three attempts, 100 ms initial delay, doubling, capped at 30 s.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(30),
            multiplier: 2.0,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
