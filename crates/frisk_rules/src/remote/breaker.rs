//! Circuit breaker guarding calls to the confidence classifier.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Observable state of the circuit breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    /// Requests flow to the network.
    Closed,
    /// Requests short-circuit to the local fallback.
    Open,
}

/// Consecutive-failure circuit breaker shared across concurrent scans.
///
/// The breaker opens after `failure_threshold` consecutive failures and
/// stays open for `cooldown`. Once the cool-down elapses the next call is
/// allowed through as a probe; a success closes the breaker and resets
/// the counter, another failure re-opens it with a fresh timestamp.
pub(super) struct CircuitBreaker {
    failure_threshold: u32,
    cooldown: Duration,
    epoch: Instant,
    consecutive_failures: AtomicU32,
    /// Milliseconds since `epoch` when the breaker opened, plus one.
    /// Zero means the breaker is closed.
    opened_at_ms: AtomicU64,
}

impl CircuitBreaker {
    pub(super) fn new(failure_threshold: u32, cooldown: Duration) -> Self {
        Self {
            failure_threshold,
            cooldown,
            epoch: Instant::now(),
            consecutive_failures: AtomicU32::new(0),
            opened_at_ms: AtomicU64::new(0),
        }
    }

    pub(super) fn state(&self) -> BreakerState {
        if self.opened_at_ms.load(Ordering::Acquire) == 0 {
            BreakerState::Closed
        } else {
            BreakerState::Open
        }
    }

    /// Returns whether a network request may be attempted right now.
    ///
    /// While open, requests are refused until the cool-down elapses;
    /// after that a single caller's probe is allowed through.
    pub(super) fn allow_request(&self) -> bool {
        let opened = self.opened_at_ms.load(Ordering::Acquire);
        if opened == 0 {
            return true;
        }
        let opened_at = Duration::from_millis(opened - 1);
        self.epoch.elapsed().saturating_sub(opened_at) >= self.cooldown
    }

    pub(super) fn record_success(&self) {
        self.consecutive_failures.store(0, Ordering::Release);
        self.opened_at_ms.store(0, Ordering::Release);
    }

    pub(super) fn record_failure(&self) {
        let failures = self.consecutive_failures.fetch_add(1, Ordering::AcqRel) + 1;
        if failures >= self.failure_threshold {
            let now_ms = u64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u64::MAX - 1);
            self.opened_at_ms.store(now_ms + 1, Ordering::Release);
        }
    }
}
