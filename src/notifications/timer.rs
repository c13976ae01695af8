// SPDX-License-Identifier: MPL-2.0
//! Time capabilities the queue depends on.
//!
//! The queue never reads the system clock or spawns timers itself. It asks a
//! [`Clock`] for monotonic readings and a [`Scheduler`] for single-shot
//! timers, so hosts can plug in a tokio runtime, a UI tick, or a manual
//! clock in tests.

use super::notification::ToastId;
use std::time::Instant;

/// Source of monotonic "now" readings.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock backed by the tokio time driver.
///
/// Outside a paused tokio test this is the plain monotonic clock; under
/// `tokio::time::pause` it follows the virtual time, keeping remaining-time
/// math consistent with tokio timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Generation tag of one armed timer.
///
/// Every arm draws a fresh token, so a fire that raced with a cancel can be
/// told apart from the timer currently owned by the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn first() -> Self {
        Self(0)
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Payload delivered back to the queue when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub id: ToastId,
    pub token: TimerToken,
}

/// Supplier of delayed single-shot callbacks.
///
/// Implementations deliver the [`Expiry`] passed to `schedule` back to
/// [`ToastQueue::expire`](super::ToastQueue::expire) once `deadline` is
/// reached, unless the timer was cancelled first.
pub trait Scheduler {
    /// Ownership of one pending timer.
    type Timer;

    fn schedule(&mut self, expiry: Expiry, deadline: Instant) -> Self::Timer;

    /// Cancels a pending timer. Cancelling a timer that already fired is a
    /// no-op.
    fn cancel(&mut self, timer: Self::Timer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_advance() {
        let first = TimerToken::first();
        assert_ne!(first, first.next());
        assert_eq!(first.next(), TimerToken::first().next());
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
