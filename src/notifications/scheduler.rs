// SPDX-License-Identifier: MPL-2.0
//! Scheduler implementations.
//!
//! - [`TickScheduler`]: keeps deadlines in a list that the host polls from a
//!   periodic tick, for hosts with their own event loop.
//! - [`TokioScheduler`]: one tokio task per timer, delivering fires over an
//!   mpsc channel.

use super::notification::ToastId;
use super::timer::{Expiry, Scheduler, TimerToken};
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Scheduler polled by the host.
///
/// Timers are plain deadlines; nothing fires until
/// [`ToastQueue::tick`](super::ToastQueue::tick) asks for the due ones.
#[derive(Debug, Default)]
pub struct TickScheduler {
    pending: Vec<(Instant, Expiry)>,
}

impl TickScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Expiry> {
        let mut due: Vec<(Instant, Expiry)> = Vec::new();
        self.pending.retain(|&(deadline, expiry)| {
            if deadline <= now {
                due.push((deadline, expiry));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(deadline, _)| deadline);
        due.into_iter().map(|(_, expiry)| expiry).collect()
    }

    /// Earliest pending deadline, for hosts that sleep until the next tick.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(deadline, _)| deadline).min()
    }

    /// Number of armed timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether a timer is armed for the toast.
    #[must_use]
    pub fn is_pending(&self, id: ToastId) -> bool {
        self.pending.iter().any(|(_, expiry)| expiry.id == id)
    }
}

impl Scheduler for TickScheduler {
    type Timer = TimerToken;

    fn schedule(&mut self, expiry: Expiry, deadline: Instant) -> TimerToken {
        self.pending.push((deadline, expiry));
        expiry.token
    }

    fn cancel(&mut self, timer: TimerToken) {
        self.pending.retain(|(_, expiry)| expiry.token != timer);
    }
}

/// Scheduler running each timer as a task on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
    expiries: UnboundedSender<Expiry>,
}

impl TokioScheduler {
    /// Timers are spawned on `runtime`; fires are sent to `expiries`.
    #[must_use]
    pub fn new(runtime: Handle, expiries: UnboundedSender<Expiry>) -> Self {
        Self { runtime, expiries }
    }
}

/// A pending tokio timer. Dropping it aborts the task.
#[derive(Debug)]
pub struct TokioTimer(JoinHandle<()>);

impl Drop for TokioTimer {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl Scheduler for TokioScheduler {
    type Timer = TokioTimer;

    fn schedule(&mut self, expiry: Expiry, deadline: Instant) -> TokioTimer {
        let expiries = self.expiries.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline.into()).await;
            // Receiver gone means the queue was dropped.
            let _ = expiries.send(expiry);
        });
        TokioTimer(task)
    }

    fn cancel(&mut self, timer: TokioTimer) {
        drop(timer);
    }
}
