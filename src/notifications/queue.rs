// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastQueue` owns the live toasts (newest first), enforces the
//! capacity bound by evicting the oldest entry, and runs one expiry timer
//! per toast through the [`Scheduler`] it was built with.
//!
//! Every operation is a single `&mut self` turn. Within a turn a timer is
//! always disarmed before the state change that invalidates it, and armed
//! only after the transition that justifies it, so no toast ever holds more
//! than one live timer and no removed toast holds any.

use super::history::{CircularBuffer, DismissedToast, Dismissal};
use super::notification::{Toast, ToastId, ToastKind, ToastState};
use super::scheduler::TickScheduler;
use super::timer::{Clock, Expiry, Scheduler, TimerToken};
use crate::config::ToastConfig;
use crate::domain::toast::QueueCapacity;
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Messages for toast state changes, for hosts that route UI events
/// through an update function.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Pointer entered the toast.
    Pause(ToastId),
    /// Pointer left the toast.
    Resume(ToastId),
    /// A timer fired.
    Expired(Expiry),
}

struct Armed<T> {
    token: TimerToken,
    handle: T,
}

struct Slot<T> {
    toast: Toast,
    timer: Option<Armed<T>>,
}

/// Bounded queue of live toasts.
pub struct ToastQueue<C, S: Scheduler> {
    /// Live toasts (newest first).
    entries: VecDeque<Slot<S::Timer>>,
    capacity: QueueCapacity,
    default_duration: Duration,
    history: CircularBuffer<DismissedToast>,
    next_token: TimerToken,
    /// Bumped on every observable change.
    revision: u64,
    clock: C,
    scheduler: S,
}

impl<C: Clock, S: Scheduler> ToastQueue<C, S> {
    /// Creates an empty queue with the default configuration.
    pub fn new(clock: C, scheduler: S) -> Self {
        Self::with_config(&ToastConfig::default(), clock, scheduler)
    }

    /// Creates an empty queue sized and tuned by `config`.
    pub fn with_config(config: &ToastConfig, clock: C, scheduler: S) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: config.queue_capacity(),
            default_duration: config.default_duration(),
            history: CircularBuffer::new(config.history_capacity()),
            next_token: TimerToken::first(),
            revision: 0,
            clock,
            scheduler,
        }
    }

    /// Shows a new toast at the front of the queue.
    ///
    /// `None` uses the configured default duration; `Duration::ZERO` makes the
    /// toast sticky. When the queue is full the oldest toast is evicted.
    pub fn show(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> ToastId {
        let duration = duration.unwrap_or(self.default_duration);
        let toast = Toast::new(kind, message.into(), duration);
        let id = toast.id();

        match kind {
            ToastKind::Warning => log::warn!("toast {id}: {}", toast.message()),
            ToastKind::Error => log::error!("toast {id}: {}", toast.message()),
            ToastKind::Success | ToastKind::Info => {
                log::debug!("toast {id} shown: [{kind}] {}", toast.message());
            }
        }

        self.entries.push_front(Slot { toast, timer: None });
        self.revision += 1;

        while self.entries.len() > self.capacity.value() {
            let oldest = self.entries.len() - 1;
            self.remove_at(oldest, Dismissal::Evicted);
        }

        if !duration.is_zero() {
            self.arm(0);
        }
        id
    }

    /// Shows a success toast; `None` means 3000 ms.
    pub fn success(&mut self, message: impl Into<String>, duration: Option<Duration>) -> ToastId {
        self.show_kind(ToastKind::Success, message, duration)
    }

    /// Shows an error toast; `None` means 4000 ms.
    pub fn error(&mut self, message: impl Into<String>, duration: Option<Duration>) -> ToastId {
        self.show_kind(ToastKind::Error, message, duration)
    }

    /// Shows a warning toast; `None` means 3500 ms.
    pub fn warning(&mut self, message: impl Into<String>, duration: Option<Duration>) -> ToastId {
        self.show_kind(ToastKind::Warning, message, duration)
    }

    /// Shows an info toast; `None` means 3000 ms.
    pub fn info(&mut self, message: impl Into<String>, duration: Option<Duration>) -> ToastId {
        self.show_kind(ToastKind::Info, message, duration)
    }

    fn show_kind(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> ToastId {
        self.show(kind, message, Some(duration.unwrap_or(kind.default_duration())))
    }

    /// Dismisses a toast by its ID.
    ///
    /// Returns `true` if the toast was found and removed. Unknown or already
    /// removed IDs are ignored.
    pub fn hide(&mut self, id: ToastId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.remove_at(index, Dismissal::Hidden);
                true
            }
            None => false,
        }
    }

    /// Freezes an active toast's countdown.
    ///
    /// Sticky, paused and unknown toasts are left untouched. Returns `true`
    /// if the toast was paused.
    pub fn pause(&mut self, id: ToastId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let now = self.clock.now();
        let slot = &mut self.entries[index];
        if slot.toast.state() != ToastState::Active || slot.toast.is_sticky() {
            return false;
        }

        Self::disarm(&mut self.scheduler, slot);
        slot.toast.mark_paused(now);
        self.revision += 1;
        log::trace!(
            "toast {id} paused with {:?} left",
            slot.toast.remaining_duration()
        );
        true
    }

    /// Restarts a paused toast's countdown from where it stopped.
    ///
    /// A toast whose countdown already ran out is removed immediately.
    /// Returns `true` if the toast was resumed or removed.
    pub fn resume(&mut self, id: ToastId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let toast = &self.entries[index].toast;
        if toast.state() != ToastState::Paused {
            return false;
        }

        if toast.remaining_duration().is_zero() {
            self.remove_at(index, Dismissal::Expired);
        } else {
            log::trace!("toast {id} resumed with {:?} left", toast.remaining_duration());
            self.arm(index);
            self.revision += 1;
        }
        true
    }

    /// Applies a fired timer.
    ///
    /// Only the timer currently owned by the toast can remove it; fires of
    /// timers cancelled in the meantime are ignored. Returns `true` if the
    /// toast was removed.
    pub fn expire(&mut self, expiry: Expiry) -> bool {
        let current = self
            .position(expiry.id)
            .map(|index| (index, self.entries[index].timer.as_ref().map(|t| t.token)));

        match current {
            Some((index, Some(token))) if token == expiry.token => {
                self.remove_at(index, Dismissal::Expired);
                true
            }
            _ => {
                log::trace!("ignoring stale expiry for toast {}", expiry.id);
                false
            }
        }
    }

    /// Removes every toast. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        while !self.entries.is_empty() {
            let oldest = self.entries.len() - 1;
            self.remove_at(oldest, Dismissal::Cleared);
        }
        count
    }

    /// Handles a toast message. Returns `true` if the queue changed.
    pub fn handle_message(&mut self, message: Message) -> bool {
        match message {
            Message::Dismiss(id) => self.hide(id),
            Message::Pause(id) => self.pause(id),
            Message::Resume(id) => self.resume(id),
            Message::Expired(expiry) => self.expire(expiry),
        }
    }

    /// Returns the toast with the given ID, if it is live.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.entries
            .iter()
            .map(|slot| &slot.toast)
            .find(|toast| toast.id() == id)
    }

    /// Returns the live toasts, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter().map(|slot| &slot.toast)
    }

    /// Returns an owned copy of the live toasts, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Toast> {
        self.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.value()
    }

    /// Returns the dismissed toasts of this session, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &DismissedToast> {
        self.history.iter()
    }

    /// Returns how many dismissals the history keeps.
    #[must_use]
    pub fn history_capacity(&self) -> usize {
        self.history.capacity()
    }

    /// Forgets the dismissed toasts of this session. Live toasts are kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Returns a counter that changes whenever the live toasts change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the current reading of the queue's clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn position(&self, id: ToastId) -> Option<usize> {
        self.entries.iter().position(|slot| slot.toast.id() == id)
    }

    /// Starts a timer for the toast at `index` covering its remaining time.
    fn arm(&mut self, index: usize) {
        let now = self.clock.now();
        let token = self.next_token;
        self.next_token = token.next();

        let slot = &mut self.entries[index];
        Self::disarm(&mut self.scheduler, slot);
        slot.toast.mark_armed(now);

        // A deadline past the clock's range never comes: run without a timer.
        let Some(deadline) = now.checked_add(slot.toast.remaining_duration()) else {
            log::debug!(
                "toast {} has no reachable deadline, leaving it unarmed",
                slot.toast.id()
            );
            return;
        };
        let expiry = Expiry {
            id: slot.toast.id(),
            token,
        };
        let handle = self.scheduler.schedule(expiry, deadline);
        slot.timer = Some(Armed { token, handle });
    }

    fn disarm(scheduler: &mut S, slot: &mut Slot<S::Timer>) {
        if let Some(armed) = slot.timer.take() {
            scheduler.cancel(armed.handle);
        }
    }

    fn remove_at(&mut self, index: usize, reason: Dismissal) {
        let Some(mut slot) = self.entries.remove(index) else {
            return;
        };
        Self::disarm(&mut self.scheduler, &mut slot);
        slot.toast.mark_removed();
        self.revision += 1;

        log::debug!("toast {} {reason}", slot.toast.id());
        self.history.push(DismissedToast {
            toast: slot.toast,
            reason,
            dismissed_at: chrono::Utc::now(),
        });
    }
}

impl<C: Clock> ToastQueue<C, TickScheduler> {
    /// Fires every timer whose deadline has passed.
    ///
    /// Should be called periodically (e.g., every 100-500ms), or at
    /// [`TickScheduler::next_deadline`]. Returns how many toasts expired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let due = self.scheduler.take_due(now);
        due.into_iter().filter(|expiry| self.expire(*expiry)).count()
    }
}

impl<C, S: Scheduler> Drop for ToastQueue<C, S> {
    fn drop(&mut self) {
        for slot in &mut self.entries {
            if let Some(armed) = slot.timer.take() {
                self.scheduler.cancel(armed.handle);
            }
        }
    }
}

impl<C, S: Scheduler> fmt::Debug for ToastQueue<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastQueue")
            .field(
                "toasts",
                &self.entries.iter().map(|slot| &slot.toast).collect::<Vec<_>>(),
            )
            .field("capacity", &self.capacity)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
