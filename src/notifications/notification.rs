// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` entry, its `ToastKind` and the
//! `ToastState` lifecycle used throughout the queue.

use crate::config::{
    ERROR_DURATION_MS, INFO_DURATION_MS, SUCCESS_DURATION_MS, WARNING_DURATION_MS,
};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
///
/// Identifiers come from a process-wide counter, so they are never reused,
/// not even across separate queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of toast. Purely descriptive for the queue; renderers pick colors
/// and icons from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    /// Operation completed successfully (3s).
    Success,
    /// Error requiring attention (4s).
    Error,
    /// Warning that doesn't block operation (3.5s).
    Warning,
    /// Informational message (3s).
    #[default]
    Info,
}

impl ToastKind {
    /// All kinds, in declaration order.
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Warning,
        ToastKind::Info,
    ];

    /// Returns the auto-dismiss delay used by the per-kind shortcuts.
    #[must_use]
    pub fn default_duration(self) -> Duration {
        let millis = match self {
            ToastKind::Success => SUCCESS_DURATION_MS,
            ToastKind::Error => ERROR_DURATION_MS,
            ToastKind::Warning => WARNING_DURATION_MS,
            ToastKind::Info => INFO_DURATION_MS,
        };
        Duration::from_millis(millis)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToastKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown toast kind: {s}"))
    }
}

/// Lifecycle state of a toast.
///
/// `Active ⇄ Paused`, either may become `Removed`, and `Removed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    /// Counting down (or sticky, with nothing to count).
    Active,
    /// Countdown frozen, typically while hovered.
    Paused,
    /// Left the queue. Only ever observed in history records.
    Removed,
}

/// A toast as seen by renderers.
///
/// Instances handed out by the queue are snapshots; mutating the queue is
/// only possible through its operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    message: String,
    requested_duration: Duration,
    remaining_duration: Duration,
    state: ToastState,
    armed_at: Option<Instant>,
}

impl Toast {
    pub(crate) fn new(kind: ToastKind, message: String, duration: Duration) -> Self {
        Self {
            id: ToastId::new(),
            kind,
            message,
            requested_duration: duration,
            remaining_duration: duration,
            state: ToastState::Active,
            armed_at: None,
        }
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the duration requested at creation. Zero means sticky.
    #[must_use]
    pub fn requested_duration(&self) -> Duration {
        self.requested_duration
    }

    /// Returns the countdown left as of the last arm or pause.
    #[must_use]
    pub fn remaining_duration(&self) -> Duration {
        self.remaining_duration
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> ToastState {
        self.state
    }

    /// Returns when the current timer was armed, if one is running.
    #[must_use]
    pub fn armed_at(&self) -> Option<Instant> {
        self.armed_at
    }

    /// Returns whether this toast never auto-dismisses.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.requested_duration.is_zero()
    }

    /// Returns the countdown a renderer should display at `now`.
    ///
    /// `None` for sticky toasts.
    #[must_use]
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        if self.is_sticky() {
            return None;
        }
        match (self.state, self.armed_at) {
            (ToastState::Active, Some(armed_at)) => Some(
                self.remaining_duration
                    .saturating_sub(now.saturating_duration_since(armed_at)),
            ),
            (ToastState::Removed, _) => Some(Duration::ZERO),
            _ => Some(self.remaining_duration),
        }
    }

    pub(crate) fn mark_armed(&mut self, now: Instant) {
        self.state = ToastState::Active;
        self.armed_at = Some(now);
    }

    /// Freezes the countdown, charging the time elapsed since arming.
    pub(crate) fn mark_paused(&mut self, now: Instant) {
        if let Some(armed_at) = self.armed_at.take() {
            let elapsed = now.saturating_duration_since(armed_at);
            self.remaining_duration = self.remaining_duration.saturating_sub(elapsed);
        }
        self.state = ToastState::Paused;
    }

    pub(crate) fn mark_removed(&mut self) {
        self.armed_at = None;
        self.state = ToastState::Removed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let t1 = Toast::new(ToastKind::Info, "test".into(), Duration::ZERO);
        let t2 = Toast::new(ToastKind::Info, "test".into(), Duration::ZERO);
        assert_ne!(t1.id(), t2.id());
        assert!(t2.id() > t1.id());
    }

    #[test]
    fn per_kind_defaults_are_fixed() {
        assert_eq!(ToastKind::Success.default_duration(), Duration::from_millis(3000));
        assert_eq!(ToastKind::Error.default_duration(), Duration::from_millis(4000));
        assert_eq!(ToastKind::Warning.default_duration(), Duration::from_millis(3500));
        assert_eq!(ToastKind::Info.default_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Warning".parse::<ToastKind>(), Ok(ToastKind::Warning));
        assert_eq!("error".parse::<ToastKind>(), Ok(ToastKind::Error));
        assert!("fatal".parse::<ToastKind>().is_err());
    }

    #[test]
    fn kind_display_round_trips_through_from_str() {
        for kind in ToastKind::ALL {
            assert_eq!(kind.to_string().parse::<ToastKind>(), Ok(kind));
        }
    }

    #[test]
    fn new_toast_is_active_with_full_countdown() {
        let toast = Toast::new(ToastKind::Success, "saved".into(), Duration::from_millis(500));
        assert_eq!(toast.state(), ToastState::Active);
        assert_eq!(toast.remaining_duration(), Duration::from_millis(500));
        assert_eq!(toast.message(), "saved");
        assert!(toast.armed_at().is_none());
    }

    #[test]
    fn pause_charges_elapsed_time() {
        let start = Instant::now();
        let mut toast = Toast::new(ToastKind::Info, "x".into(), Duration::from_millis(1000));
        toast.mark_armed(start);
        toast.mark_paused(start + Duration::from_millis(400));

        assert_eq!(toast.state(), ToastState::Paused);
        assert_eq!(toast.remaining_duration(), Duration::from_millis(600));
        assert!(toast.armed_at().is_none());
    }

    #[test]
    fn pause_clamps_overdue_countdown_at_zero() {
        let start = Instant::now();
        let mut toast = Toast::new(ToastKind::Info, "x".into(), Duration::from_millis(100));
        toast.mark_armed(start);
        toast.mark_paused(start + Duration::from_millis(250));

        assert_eq!(toast.remaining_duration(), Duration::ZERO);
    }

    #[test]
    fn time_left_tracks_active_countdown() {
        let start = Instant::now();
        let mut toast = Toast::new(ToastKind::Info, "x".into(), Duration::from_millis(1000));
        toast.mark_armed(start);

        assert_eq!(
            toast.time_left(start + Duration::from_millis(300)),
            Some(Duration::from_millis(700))
        );
        assert_eq!(
            toast.time_left(start + Duration::from_millis(5000)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn sticky_toast_has_no_time_left() {
        let toast = Toast::new(ToastKind::Error, "x".into(), Duration::ZERO);
        assert!(toast.is_sticky());
        assert_eq!(toast.time_left(Instant::now()), None);
    }
}
