// SPDX-License-Identifier: MPL-2.0
//! In-session record of dismissed toasts.
//!
//! Backed by a memory-bounded ring buffer that evicts the oldest record when
//! capacity is reached. Nothing here outlives the queue.

use super::notification::Toast;
use crate::domain::toast::HistoryCapacity;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fmt;

/// Why a toast left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// Explicit `hide`.
    Hidden,
    /// Its countdown ran out, or it was resumed with nothing left.
    Expired,
    /// Pushed out by a newer toast at capacity.
    Evicted,
    /// Removed by `clear`.
    Cleared,
}

impl fmt::Display for Dismissal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Dismissal::Hidden => "hidden",
            Dismissal::Expired => "expired",
            Dismissal::Evicted => "evicted",
            Dismissal::Cleared => "cleared",
        };
        f.write_str(label)
    }
}

/// A toast that has left the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct DismissedToast {
    /// Final snapshot, in `Removed` state.
    pub toast: Toast,
    pub reason: Dismissal,
    /// Wall-clock time of removal.
    pub dismissed_at: DateTime<Utc>,
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    #[must_use]
    pub fn new(capacity: HistoryCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a new circular buffer with a raw capacity value.
    ///
    /// For production use, prefer [`CircularBuffer::new`] with [`HistoryCapacity`].
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Maximum number of records kept before the oldest is dropped.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every record; the capacity is unchanged.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_buffer_overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(3);

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        buffer.push(4); // Evicts 1
        buffer.push(5); // Evicts 2

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
    }

    #[test]
    fn circular_buffer_zero_capacity_holds_one() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(0);
        buffer.push(1);
        buffer.push(2);

        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn circular_buffer_clear_keeps_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(5);
        buffer.push(1);
        buffer.push(2);

        buffer.clear();

        assert_eq!(buffer.iter().count(), 0);
        assert_eq!(buffer.capacity(), 5);
    }

    #[test]
    fn circular_buffer_new_uses_history_capacity() {
        let buffer: CircularBuffer<i32> = CircularBuffer::new(HistoryCapacity::new(12));
        assert_eq!(buffer.capacity(), 12);
    }

    #[test]
    fn dismissal_labels() {
        assert_eq!(Dismissal::Evicted.to_string(), "evicted");
        assert_eq!(Dismissal::Expired.to_string(), "expired");
    }
}
