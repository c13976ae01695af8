// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for queue sizing values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Queue Capacity Bounds
// =============================================================================

/// Queue capacity bounds (1 to 20 toasts).
pub mod queue_capacity_bounds {
    /// Minimum queue capacity.
    pub const MIN: usize = 1;
    /// Maximum queue capacity.
    pub const MAX: usize = 20;
    /// Default queue capacity.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// History Capacity Bounds
// =============================================================================

/// History capacity bounds (1 to 1000 records).
pub mod history_capacity_bounds {
    /// Minimum history capacity.
    pub const MIN: usize = 1;
    /// Maximum history capacity.
    pub const MAX: usize = 1000;
    /// Default history capacity.
    pub const DEFAULT: usize = 50;
}

// =============================================================================
// QueueCapacity
// =============================================================================

/// Maximum number of live toasts.
///
/// Showing a toast while the queue is at capacity evicts the oldest one.
///
/// # Example
///
/// ```
/// use toast_queue::domain::toast::QueueCapacity;
///
/// assert_eq!(QueueCapacity::new(3).value(), 3);
///
/// // Values outside range are clamped
/// assert_eq!(QueueCapacity::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueCapacity(usize);

impl QueueCapacity {
    /// Creates a new queue capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(queue_capacity_bounds::MIN, queue_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for QueueCapacity {
    fn default() -> Self {
        Self(queue_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// HistoryCapacity
// =============================================================================

/// Number of dismissed toasts kept in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new history capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_capacity_bounds::MIN, history_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
