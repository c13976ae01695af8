// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: How many toasts may be live at once
//! - **Durations**: Auto-dismiss delays per toast kind
//! - **History**: In-session record of dismissed toasts

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of toasts kept in the queue before the oldest is evicted.
pub const MAX_TOASTS: usize = 5;

/// Minimum allowed queue capacity.
pub const MIN_QUEUE_CAPACITY: usize = 1;

/// Maximum allowed queue capacity.
pub const MAX_QUEUE_CAPACITY: usize = 20;

// ==========================================================================
// Duration Defaults (milliseconds)
// ==========================================================================

/// Delay used by `show` when the caller gives none.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Default delay for success toasts.
pub const SUCCESS_DURATION_MS: u64 = 3000;

/// Default delay for error toasts.
pub const ERROR_DURATION_MS: u64 = 4000;

/// Default delay for warning toasts.
pub const WARNING_DURATION_MS: u64 = 3500;

/// Default delay for info toasts.
pub const INFO_DURATION_MS: u64 = 3000;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of dismissed toasts remembered for the session.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Minimum history capacity.
pub const MIN_HISTORY_CAPACITY: usize = 1;

/// Maximum history capacity.
pub const MAX_HISTORY_CAPACITY: usize = 1000;
