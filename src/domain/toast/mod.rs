// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! This module provides pure domain types for the toast queue:
//! - [`QueueCapacity`]: How many toasts may be live at once
//! - [`HistoryCapacity`]: How many dismissed toasts are remembered

mod newtypes;

pub use newtypes::{history_capacity_bounds, queue_capacity_bounds, HistoryCapacity, QueueCapacity};
