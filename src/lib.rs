// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` manages transient user-facing notifications.
//!
//! It keeps a bounded, newest-first queue of toasts, each with its own
//! expiry countdown that can be paused and resumed, and removes toasts on
//! expiry, on request, or when a newer toast pushes the oldest out.

#![doc(html_root_url = "https://docs.rs/toast_queue/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;

#[cfg(test)]
mod test_utils;
