// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and their validity rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability.
//!
//! # Modules
//!
//! - [`toast`]: Queue sizing types ([`QueueCapacity`](toast::QueueCapacity),
//!   [`HistoryCapacity`](toast::HistoryCapacity))

pub mod toast;
