// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! Toasts are short-lived messages that inform users about actions (save
//! success, errors, etc.) without blocking interaction. Each toast runs its
//! own countdown, which can be paused while the pointer hovers it.
//!
//! # Components
//!
//! - [`notification`] - Core `Toast` struct, kinds and lifecycle states
//! - [`queue`] - `ToastQueue`, the bounded state machine
//! - [`timer`] - `Clock` and `Scheduler` capabilities the queue runs on
//! - [`scheduler`] - Tick-polled and tokio-backed schedulers
//! - [`manager`] - `ToastManager`, a thread-safe handle driven by tokio
//! - [`history`] - In-session record of dismissed toasts
//!
//! # Usage
//!
//! ```no_run
//! use toast_queue::config::ToastConfig;
//! use toast_queue::notifications::ToastManager;
//!
//! # async fn demo() -> toast_queue::error::Result<()> {
//! let manager = ToastManager::new(&ToastConfig::default())?;
//! let id = manager.success("Image saved successfully", None);
//!
//! // Pointer enters and leaves the toast
//! manager.pause(id);
//! manager.resume(id);
//!
//! // Render from the live view
//! let view = manager.subscribe();
//! for toast in view.borrow().iter() {
//!     println!("[{}] {}", toast.kind(), toast.message());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 3s for success/info, 3.5s for warnings, 4s for errors
//! - Max live toasts: 5 (showing a sixth evicts the oldest)
//! - Zero duration: sticky, dismissed only by `hide`
//! - Unknown or already removed IDs are silently ignored by every operation

mod history;
mod manager;
mod notification;
mod queue;
mod scheduler;
mod timer;

pub use history::{CircularBuffer, DismissedToast, Dismissal};
pub use manager::ToastManager;
pub use notification::{Toast, ToastId, ToastKind, ToastState};
pub use queue::{Message as ToastMessage, ToastQueue};
pub use scheduler::{TickScheduler, TokioScheduler, TokioTimer};
pub use timer::{Clock, Expiry, Scheduler, SystemClock, TimerToken};
