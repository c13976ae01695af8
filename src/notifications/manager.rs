// SPDX-License-Identifier: MPL-2.0
//! Shared, runtime-backed toast manager.
//!
//! `ToastManager` wraps one [`ToastQueue`] behind a single mutex and drives
//! its timers on tokio. Clones are cheap handles to the same queue, so UI
//! bindings on any thread can show, hide, pause and resume toasts.

use super::history::DismissedToast;
use super::notification::{Toast, ToastId, ToastKind};
use super::queue::ToastQueue;
use super::scheduler::TokioScheduler;
use super::timer::{Expiry, SystemClock};
use crate::config::ToastConfig;
use crate::error::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};

type Queue = ToastQueue<SystemClock, TokioScheduler>;

struct Shared {
    /// Guards the whole queue and every entry's state in one place.
    queue: Mutex<Queue>,
    /// Live view republished after each change.
    view: watch::Sender<Vec<Toast>>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs one turn against the queue and publishes the result.
    fn apply<R>(&self, turn: impl FnOnce(&mut Queue) -> R) -> R {
        let mut queue = self.lock();
        let before = queue.revision();
        let result = turn(&mut queue);
        if queue.revision() != before {
            self.view.send_replace(queue.snapshot());
        }
        result
    }
}

/// Handle to the session's toast queue.
#[derive(Clone)]
pub struct ToastManager {
    shared: Arc<Shared>,
}

impl ToastManager {
    /// Creates a manager on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`](crate::error::Error::Runtime) when called
    /// outside a tokio runtime.
    pub fn new(config: &ToastConfig) -> Result<Self> {
        let runtime = Handle::try_current()?;
        Ok(Self::with_runtime(config, runtime))
    }

    /// Creates a manager whose timers run on `runtime`.
    ///
    /// The returned handle may be used from threads outside the runtime.
    #[must_use]
    pub fn with_runtime(config: &ToastConfig, runtime: Handle) -> Self {
        let (expiry_tx, expiry_rx) = mpsc::unbounded_channel();
        let scheduler = TokioScheduler::new(runtime.clone(), expiry_tx);
        let (view, _) = watch::channel(Vec::new());
        let shared = Arc::new(Shared {
            queue: Mutex::new(ToastQueue::with_config(config, SystemClock, scheduler)),
            view,
        });

        runtime.spawn(deliver_expiries(Arc::downgrade(&shared), expiry_rx));
        Self { shared }
    }

    /// Shows a toast. See [`ToastQueue::show`].
    pub fn show(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> ToastId {
        self.shared.apply(|queue| queue.show(kind, message, duration))
    }

    /// Shows a success toast; `None` means 3000 ms.
    pub fn success(&self, message: impl Into<String>, duration: Option<Duration>) -> ToastId {
        self.shared.apply(|queue| queue.success(message, duration))
    }

    /// Shows an error toast; `None` means 4000 ms.
    pub fn error(&self, message: impl Into<String>, duration: Option<Duration>) -> ToastId {
        self.shared.apply(|queue| queue.error(message, duration))
    }

    /// Shows a warning toast; `None` means 3500 ms.
    pub fn warning(&self, message: impl Into<String>, duration: Option<Duration>) -> ToastId {
        self.shared.apply(|queue| queue.warning(message, duration))
    }

    /// Shows an info toast; `None` means 3000 ms.
    pub fn info(&self, message: impl Into<String>, duration: Option<Duration>) -> ToastId {
        self.shared.apply(|queue| queue.info(message, duration))
    }

    /// Dismisses a toast. See [`ToastQueue::hide`].
    pub fn hide(&self, id: ToastId) -> bool {
        self.shared.apply(|queue| queue.hide(id))
    }

    /// Freezes a toast's countdown. See [`ToastQueue::pause`].
    pub fn pause(&self, id: ToastId) -> bool {
        self.shared.apply(|queue| queue.pause(id))
    }

    /// Restarts a paused countdown. See [`ToastQueue::resume`].
    pub fn resume(&self, id: ToastId) -> bool {
        self.shared.apply(|queue| queue.resume(id))
    }

    /// Removes every toast. See [`ToastQueue::clear`].
    pub fn clear(&self) -> usize {
        self.shared.apply(ToastQueue::clear)
    }

    /// Returns a copy of the toast with the given ID, if it is live.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.shared.lock().get(id).cloned()
    }

    /// Returns the live toasts, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Toast> {
        self.shared.lock().snapshot()
    }

    /// Number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.lock().len()
    }

    /// Returns `true` when no toast is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.lock().is_empty()
    }

    /// Returns the dismissed toasts of this session, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<DismissedToast> {
        self.shared.lock().history().cloned().collect()
    }

    /// Returns how many dismissals the history keeps.
    #[must_use]
    pub fn history_capacity(&self) -> usize {
        self.shared.lock().history_capacity()
    }

    /// Forgets the session history. See [`ToastQueue::clear_history`].
    pub fn clear_history(&self) {
        self.shared.lock().clear_history();
    }

    /// Subscribes to the live view of the queue.
    ///
    /// The receiver always holds the latest snapshot, newest first.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.shared.view.subscribe()
    }
}

impl std::fmt::Debug for ToastManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastManager")
            .field("queue", &*self.shared.lock())
            .finish()
    }
}

/// Applies timer fires until the manager is gone.
async fn deliver_expiries(shared: Weak<Shared>, mut expiries: mpsc::UnboundedReceiver<Expiry>) {
    while let Some(expiry) = expiries.recv().await {
        let Some(shared) = shared.upgrade() else {
            break;
        };
        shared.apply(|queue| queue.expire(expiry));
    }
    log::trace!("toast expiry delivery stopped");
}
