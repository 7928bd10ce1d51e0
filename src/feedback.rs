//! Short-lived user notifications
//!
//! A toast is shown, lives for a fixed time and is then dismissed. Anything
//! that renders them subscribes to the broadcast of show/dismiss events.

use colored::*;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;

pub const TOAST_TTL: Duration = Duration::from_secs(5);
const EVENT_BUFFER: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let line = match self.kind {
            ToastKind::Success => format!("✓ {}", self.message).green(),
            ToastKind::Error => format!("✗ {}", self.message).red(),
            ToastKind::Info => format!("ℹ {}", self.message).blue(),
            ToastKind::Warning => format!("⚠ {}", self.message).yellow(),
        };
        write!(f, "{}", line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    Shown(Toast),
    Dismissed(u64),
}

struct Inner {
    active: Mutex<Vec<Toast>>,
    next_id: AtomicU64,
    events: broadcast::Sender<ToastEvent>,
    ttl: Duration,
}

#[derive(Clone)]
pub struct ToastQueue {
    inner: Arc<Inner>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::with_ttl(TOAST_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            inner: Arc::new(Inner {
                active: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                events,
                ttl,
            }),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.inner.events.subscribe()
    }

    /// Show a toast and schedule its dismissal. Must be called inside a
    /// tokio runtime.
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) -> Toast {
        let toast = Toast {
            id: self.inner.next_id.fetch_add(1, Ordering::Relaxed),
            kind,
            message: message.into(),
        };

        self.lock_active().push(toast.clone());
        // no subscribers is fine
        let _ = self.inner.events.send(ToastEvent::Shown(toast.clone()));

        let queue = self.clone();
        let id = toast.id;
        tokio::spawn(async move {
            tokio::time::sleep(queue.inner.ttl).await;
            queue.dismiss(id);
        });

        toast
    }

    pub fn success(&self, message: impl Into<String>) -> Toast {
        self.show(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Toast {
        self.show(ToastKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Toast {
        self.show(ToastKind::Info, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> Toast {
        self.show(ToastKind::Warning, message)
    }

    /// Remove a toast early. Dismissing an unknown id is a no-op.
    pub fn dismiss(&self, id: u64) {
        let removed = {
            let mut active = self.lock_active();
            let before = active.len();
            active.retain(|t| t.id != id);
            active.len() != before
        };
        if removed {
            let _ = self.inner.events.send(ToastEvent::Dismissed(id));
        }
    }

    pub fn active(&self) -> Vec<Toast> {
        self.lock_active().clone()
    }

    fn lock_active(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        self.inner
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}
