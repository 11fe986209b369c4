//! Notification Queue
//!
//! Toasts in display order. Expiry is driven by the owner's timers; the
//! queue itself only stores and removes.

use crate::models::{Toast, ToastId, ToastKind};

#[derive(Debug, Default)]
pub struct NotificationQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, now_ms: i64) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            created_at_ms: now_ms,
        });
        id
    }

    /// Remove one toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }
}
