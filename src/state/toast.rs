//! Ephemeral notification queue with timed expiry.
//!
//! An explicitly constructed service owned by the app rather than a global:
//! tests build their own instances and the id counter never leaks across
//! them.

use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

/// Append-only queue of toasts in insertion order, expired by the caller's
/// clock via [`Notifier::sweep`].
#[derive(Debug)]
pub struct Notifier {
    next_id: u64,
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            toasts: Vec::new(),
            ttl: TOAST_TTL,
        }
    }

    /// Construct with a custom expiry window (tests shorten it).
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            next_id: 0,
            toasts: Vec::new(),
            ttl,
        }
    }

    /// Append a message; ids are strictly increasing for the service
    /// lifetime.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            message: message.into(),
            severity,
            created_at: Instant::now(),
        });
        self.next_id
    }

    /// Remove a toast immediately. Removal is idempotent: dismissing an
    /// absent id (double dismiss, or dismiss after expiry) is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop entries older than the TTL. Driven from the render tick, so
    /// expiry is independent of any in-flight network work.
    pub fn sweep(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|t| now.duration_since(t.created_at) < ttl);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
