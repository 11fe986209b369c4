//! Timer Host Abstraction
//!
//! The state machine never sleeps. It asks its host to arm a named timer and
//! expects `App::on_timer` to be called with the same key when it elapses.
//! Re-arming a key replaces the previous deadline.

use std::time::Duration;

use crate::models::ToastId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Self-removal of one toast
    Toast(ToastId),
    /// Expiry of the session with this generation number
    SessionExpiry(u64),
}

pub trait Timers {
    fn arm(&mut self, key: TimerKey, after: Duration);
    fn disarm(&mut self, key: TimerKey);
    /// Cancel everything, used on teardown
    fn disarm_all(&mut self);
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline: Duration,
    seq: u64,
    key: TimerKey,
}

/// Deterministic timer host for headless use and tests.
///
/// Time only moves through [`VirtualTimers::pop_due`] and
/// [`VirtualTimers::settle`]; `App::advance` drives both.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_armed(&self, key: TimerKey) -> bool {
        self.pending.iter().any(|p| p.key == key)
    }

    pub fn armed_count(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return the earliest timer due at or before `until`,
    /// moving the clock to its deadline. Ties fire in arming order.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerKey> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= until)
            .min_by_key(|(_, p)| (p.deadline, p.seq))
            .map(|(idx, _)| idx)?;
        let due = self.pending.remove(idx);
        self.now = self.now.max(due.deadline);
        Some(due.key)
    }

    /// Move the clock forward to `until` without firing anything
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl Timers for VirtualTimers {
    fn arm(&mut self, key: TimerKey, after: Duration) {
        self.disarm(key);
        self.seq += 1;
        self.pending.push(Pending {
            deadline: self.now + after,
            seq: self.seq,
            key,
        });
    }

    fn disarm(&mut self, key: TimerKey) {
        self.pending.retain(|p| p.key != key);
    }

    fn disarm_all(&mut self) {
        self.pending.clear();
    }
}
