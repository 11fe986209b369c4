//! Browser Platform Adapters
//!
//! `localStorage` and `setTimeout` backed implementations of the core's
//! storage and timer traits.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use inventory_core::{App, KeyValueStorage, StorageError, StorageResult, SystemClock, TimerKey, Timers};
use leptos::task::spawn_local;

/// Controller type used by the running app
pub type BrowserApp = App<BrowserTimers, BrowserStorage, SystemClock>;

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

type Dispatch = Rc<dyn Fn(TimerKey)>;

/// One spawned timeout per key. Disarming flips the key's cancel flag so the
/// sleeping task does nothing when it wakes.
#[derive(Default)]
pub struct BrowserTimers {
    dispatch: Option<Dispatch>,
    pending: HashMap<TimerKey, Rc<Cell<bool>>>,
}

impl BrowserTimers {
    /// Set where elapsed timers are delivered. Must happen before any `arm`.
    pub fn bind(&mut self, dispatch: impl Fn(TimerKey) + 'static) {
        self.dispatch = Some(Rc::new(dispatch));
    }
}

impl Timers for BrowserTimers {
    fn arm(&mut self, key: TimerKey, after: Duration) {
        self.disarm(key);
        let Some(dispatch) = self.dispatch.clone() else {
            log::error!("[TIMER] {:?} armed before dispatch was bound", key);
            return;
        };

        let cancelled = Rc::new(Cell::new(false));
        self.pending.insert(key, cancelled.clone());
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);

        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            if !cancelled.get() {
                dispatch(key);
            }
        });
    }

    fn disarm(&mut self, key: TimerKey) {
        if let Some(cancelled) = self.pending.remove(&key) {
            cancelled.set(true);
        }
    }

    fn disarm_all(&mut self) {
        for (_, cancelled) in self.pending.drain() {
            cancelled.set(true);
        }
    }
}
