//! Inventory Core
//!
//! Client state machine for the inventory manager, independent of any UI:
//! - session: page, user and selected item
//! - item_store: item collection mirrored into key-value storage
//! - search: derived filtered view
//! - notify: self-expiring toasts
//! - delete_gate: request/confirm deletion
//! - app: the controller tying them together
//!
//! Timers, storage and the clock are supplied by the host through the
//! [`Timers`], [`KeyValueStorage`] and [`Clock`] traits.

mod app;
mod catalog;
mod clock;
mod config;
mod delete_gate;
mod error;
mod item_store;
mod models;
mod notify;
mod search;
mod session;
mod storage;
mod timer;
pub mod validate;

pub use app::App;
pub use catalog::default_catalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use delete_gate::DeleteGate;
pub use error::{StorageError, StorageResult, ValidationError};
pub use item_store::ItemStore;
pub use models::{Item, ItemFields, ItemId, Page, Toast, ToastId, ToastKind, User};
pub use notify::NotificationQueue;
pub use search::filter;
pub use session::Session;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use timer::{TimerKey, Timers, VirtualTimers};
