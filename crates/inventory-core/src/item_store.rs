//! Item Store
//!
//! Ordered item collection mirrored write-through into one storage slot.
//! Every mutation rewrites the whole slot; a failed write is logged and the
//! in-memory collection stays authoritative.

use std::collections::HashSet;

use crate::catalog::default_catalog;
use crate::error::{StorageError, StorageResult};
use crate::models::{Item, ItemFields, ItemId};
use crate::storage::KeyValueStorage;

pub struct ItemStore<S> {
    storage: S,
    key: String,
    items: Vec<Item>,
    /// Highest id handed out or loaded so far, never decreases
    high_water: ItemId,
}

impl<S: KeyValueStorage> ItemStore<S> {
    /// Read the persisted collection, seeding the default catalog when the
    /// slot is empty, unreadable or corrupt.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut store = Self {
            storage,
            key,
            items: Vec::new(),
            high_water: 0,
        };

        match store.read_persisted() {
            Ok(Some(items)) => {
                log::info!("[STORE] Loaded {} items from `{}`", items.len(), store.key);
                let repaired = store.adopt(items);
                if repaired > 0 {
                    log::warn!("[STORE] Repaired {} duplicate item ids", repaired);
                    store.persist_or_log();
                }
            }
            Ok(None) => {
                log::info!("[STORE] No saved items under `{}`, seeding defaults", store.key);
                store.adopt(default_catalog());
                store.persist_or_log();
            }
            Err(e) => {
                log::warn!("[STORE] {}; seeding defaults", e);
                store.adopt(default_catalog());
                store.persist_or_log();
            }
        }

        store
    }

    fn read_persisted(&self) -> StorageResult<Option<Vec<Item>>> {
        let raw = match self.storage.get(&self.key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: self.key.clone(),
                source,
            })
    }

    /// Take ownership of a loaded collection, giving fresh ids to any
    /// duplicates. Returns how many items were reassigned or dropped.
    /// A duplicate is dropped when the id space above the maximum is used up.
    fn adopt(&mut self, items: Vec<Item>) -> usize {
        let mut seen = HashSet::new();
        let mut max_id = items.iter().map(|i| i.id).max().unwrap_or(0);
        let mut repaired = 0;

        self.items = items
            .into_iter()
            .filter_map(|mut item| {
                if seen.insert(item.id) {
                    return Some(item);
                }
                repaired += 1;
                let Some(fresh) = max_id.checked_add(1) else {
                    log::error!(
                        "[STORE] No free id for duplicate item {} `{}`, dropping it",
                        item.id,
                        item.title
                    );
                    return None;
                };
                max_id = fresh;
                item.id = fresh;
                seen.insert(fresh);
                Some(item)
            })
            .collect();
        self.high_water = self.high_water.max(max_id);
        repaired
    }

    /// Serialize the full collection into the storage slot
    pub fn persist(&mut self) -> StorageResult<()> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.set(&self.key, &json)
    }

    fn persist_or_log(&mut self) {
        if let Err(e) = self.persist() {
            log::error!("[STORE] Failed to persist {} items: {}", self.items.len(), e);
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Id the next `add` will use: one past the larger of the live maximum
    /// and every id seen before, so deleted ids are not reused.
    /// `None` once `ItemId::MAX` has been handed out.
    pub fn next_id(&self) -> Option<ItemId> {
        let live_max = self.items.iter().map(|i| i.id).max().unwrap_or(0);
        live_max.max(self.high_water).checked_add(1)
    }

    /// Append a new item created on `created_at` and return its id.
    /// Returns `None` and leaves the store untouched when no id is left.
    pub fn add(&mut self, fields: ItemFields, created_at: String) -> Option<ItemId> {
        let Some(id) = self.next_id() else {
            log::error!("[STORE] Item ids exhausted, refusing to add `{}`", fields.title);
            return None;
        };
        let mut item = Item {
            id,
            title: String::new(),
            description: String::new(),
            category: None,
            price: None,
            image_url: None,
            created_at,
        };
        item.apply(fields);
        self.items.push(item);
        self.high_water = id;
        self.persist_or_log();
        Some(id)
    }

    /// Replace the editable fields of `id`. Returns false if there is no such item.
    pub fn update(&mut self, id: ItemId, fields: ItemFields) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.apply(fields);
        self.persist_or_log();
        true
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(idx);
        self.persist_or_log();
        Some(removed)
    }
}
