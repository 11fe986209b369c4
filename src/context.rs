//! Application Context
//!
//! The controller signal provided via Leptos Context API, with the read
//! helpers and event handlers the pages use.

use inventory_core::{Item, ItemFields, ItemId, Page, Toast, ToastId};
use leptos::prelude::*;

use crate::platform::BrowserApp;

/// App-wide controller handle
#[derive(Clone, Copy)]
pub struct AppContext {
    app: RwSignal<BrowserApp, LocalStorage>,
}

impl AppContext {
    pub fn new(app: RwSignal<BrowserApp, LocalStorage>) -> Self {
        Self { app }
    }

    // ========================
    // Reads (tracked)
    // ========================

    pub fn page(&self) -> Page {
        self.app.with(|a| a.page())
    }

    pub fn user_name(&self) -> String {
        self.app
            .with(|a| a.user().map(|u| u.name.clone()))
            .unwrap_or_default()
    }

    pub fn filtered_items(&self) -> Vec<Item> {
        self.app.with(|a| a.filtered_items())
    }

    pub fn item_count(&self) -> usize {
        self.app.with(|a| a.items().len())
    }

    pub fn search_query(&self) -> String {
        self.app.with(|a| a.search_query().to_string())
    }

    pub fn selected_item(&self) -> Option<Item> {
        self.app.with(|a| a.selected_item().cloned())
    }

    /// Snapshot for pre-filling forms, without subscribing
    pub fn selected_item_untracked(&self) -> Option<Item> {
        self.app.with_untracked(|a| a.selected_item().cloned())
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.app.with(|a| a.toasts().to_vec())
    }

    pub fn delete_modal_open(&self) -> bool {
        self.app.with(|a| a.is_delete_modal_open())
    }

    pub fn min_login_password_len(&self) -> usize {
        self.app.with_untracked(|a| a.config().min_login_password_len)
    }

    // ========================
    // Handlers
    // ========================

    pub fn navigate(&self, page: Page) {
        self.app.update(|a| a.navigate(page));
    }

    pub fn open_item(&self, page: Page, id: ItemId) {
        self.app.update(|a| a.navigate_to_item(page, id));
    }

    pub fn go_home(&self) {
        self.app.update(|a| a.go_home());
    }

    pub fn login(&self, email: &str, password: &str) -> bool {
        self.app
            .try_update(|a| a.login(email, password))
            .unwrap_or(false)
    }

    pub fn signup(&self, name: &str, email: &str, password: &str) {
        self.app.update(|a| a.signup(name, email, password));
    }

    pub fn logout(&self) {
        self.app.update(|a| a.logout());
    }

    pub fn set_search_query(&self, query: String) {
        self.app.update(|a| a.set_search_query(query));
    }

    pub fn add_item(&self, fields: ItemFields) {
        self.app.update(|a| {
            a.add_item(fields);
        });
    }

    pub fn save_selected_item(&self, fields: ItemFields) {
        self.app.update(|a| {
            a.save_selected_item(fields);
        });
    }

    pub fn request_delete(&self, id: ItemId) {
        self.app.update(|a| a.request_delete(id));
    }

    pub fn confirm_delete(&self) {
        self.app.update(|a| {
            a.confirm_delete();
        });
    }

    pub fn cancel_delete(&self) {
        self.app.update(|a| a.cancel_delete());
    }

    pub fn dismiss_toast(&self, id: ToastId) {
        self.app.update(|a| a.dismiss_toast(id));
    }
}
