//! Application Controller
//!
//! Owns every piece of client state and implements the page transitions.
//! Views read through the accessors and call the handler methods; nothing
//! else mutates state.

use std::time::Duration;

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::delete_gate::DeleteGate;
use crate::item_store::ItemStore;
use crate::models::{Item, ItemFields, ItemId, Page, Toast, ToastId, ToastKind, User};
use crate::notify::NotificationQueue;
use crate::search;
use crate::session::Session;
use crate::storage::KeyValueStorage;
use crate::timer::{TimerKey, Timers, VirtualTimers};

pub struct App<T, S, C> {
    config: AppConfig,
    timers: T,
    clock: C,
    store: ItemStore<S>,
    session: Session,
    toasts: NotificationQueue,
    delete_gate: DeleteGate,
    search_query: String,
}

impl<T: Timers, S: KeyValueStorage, C: Clock> App<T, S, C> {
    /// Start on the landing page with items read from `storage`
    pub fn load(config: AppConfig, timers: T, storage: S, clock: C) -> Self {
        let store = ItemStore::load(storage, config.storage_key.clone());
        Self {
            config,
            timers,
            clock,
            store,
            session: Session::new(),
            toasts: NotificationQueue::new(),
            delete_gate: DeleteGate::default(),
            search_query: String::new(),
        }
    }

    // ========================
    // State Access
    // ========================

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn page(&self) -> Page {
        self.session.page()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.store.get(id)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Store items matching the current search query
    pub fn filtered_items(&self) -> Vec<Item> {
        search::filter(self.store.items(), &self.search_query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// The selected item, if it still exists
    pub fn selected_item(&self) -> Option<&Item> {
        self.session.selected_item().and_then(|id| self.store.get(id))
    }

    pub fn toasts(&self) -> &[Toast] {
        self.toasts.toasts()
    }

    pub fn delete_gate(&self) -> &DeleteGate {
        &self.delete_gate
    }

    pub fn is_delete_modal_open(&self) -> bool {
        self.delete_gate.is_open()
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    pub fn storage(&self) -> &S {
        self.store.storage()
    }

    // ========================
    // Navigation
    // ========================

    /// Where a request for `page` actually lands: auth-gated pages fall back
    /// to landing without a user, item pages fall back to the dashboard when
    /// the selected item is gone.
    fn resolve(&self, page: Page) -> Page {
        let authenticated = self.session.is_authenticated();
        if page.requires_user() && !authenticated {
            return Page::Landing;
        }
        if page == Page::Landing && authenticated {
            return Page::Dashboard;
        }
        if page.requires_item() && self.selected_item().is_none() {
            return Page::Dashboard;
        }
        page
    }

    pub fn navigate(&mut self, page: Page) {
        let target = self.resolve(page);
        if target != page {
            log::warn!("[APP] Cannot show {}, falling back to {}", page, target);
        }
        log::debug!("[APP] {} -> {}", self.session.page(), target);
        self.session.set_page(target);
    }

    /// Select `id` and open `page` for it (edit or detail)
    pub fn navigate_to_item(&mut self, page: Page, id: ItemId) {
        self.session.select(id);
        self.navigate(page);
    }

    /// "Go home" from the not-found page
    pub fn go_home(&mut self) {
        let home = if self.session.is_authenticated() {
            Page::Dashboard
        } else {
            Page::Landing
        };
        self.navigate(home);
    }

    // ========================
    // Session
    // ========================

    fn begin_session(&mut self, user: User) {
        if let Some(previous) = self.session.end() {
            self.timers.disarm(TimerKey::SessionExpiry(previous));
        }
        log::info!("[SESSION] {} signed in", user.email);
        let generation = self.session.begin(user);
        self.timers
            .arm(TimerKey::SessionExpiry(generation), self.config.session_lifetime);
    }

    /// Returns false (and raises an error toast) when the credentials fail
    /// the placeholder check.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        if password.chars().count() < self.config.min_login_password_len {
            log::info!("[SESSION] Rejected login for {}", email);
            self.notify("Invalid credentials", ToastKind::Error);
            return false;
        }

        let name = email.split('@').next().unwrap_or_default().to_string();
        self.begin_session(User {
            id: 1,
            name,
            email: email.to_string(),
        });
        self.navigate(Page::Dashboard);
        self.notify("Login successful", ToastKind::Success);
        true
    }

    /// Create the session for a validated signup form
    pub fn signup(&mut self, name: &str, email: &str, _password: &str) {
        self.begin_session(User {
            id: 1,
            name: name.to_string(),
            email: email.to_string(),
        });
        self.navigate(Page::Dashboard);
        self.notify("Account created successfully", ToastKind::Success);
    }

    pub fn logout(&mut self) {
        if let Some(generation) = self.session.end() {
            self.timers.disarm(TimerKey::SessionExpiry(generation));
            log::info!("[SESSION] Signed out");
        }
        self.navigate(Page::Landing);
        self.notify("Logged out successfully", ToastKind::Info);
    }

    fn expire_session(&mut self, generation: u64) {
        if !self.session.is_live(generation) {
            log::debug!("[SESSION] Ignoring stale expiry for generation {}", generation);
            return;
        }
        self.session.end();
        self.delete_gate.cancel();
        self.session.set_page(Page::SessionExpired);
        log::info!("[SESSION] Session {} expired", generation);
    }

    // ========================
    // Items
    // ========================

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Append a new item dated today and return to the dashboard.
    /// `None` when the store has no id left to give out.
    pub fn add_item(&mut self, fields: ItemFields) -> Option<ItemId> {
        let Some(id) = self.store.add(fields, self.clock.today_string()) else {
            self.notify("Could not add item", ToastKind::Error);
            return None;
        };
        log::info!("[ITEMS] Added item {}", id);
        self.navigate(Page::Dashboard);
        self.notify("Item added successfully", ToastKind::Success);
        Some(id)
    }

    /// Replace the editable fields of `id` and return to the dashboard
    pub fn update_item(&mut self, id: ItemId, fields: ItemFields) -> bool {
        let updated = self.store.update(id, fields);
        if updated {
            log::info!("[ITEMS] Updated item {}", id);
        } else {
            log::warn!("[ITEMS] Update for missing item {} ignored", id);
        }
        self.navigate(Page::Dashboard);
        if updated {
            self.notify("Item updated successfully", ToastKind::Success);
        }
        updated
    }

    /// Save the edit form for whichever item is selected
    pub fn save_selected_item(&mut self, fields: ItemFields) -> bool {
        match self.session.selected_item() {
            Some(id) => self.update_item(id, fields),
            None => {
                self.navigate(Page::Dashboard);
                false
            }
        }
    }

    // ========================
    // Delete Gate
    // ========================

    pub fn request_delete(&mut self, id: ItemId) {
        self.delete_gate.request(id);
    }

    /// Delete the pending item. No-op (returns false) without a request.
    pub fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.delete_gate.take_confirmed() else {
            return false;
        };
        if self.store.remove(id).is_some() {
            log::info!("[ITEMS] Deleted item {}", id);
        }
        if self.session.selected_item() == Some(id) {
            self.session.clear_selection();
        }
        if self.session.page() == Page::Detail {
            self.navigate(Page::Dashboard);
        }
        self.notify("Item deleted successfully", ToastKind::Success);
        true
    }

    pub fn cancel_delete(&mut self) {
        self.delete_gate.cancel();
    }

    // ========================
    // Toasts
    // ========================

    /// Show a toast and arm its own removal timer
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = self.toasts.push(message, kind, self.clock.now_ms());
        self.timers
            .arm(TimerKey::Toast(id), self.config.toast_lifetime);
        id
    }

    pub fn dismiss_toast(&mut self, id: ToastId) {
        self.toasts.dismiss(id);
        self.timers.disarm(TimerKey::Toast(id));
    }

    // ========================
    // Timers
    // ========================

    /// Entry point for the host when an armed timer elapses
    pub fn on_timer(&mut self, key: TimerKey) {
        match key {
            TimerKey::Toast(id) => {
                self.toasts.dismiss(id);
                self.timers.disarm(key);
            }
            TimerKey::SessionExpiry(generation) => {
                self.timers.disarm(key);
                self.expire_session(generation);
            }
        }
    }

    /// Cancel every outstanding timer. Call on teardown.
    pub fn shutdown(&mut self) {
        log::debug!("[APP] Shutting down, cancelling timers");
        self.timers.disarm_all();
    }
}

impl<S: KeyValueStorage, C: Clock> App<VirtualTimers, S, C> {
    /// Move virtual time forward, firing due timers in deadline order
    pub fn advance(&mut self, by: Duration) {
        let until = self.timers.now() + by;
        while let Some(key) = self.timers.pop_due(until) {
            self.on_timer(key);
        }
        self.timers.settle(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;

    type TestApp = App<VirtualTimers, MemoryStorage, FixedClock>;

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
    }

    fn app() -> TestApp {
        App::load(AppConfig::default(), VirtualTimers::new(), MemoryStorage::new(), clock())
    }

    fn logged_in() -> TestApp {
        let mut app = app();
        assert!(app.login("ana@example.com", "secret1"));
        app
    }

    fn messages(app: &TestApp) -> Vec<String> {
        app.toasts().iter().map(|t| t.message.clone()).collect()
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.page(), Page::Landing);
        assert!(app.user().is_none());
        assert_eq!(app.items().len(), 4);
        assert!(app.toasts().is_empty());
        assert!(!app.is_delete_modal_open());
    }

    #[test]
    fn test_landing_to_login_and_signup() {
        let mut app = app();
        app.navigate(Page::Login);
        assert_eq!(app.page(), Page::Login);
        app.navigate(Page::Signup);
        assert_eq!(app.page(), Page::Signup);
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn test_login_success() {
        let app = logged_in();
        assert_eq!(app.page(), Page::Dashboard);
        let user = app.user().unwrap();
        assert_eq!(user.name, "ana");
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(messages(&app), vec!["Login successful"]);
        assert_eq!(app.toasts()[0].kind, ToastKind::Success);
    }

    #[test]
    fn test_login_short_password_stays_on_login() {
        let mut app = app();
        app.navigate(Page::Login);
        assert!(!app.login("ana@example.com", "12345"));

        assert_eq!(app.page(), Page::Login);
        assert!(app.user().is_none());
        assert_eq!(messages(&app), vec!["Invalid credentials"]);
        assert_eq!(app.toasts()[0].kind, ToastKind::Error);
        assert!(!app.timers().is_armed(TimerKey::SessionExpiry(1)));
    }

    #[test]
    fn test_signup_creates_user() {
        let mut app = app();
        app.navigate(Page::Signup);
        app.signup("Ana Lima", "ana@example.com", "Secret123");

        assert_eq!(app.page(), Page::Dashboard);
        assert_eq!(app.user().unwrap().name, "Ana Lima");
        assert_eq!(messages(&app), vec!["Account created successfully"]);
    }

    #[test]
    fn test_logout_clears_user_only() {
        let mut app = logged_in();
        app.set_search_query("desk");
        app.navigate_to_item(Page::Detail, 2);
        app.logout();

        assert_eq!(app.page(), Page::Landing);
        assert!(app.user().is_none());
        assert_eq!(app.search_query(), "desk");
        assert_eq!(app.selected_item().map(|i| i.id), Some(2));
        assert_eq!(messages(&app).last().unwrap(), "Logged out successfully");
    }

    #[test]
    fn test_session_expires_after_thirty_minutes() {
        let mut app = logged_in();
        app.advance(Duration::from_secs(30 * 60) - Duration::from_millis(1));
        assert!(app.user().is_some());
        assert_eq!(app.page(), Page::Dashboard);

        app.advance(Duration::from_millis(1));
        assert!(app.user().is_none());
        assert_eq!(app.page(), Page::SessionExpired);

        app.navigate(Page::Login);
        assert_eq!(app.page(), Page::Login);
    }

    #[test]
    fn test_session_window_does_not_slide_on_activity() {
        let mut app = logged_in();
        app.advance(Duration::from_secs(20 * 60));
        app.add_item(ItemFields::new("Lamp", "LED"));
        app.navigate(Page::Add);
        app.advance(Duration::from_secs(10 * 60));
        assert_eq!(app.page(), Page::SessionExpired);
    }

    #[test]
    fn test_relogin_cancels_previous_expiry() {
        let mut app = logged_in();
        app.advance(Duration::from_secs(20 * 60));
        app.logout();
        assert!(app.login("ana@example.com", "secret1"));

        // The first session's deadline passes without effect
        app.advance(Duration::from_secs(15 * 60));
        assert_eq!(app.page(), Page::Dashboard);
        assert!(app.user().is_some());

        app.advance(Duration::from_secs(15 * 60));
        assert_eq!(app.page(), Page::SessionExpired);
        assert_eq!(app.timers().armed_count(), 0);
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut app = logged_in();
        app.logout();
        assert!(app.login("bo@example.com", "secret1"));
        app.on_timer(TimerKey::SessionExpiry(1));
        assert_eq!(app.user().unwrap().email, "bo@example.com");
    }

    #[test]
    fn test_toast_expires_after_five_seconds() {
        let mut app = app();
        let id = app.notify("Hello", ToastKind::Info);

        app.advance(Duration::from_millis(4_999));
        assert!(app.toasts().iter().any(|t| t.id == id));

        app.advance(Duration::from_millis(2));
        assert!(app.toasts().iter().all(|t| t.id != id));
    }

    #[test]
    fn test_toasts_expire_independently() {
        let mut app = app();
        let first = app.notify("first", ToastKind::Info);
        app.advance(Duration::from_millis(3_000));
        let second = app.notify("second", ToastKind::Info);

        app.advance(Duration::from_millis(2_000));
        let ids: Vec<_> = app.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second]);
        assert_ne!(first, second);

        app.advance(Duration::from_millis(3_000));
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn test_dismiss_cancels_only_that_timer() {
        let mut app = app();
        let a = app.notify("a", ToastKind::Info);
        let b = app.notify("b", ToastKind::Info);

        app.dismiss_toast(a);
        assert!(!app.timers().is_armed(TimerKey::Toast(a)));
        assert!(app.timers().is_armed(TimerKey::Toast(b)));
        assert_eq!(messages(&app), vec!["b"]);
    }

    #[test]
    fn test_add_item_assigns_id_and_date() {
        let mut app = logged_in();
        app.navigate(Page::Add);
        let id = app.add_item(ItemFields::new("Monitor", "27 inch")).unwrap();

        assert_eq!(id, 5);
        let item = app.item(id).unwrap();
        assert_eq!(item.created_at, "2025-01-15");
        assert_eq!(app.page(), Page::Dashboard);
        assert_eq!(messages(&app).last().unwrap(), "Item added successfully");

        let persisted: Vec<Item> =
            serde_json::from_str(app.storage().raw("items").unwrap()).unwrap();
        assert_eq!(persisted.len(), 5);
    }

    #[test]
    fn test_edit_flow_updates_selected_item() {
        let mut app = logged_in();
        app.navigate_to_item(Page::Edit, 3);
        assert_eq!(app.page(), Page::Edit);

        let mut fields = app.selected_item().unwrap().fields();
        fields.title = "X".to_string();
        assert!(app.save_selected_item(fields));

        let item = app.item(3).unwrap();
        assert_eq!(item.title, "X");
        assert_eq!(item.created_at, "2024-11-13");
        assert_eq!(app.page(), Page::Dashboard);
        assert_eq!(messages(&app).last().unwrap(), "Item updated successfully");
    }

    #[test]
    fn test_update_missing_item_is_silent() {
        let mut app = logged_in();
        let before = app.items().to_vec();
        let toasts = app.toasts().len();

        assert!(!app.update_item(42, ItemFields::new("x", "y")));
        assert_eq!(app.items(), before.as_slice());
        assert_eq!(app.toasts().len(), toasts);
    }

    #[test]
    fn test_item_pages_need_a_resolvable_item() {
        let mut app = logged_in();
        app.navigate_to_item(Page::Detail, 99);
        assert_eq!(app.page(), Page::Dashboard);

        app.navigate_to_item(Page::Detail, 1);
        assert_eq!(app.page(), Page::Detail);
        assert_eq!(app.selected_item().unwrap().id, 1);
    }

    #[test]
    fn test_authenticated_pages_need_a_user() {
        let mut app = app();
        app.navigate(Page::Dashboard);
        assert_eq!(app.page(), Page::Landing);
    }

    #[test]
    fn test_not_found_go_home() {
        let mut app = app();
        app.navigate(Page::NotFound);
        assert_eq!(app.page(), Page::NotFound);
        app.go_home();
        assert_eq!(app.page(), Page::Landing);

        let mut app = logged_in();
        app.navigate(Page::NotFound);
        app.go_home();
        assert_eq!(app.page(), Page::Dashboard);
    }

    #[test]
    fn test_filtered_items_follow_query() {
        let mut app = logged_in();
        app.set_search_query("FURNITURE");
        let ids: Vec<_> = app.filtered_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 4]);

        app.set_search_query("");
        assert_eq!(app.filtered_items(), app.items().to_vec());
    }

    #[test]
    fn test_confirm_without_request_is_noop() {
        let mut app = logged_in();
        let before = app.items().to_vec();
        let toasts = app.toasts().len();

        assert!(!app.confirm_delete());
        assert_eq!(app.items(), before.as_slice());
        assert_eq!(app.toasts().len(), toasts);
    }

    #[test]
    fn test_delete_from_dashboard() {
        let mut app = logged_in();
        app.request_delete(2);
        assert!(app.is_delete_modal_open());
        assert!(app.item(2).is_some());

        assert!(app.confirm_delete());
        assert!(app.item(2).is_none());
        assert!(!app.is_delete_modal_open());
        assert_eq!(app.delete_gate().pending(), None);
        assert_eq!(app.page(), Page::Dashboard);
        assert_eq!(messages(&app).last().unwrap(), "Item deleted successfully");
    }

    #[test]
    fn test_delete_from_detail_returns_to_dashboard() {
        let mut app = logged_in();
        app.navigate_to_item(Page::Detail, 1);
        app.request_delete(1);
        assert!(app.confirm_delete());

        assert_eq!(app.page(), Page::Dashboard);
        assert!(app.selected_item().is_none());
    }

    #[test]
    fn test_cancel_delete_keeps_item() {
        let mut app = logged_in();
        app.request_delete(3);
        app.cancel_delete();

        assert!(!app.is_delete_modal_open());
        assert!(app.item(3).is_some());
        assert!(!app.confirm_delete());
    }

    #[test]
    fn test_session_expiry_closes_delete_modal() {
        let mut app = logged_in();
        app.request_delete(2);
        assert!(app.is_delete_modal_open());

        app.advance(Duration::from_secs(30 * 60));
        assert_eq!(app.page(), Page::SessionExpired);
        assert!(!app.is_delete_modal_open());
        assert!(!app.confirm_delete());
        assert!(app.item(2).is_some());
    }

    #[test]
    fn test_add_item_with_ids_exhausted_stays_on_form() {
        let last = Item {
            id: ItemId::MAX,
            title: "Last".to_string(),
            description: "Highest id".to_string(),
            category: None,
            price: None,
            image_url: None,
            created_at: "2024-11-10".to_string(),
        };
        let json = serde_json::to_string(&[last]).unwrap();
        let storage = MemoryStorage::with_slot("items", &json);
        let mut app = App::load(AppConfig::default(), VirtualTimers::new(), storage, clock());
        assert!(app.login("ana@example.com", "secret1"));
        app.navigate(Page::Add);

        assert_eq!(app.add_item(ItemFields::new("Monitor", "27 inch")), None);
        assert_eq!(app.page(), Page::Add);
        assert_eq!(app.items().len(), 1);
        assert_eq!(messages(&app).last().unwrap(), "Could not add item");
        assert_eq!(app.toasts().last().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_toasts_are_stamped_with_clock_time() {
        let mut app = app();
        app.clock.set_ms(1_736_899_200_000);
        app.notify("first", ToastKind::Info);
        app.clock.set_ms(1_736_899_200_250);
        app.notify("second", ToastKind::Info);

        let stamps: Vec<i64> = app.toasts().iter().map(|t| t.created_at_ms).collect();
        assert_eq!(stamps, vec![1_736_899_200_000, 1_736_899_200_250]);
    }

    #[test]
    fn test_data_changes_raise_exactly_one_toast() {
        let mut app = app();
        app.navigate(Page::Signup);
        app.signup("Ana", "ana@example.com", "Secret123");
        assert_eq!(app.toasts().len(), 1);

        app.add_item(ItemFields::new("a", "b"));
        assert_eq!(app.toasts().len(), 2);

        app.navigate_to_item(Page::Edit, 1);
        assert_eq!(app.toasts().len(), 2);
        app.save_selected_item(ItemFields::new("c", "d"));
        assert_eq!(app.toasts().len(), 3);

        app.request_delete(1);
        assert_eq!(app.toasts().len(), 3);
        app.confirm_delete();
        assert_eq!(app.toasts().len(), 4);

        app.logout();
        assert_eq!(app.toasts().len(), 5);
    }

    #[test]
    fn test_shutdown_cancels_all_timers() {
        let mut app = logged_in();
        app.notify("pending", ToastKind::Info);
        assert!(app.timers().armed_count() >= 2);

        app.shutdown();
        assert_eq!(app.timers().armed_count(), 0);

        app.advance(Duration::from_secs(60 * 60));
        assert!(app.user().is_some());
        assert_eq!(app.toasts().len(), 2);
    }
}
