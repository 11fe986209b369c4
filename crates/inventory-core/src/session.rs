//! Session and Navigation State
//!
//! Current page, logged-in user and the selected item reference. Each login
//! starts a new generation so a stale expiry timer can be told apart from the
//! live one.

use crate::models::{ItemId, Page, User};

#[derive(Debug, Default)]
pub struct Session {
    page: Page,
    user: Option<User>,
    selected_item: Option<ItemId>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn selected_item(&self) -> Option<ItemId> {
        self.selected_item
    }

    pub(crate) fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    pub(crate) fn select(&mut self, id: ItemId) {
        self.selected_item = Some(id);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_item = None;
    }

    /// Install a user and return the new session generation
    pub(crate) fn begin(&mut self, user: User) -> u64 {
        self.generation += 1;
        self.user = Some(user);
        self.generation
    }

    /// Drop the user, returning the generation that just ended
    pub(crate) fn end(&mut self) -> Option<u64> {
        self.user.take().map(|_| self.generation)
    }

    /// Whether `generation` names the session that is live right now
    pub fn is_live(&self, generation: u64) -> bool {
        self.user.is_some() && self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            name: "ana".to_string(),
            email: "ana@example.com".to_string(),
        }
    }

    #[test]
    fn test_starts_on_landing_without_user() {
        let session = Session::new();
        assert_eq!(session.page(), Page::Landing);
        assert!(!session.is_authenticated());
        assert_eq!(session.selected_item(), None);
    }

    #[test]
    fn test_generations_advance_per_login() {
        let mut session = Session::new();
        let first = session.begin(user());
        assert!(session.is_live(first));

        assert_eq!(session.end(), Some(first));
        assert!(!session.is_live(first));
        assert_eq!(session.end(), None);

        let second = session.begin(user());
        assert!(second > first);
        assert!(!session.is_live(first));
        assert!(session.is_live(second));
    }
}
