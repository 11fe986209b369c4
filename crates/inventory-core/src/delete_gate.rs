//! Delete Confirmation Gate
//!
//! Two-step delete: `request` opens the modal, `take_confirmed` hands back the
//! pending id exactly once.

use crate::models::ItemId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteGate {
    item_id: Option<ItemId>,
    modal_open: bool,
}

impl DeleteGate {
    pub fn request(&mut self, id: ItemId) {
        self.item_id = Some(id);
        self.modal_open = true;
    }

    /// Resolve a pending request, resetting the gate. `None` when nothing
    /// is pending or the modal is closed.
    pub fn take_confirmed(&mut self) -> Option<ItemId> {
        if !self.modal_open {
            return None;
        }
        let id = self.item_id?;
        self.reset();
        Some(id)
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.item_id = None;
        self.modal_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn pending(&self) -> Option<ItemId> {
        self.item_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_without_request_is_noop() {
        let mut gate = DeleteGate::default();
        assert_eq!(gate.take_confirmed(), None);
        assert_eq!(gate, DeleteGate::default());
    }

    #[test]
    fn test_request_then_confirm_resets() {
        let mut gate = DeleteGate::default();
        gate.request(4);
        assert!(gate.is_open());
        assert_eq!(gate.pending(), Some(4));

        assert_eq!(gate.take_confirmed(), Some(4));
        assert!(!gate.is_open());
        assert_eq!(gate.take_confirmed(), None);
    }

    #[test]
    fn test_cancel_drops_request() {
        let mut gate = DeleteGate::default();
        gate.request(2);
        gate.cancel();
        assert_eq!(gate.pending(), None);
        assert_eq!(gate.take_confirmed(), None);
    }

    #[test]
    fn test_new_request_replaces_pending() {
        let mut gate = DeleteGate::default();
        gate.request(1);
        gate.request(2);
        assert_eq!(gate.take_confirmed(), Some(2));
    }
}
