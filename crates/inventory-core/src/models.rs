//! Core Models
//!
//! Pages, users, inventory items and toast messages.

use serde::{Deserialize, Serialize};

/// Item identifier, unique within the item store
pub type ItemId = u64;

/// Which view is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Landing,
    Login,
    Signup,
    Dashboard,
    Add,
    Edit,
    Detail,
    NotFound,
    SessionExpired,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Login => "login",
            Page::Signup => "signup",
            Page::Dashboard => "dashboard",
            Page::Add => "add",
            Page::Edit => "edit",
            Page::Detail => "detail",
            Page::NotFound => "not-found",
            Page::SessionExpired => "session-expired",
        }
    }

    /// Pages that are only rendered while a user is logged in
    pub fn requires_user(&self) -> bool {
        matches!(self, Page::Dashboard | Page::Add | Page::Edit | Page::Detail)
    }

    /// Pages that render the selected item
    pub fn requires_item(&self) -> bool {
        matches!(self, Page::Edit | Page::Detail)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthesized session user. Never verified against anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// A single inventory record (persisted as camelCase JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Creation date, `YYYY-MM-DD`
    pub created_at: String,
}

impl Item {
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
        }
    }

    /// Overwrite every editable field, leaving `id` and `created_at` alone
    pub fn apply(&mut self, fields: ItemFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.category = fields.category;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}

/// The editable part of an item, as submitted by the add/edit forms
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemFields {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl ItemFields {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

/// Toast identifier, assigned from a per-queue counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

/// Short-lived notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    /// Wall-clock milliseconds when the toast was raised
    pub created_at_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_uses_camel_case_and_omits_absent_fields() {
        let item = Item {
            id: 7,
            title: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
            category: None,
            price: Some(19.5),
            image_url: Some("https://example.com/lamp.png".to_string()),
            created_at: "2024-11-14".to_string(),
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""imageUrl":"https://example.com/lamp.png""#));
        assert!(json.contains(r#""createdAt":"2024-11-14""#));
        assert!(!json.contains("category"));
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut item = Item {
            id: 3,
            title: "Old".to_string(),
            description: "Old description".to_string(),
            category: Some("Misc".to_string()),
            price: None,
            image_url: None,
            created_at: "2024-01-01".to_string(),
        };

        item.apply(ItemFields::new("New", "New description"));

        assert_eq!(item.id, 3);
        assert_eq!(item.created_at, "2024-01-01");
        assert_eq!(item.title, "New");
        assert_eq!(item.category, None);
    }

    #[test]
    fn test_page_guards() {
        assert!(Page::Dashboard.requires_user());
        assert!(!Page::NotFound.requires_user());
        assert!(Page::Detail.requires_item());
        assert!(!Page::Add.requires_item());
        assert_eq!(Page::SessionExpired.to_string(), "session-expired");
    }
}
