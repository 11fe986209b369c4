//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod nav_bar;
mod toast_stack;
mod delete_modal;
mod item_card;
mod item_editor;

pub use nav_bar::NavBar;
pub use toast_stack::ToastStack;
pub use delete_modal::DeleteModal;
pub use item_card::{format_price, ItemCard};
pub use item_editor::ItemEditor;
