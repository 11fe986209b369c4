//! Item Search
//!
//! Case-insensitive substring filter over title, description and category.

use crate::models::Item;

fn matches(item: &Item, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(needle))
}

/// Items matching `query`, in store order. An empty query keeps everything.
pub fn filter<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items.iter().filter(|item| matches(item, &needle)).collect()
}
