//! Default Catalog
//!
//! Seeded into storage the first time the app runs.

use crate::models::{Item, ItemId};

fn sample(
    id: ItemId,
    title: &str,
    description: &str,
    category: &str,
    price: f64,
    image_url: &str,
    created_at: &str,
) -> Item {
    Item {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: Some(category.to_string()),
        price: Some(price),
        image_url: Some(image_url.to_string()),
        created_at: created_at.to_string(),
    }
}

pub fn default_catalog() -> Vec<Item> {
    vec![
        sample(
            1,
            "MacBook Pro 16\"",
            "High-performance laptop with M2 Pro chip, 16GB RAM, and 512GB SSD. Perfect for development and creative work.",
            "Electronics",
            2499.99,
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400",
            "2024-11-10",
        ),
        sample(
            2,
            "Office Desk Chair",
            "Ergonomic office chair with lumbar support and adjustable height. Breathable mesh back and comfortable cushioning.",
            "Furniture",
            299.99,
            "https://images.unsplash.com/photo-1580480055273-228ff5388ef8?w=400",
            "2024-11-12",
        ),
        sample(
            3,
            "Wireless Keyboard",
            "Mechanical keyboard with RGB backlighting, wireless connectivity, and long battery life.",
            "Accessories",
            129.99,
            "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400",
            "2024-11-13",
        ),
        sample(
            4,
            "Standing Desk",
            "Electric height-adjustable standing desk with memory presets and spacious work surface.",
            "Furniture",
            599.99,
            "https://images.unsplash.com/photo-1595515106969-1ce29566ff1c?w=400",
            "2024-11-14",
        ),
    ]
}
