//! Item Card Component
//!
//! One inventory item in the dashboard grid.

use inventory_core::{Item, Page};
use leptos::prelude::*;

use crate::context::AppContext;

/// Two-decimal dollar label, e.g. `$299.99`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let image = item.image_url.clone();
    let title = item.title.clone();

    view! {
        <div class="item-card">
            {image.map(|src| view! {
                <img class="item-card-image" src=src alt=title.clone() />
            })}
            <div class="item-card-body">
                <h3 class="item-card-title">{item.title.clone()}</h3>
                <p class="item-card-description">{item.description.clone()}</p>
                <div class="item-card-meta">
                    {item.category.clone().map(|c| view! { <span class="badge">{c}</span> })}
                    {item.price.map(|p| view! { <span class="price">{format_price(p)}</span> })}
                </div>
                <div class="item-card-actions">
                    <button class="btn btn-outline" on:click=move |_| ctx.open_item(Page::Detail, id)>
                        "View"
                    </button>
                    <button class="btn btn-outline" on:click=move |_| ctx.open_item(Page::Edit, id)>
                        "Edit"
                    </button>
                    <button class="btn btn-danger" on:click=move |_| ctx.request_delete(id)>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
