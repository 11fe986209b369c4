//! Dashboard Page
//!
//! Search box and the filtered item grid.

use inventory_core::Page;
use leptos::prelude::*;

use crate::components::{ItemCard, NavBar};
use crate::context::AppContext;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let items = Memo::new(move |_| ctx.filtered_items());
    let total = Memo::new(move |_| ctx.item_count());

    view! {
        <div class="page">
            <NavBar />
            <main class="page-content">
                <div class="dashboard-header">
                    <div>
                        <h1>"My Items"</h1>
                        <p class="muted">{move || format!("{} items in inventory", total.get())}</p>
                    </div>
                    <button class="btn btn-primary" on:click=move |_| ctx.navigate(Page::Add)>
                        "+ Add Item"
                    </button>
                </div>

                <input
                    class="search-input"
                    type="search"
                    placeholder="Search items by title, description, or category..."
                    prop:value=move || ctx.search_query()
                    on:input=move |ev| ctx.set_search_query(event_target_value(&ev))
                />

                <Show
                    when=move || !items.get().is_empty()
                    fallback=|| view! {
                        <div class="empty-state">
                            <p>"No items found"</p>
                            <p class="muted">"Try a different search or add a new item."</p>
                        </div>
                    }
                >
                    <div class="item-grid">
                        <For
                            each=move || items.get()
                            key=|item| item.id
                            children=move |item| view! { <ItemCard item=item /> }
                        />
                    </div>
                </Show>
            </main>
        </div>
    }
}
