//! Item Detail Page

use inventory_core::Page;
use leptos::prelude::*;

use crate::components::{format_price, NavBar};
use crate::context::AppContext;

#[component]
pub fn ItemDetailPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let item = Memo::new(move |_| ctx.selected_item());

    view! {
        <div class="page">
            <NavBar />
            <main class="page-content narrow">
                <button class="link-btn" on:click=move |_| ctx.navigate(Page::Dashboard)>
                    "← Back to Dashboard"
                </button>

                {move || item.get().map(|item| {
                    let id = item.id;
                    view! {
                        <article class="card item-detail">
                            {item.image_url.clone().map(|src| view! {
                                <img class="item-detail-image" src=src alt=item.title.clone() />
                            })}
                            <h1>{item.title.clone()}</h1>
                            <div class="item-card-meta">
                                {item.category.clone().map(|c| view! { <span class="badge">{c}</span> })}
                                {item.price.map(|p| view! { <span class="price">{format_price(p)}</span> })}
                            </div>
                            <p>{item.description.clone()}</p>
                            <p class="muted">{format!("Added on {}", item.created_at)}</p>

                            <div class="form-actions">
                                <button class="btn btn-primary" on:click=move |_| ctx.open_item(Page::Edit, id)>
                                    "Edit"
                                </button>
                                <button class="btn btn-danger" on:click=move |_| ctx.request_delete(id)>
                                    "Delete"
                                </button>
                            </div>
                        </article>
                    }
                })}
            </main>
        </div>
    }
}
