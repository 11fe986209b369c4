//! Item Editor Component
//!
//! Shared add/edit form. Parses the raw input and hands valid fields to
//! `on_save`; cancel returns to the dashboard.

use inventory_core::validate::ItemForm;
use inventory_core::{ItemFields, Page};
use leptos::prelude::*;

use crate::components::NavBar;
use crate::context::AppContext;

#[component]
pub fn ItemEditor(
    heading: &'static str,
    submit_label: &'static str,
    initial: ItemForm,
    #[prop(into)] on_save: Callback<ItemFields>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(initial.title);
    let (description, set_description) = signal(initial.description);
    let (category, set_category) = signal(initial.category);
    let (price, set_price) = signal(initial.price);
    let (image_url, set_image_url) = signal(initial.image_url);
    let (errors, set_errors) = signal(Vec::<String>::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ItemForm {
            title: title.get(),
            description: description.get(),
            category: category.get(),
            price: price.get(),
            image_url: image_url.get(),
        };
        match form.parse() {
            Ok(fields) => {
                set_errors.set(Vec::new());
                on_save.run(fields);
            }
            Err(errs) => set_errors.set(errs.iter().map(|e| e.to_string()).collect()),
        }
    };

    view! {
        <div class="page">
            <NavBar />
            <main class="page-content narrow">
                <button class="link-btn" on:click=move |_| ctx.navigate(Page::Dashboard)>
                    "← Back to Dashboard"
                </button>
                <h1>{heading}</h1>

                <form class="card form" on:submit=on_submit>
                    <label for="title">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        placeholder="Item title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />

                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="4"
                        placeholder="Describe the item"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>

                    <label for="category">"Category"</label>
                    <input
                        id="category"
                        type="text"
                        placeholder="e.g. Electronics"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />

                    <label for="price">"Price"</label>
                    <input
                        id="price"
                        type="text"
                        placeholder="0.00"
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                    />

                    <label for="image-url">"Image URL"</label>
                    <input
                        id="image-url"
                        type="url"
                        placeholder="https://..."
                        prop:value=move || image_url.get()
                        on:input=move |ev| set_image_url.set(event_target_value(&ev))
                    />
                    <Show when=move || !image_url.get().is_empty()>
                        <img class="image-preview" src=move || image_url.get() alt="Preview" />
                    </Show>

                    <Show when=move || !errors.get().is_empty()>
                        <ul class="form-errors">
                            {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                        </ul>
                    </Show>

                    <div class="form-actions">
                        <button type="button" class="btn btn-outline" on:click=move |_| ctx.navigate(Page::Dashboard)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">{submit_label}</button>
                    </div>
                </form>
            </main>
        </div>
    }
}
