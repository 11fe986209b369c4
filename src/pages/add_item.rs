//! Add Item Page

use inventory_core::validate::ItemForm;
use inventory_core::ItemFields;
use leptos::prelude::*;

use crate::components::ItemEditor;
use crate::context::AppContext;

#[component]
pub fn AddItemPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <ItemEditor
            heading="Add New Item"
            submit_label="Add Item"
            initial=ItemForm::default()
            on_save=move |fields: ItemFields| ctx.add_item(fields)
        />
    }
}
