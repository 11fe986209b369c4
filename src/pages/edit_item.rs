//! Edit Item Page
//!
//! Pre-fills the editor from the selected item. The controller never lands
//! here without one.

use inventory_core::validate::ItemForm;
use inventory_core::ItemFields;
use leptos::prelude::*;

use crate::components::ItemEditor;
use crate::context::AppContext;

#[component]
pub fn EditItemPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let initial = ctx
        .selected_item_untracked()
        .map(|item| ItemForm::from_item(&item))
        .unwrap_or_default();

    view! {
        <ItemEditor
            heading="Edit Item"
            submit_label="Save Changes"
            initial=initial
            on_save=move |fields: ItemFields| ctx.save_selected_item(fields)
        />
    }
}
