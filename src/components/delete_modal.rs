//! Delete Modal Component
//!
//! Confirmation dialog for the pending delete request. Closing it cancels
//! the request.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn DeleteModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <Show when=move || ctx.delete_modal_open()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <button class="modal-close" on:click=move |_| ctx.cancel_delete()>"×"</button>
                    </div>
                    <div class="modal-icon">"⚠"</div>
                    <h2>"Delete Item"</h2>
                    <p>"Are you sure you want to delete this item? This action cannot be undone."</p>
                    <div class="modal-actions">
                        <button class="btn btn-outline" on:click=move |_| ctx.cancel_delete()>
                            "Cancel"
                        </button>
                        <button class="btn btn-danger" on:click=move |_| ctx.confirm_delete()>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
