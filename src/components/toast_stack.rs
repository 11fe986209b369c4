//! Toast Stack Component
//!
//! Renders queued toasts bottom-right. Expiry is handled by the controller;
//! the close button dismisses early.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast-{}", toast.kind.as_str())>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button class="toast-close" on:click=move |_| ctx.dismiss_toast(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
