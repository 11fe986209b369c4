//! Session Expired Page

use inventory_core::Page;
use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn SessionExpiredPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="page centered">
            <div class="hero">
                <div class="hero-logo">"⏱"</div>
                <h1>"Session Expired"</h1>
                <p class="muted">"Your session has expired for security reasons. Please log in again."</p>
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Page::Login)>
                    "Log In Again"
                </button>
            </div>
        </div>
    }
}
