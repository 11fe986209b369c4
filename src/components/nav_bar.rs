//! Navigation Bar Component
//!
//! Brand, signed-in user name and logout button shown on every
//! authenticated page.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav-bar">
            <div class="nav-brand">
                <span class="nav-logo">"📦"</span>
                <span class="nav-title">"Inventory Manager"</span>
            </div>
            <div class="nav-user">
                <span class="nav-user-name">{move || ctx.user_name()}</span>
                <button class="btn btn-outline" on:click=move |_| ctx.logout()>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
