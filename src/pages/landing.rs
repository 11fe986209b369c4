//! Landing Page

use inventory_core::Page;
use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="page centered">
            <div class="hero">
                <div class="hero-logo">"📦"</div>
                <h1>"Inventory Manager"</h1>
                <p>"Track, organize and search everything you own in one place."</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| ctx.navigate(Page::Login)>
                        "Log In"
                    </button>
                    <button class="btn btn-outline" on:click=move |_| ctx.navigate(Page::Signup)>
                        "Sign Up"
                    </button>
                </div>
            </div>
        </div>
    }
}
