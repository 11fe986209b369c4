//! Not Found Page

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="page centered">
            <div class="hero">
                <div class="hero-code">"404"</div>
                <h1>"Page Not Found"</h1>
                <p class="muted">"The page you are looking for doesn't exist or has been moved."</p>
                <button class="btn btn-primary" on:click=move |_| ctx.go_home()>"Go Home"</button>
            </div>
        </div>
    }
}
