//! Login Page
//!
//! Checks the fields inline before handing them to the controller.

use inventory_core::validate::validate_login;
use inventory_core::Page;
use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();

        if let Err(e) = validate_login(&email, &password, ctx.min_login_password_len()) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        ctx.login(&email, &password);
    };

    view! {
        <div class="page centered">
            <div class="auth-panel">
                <div class="hero-logo">"📦"</div>
                <h1>"Welcome Back"</h1>
                <p class="muted">"Sign in to your account"</p>

                <form class="card form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        class=move || if error.get().is_some() { "input-error" } else { "" }
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="Enter your password"
                        class=move || if error.get().is_some() { "input-error" } else { "" }
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                    <button type="submit" class="btn btn-primary wide">"Sign In"</button>
                </form>

                <p class="muted">
                    "Don't have an account? "
                    <button class="link-btn" on:click=move |_| ctx.navigate(Page::Signup)>"Sign up"</button>
                </p>
            </div>
        </div>
    }
}
