//! Signup Page
//!
//! Runs every signup rule and lists all failures at once. The controller
//! only sees forms that passed.

use inventory_core::validate::SignupForm;
use inventory_core::Page;
use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<String>::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };

        match form.validate() {
            Ok(()) => {
                set_errors.set(Vec::new());
                ctx.signup(&form.name, &form.email, &form.password);
            }
            Err(errs) => set_errors.set(errs.iter().map(|e| e.to_string()).collect()),
        }
    };

    view! {
        <div class="page centered">
            <div class="auth-panel">
                <div class="hero-logo">"📦"</div>
                <h1>"Create Account"</h1>
                <p class="muted">"Sign up to get started"</p>

                <form class="card form" on:submit=on_submit>
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        placeholder="John Doe"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="Create a password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <label for="confirm-password">"Confirm Password"</label>
                    <input
                        id="confirm-password"
                        type="password"
                        placeholder="Repeat your password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                    />

                    <Show when=move || !errors.get().is_empty()>
                        <ul class="form-errors">
                            {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                        </ul>
                    </Show>

                    <button type="submit" class="btn btn-primary wide">"Create Account"</button>
                </form>

                <p class="muted">
                    "Already have an account? "
                    <button class="link-btn" on:click=move |_| ctx.navigate(Page::Login)>"Log in"</button>
                </p>
            </div>
        </div>
    }
}
