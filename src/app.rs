//! Inventory Manager App
//!
//! Root component: owns the controller, wires browser timers back into it
//! and renders whichever page is active.

use inventory_core::{AppConfig, Page, SystemClock};
use leptos::prelude::*;

use crate::components::{DeleteModal, ToastStack};
use crate::context::AppContext;
use crate::pages::{
    AddItemPage, DashboardPage, EditItemPage, ItemDetailPage, LandingPage, LoginPage, NotFoundPage,
    SessionExpiredPage, SignupPage,
};
use crate::platform::{BrowserApp, BrowserStorage, BrowserTimers};

#[component]
pub fn App() -> impl IntoView {
    let app = RwSignal::new_local(BrowserApp::load(
        AppConfig::default(),
        BrowserTimers::default(),
        BrowserStorage,
        SystemClock,
    ));

    // Elapsed timers come back through the signal like any other event
    app.update_untracked(|a| {
        a.timers_mut().bind(move |key| {
            app.try_update(|a| a.on_timer(key));
        });
    });

    on_cleanup(move || {
        app.try_update_untracked(|a| a.shutdown());
    });

    // Provide context to all children
    let ctx = AppContext::new(app);
    provide_context(ctx);

    // Only re-render the page tree when the page itself changes
    let page = Memo::new(move |_| ctx.page());

    view! {
        <div class="app-shell">
            {move || match page.get() {
                Page::Landing => view! { <LandingPage /> }.into_any(),
                Page::Login => view! { <LoginPage /> }.into_any(),
                Page::Signup => view! { <SignupPage /> }.into_any(),
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                Page::Add => view! { <AddItemPage /> }.into_any(),
                Page::Edit => view! { <EditItemPage /> }.into_any(),
                Page::Detail => view! { <ItemDetailPage /> }.into_any(),
                Page::NotFound => view! { <NotFoundPage /> }.into_any(),
                Page::SessionExpired => view! { <SessionExpiredPage /> }.into_any(),
            }}

            <ToastStack />
            <DeleteModal />
        </div>
    }
}
