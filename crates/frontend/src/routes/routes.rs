use crate::app::ConsolePage;
use crate::shared::view_bindings::PageVariant;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/") view=|| view! { <ConsolePage variant=PageVariant::Full /> } />
                <Route path=path!("/banking") view=|| view! { <ConsolePage variant=PageVariant::Banking /> } />
                <Route path=path!("/orders") view=|| view! { <ConsolePage variant=PageVariant::Orders /> } />
            </Routes>
        </Router>
    }
}
