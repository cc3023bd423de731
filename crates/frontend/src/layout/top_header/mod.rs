//! Top bar: page title and the API endpoints the console talks to.

use crate::controller::use_controller;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let controller = use_controller();
    let title = controller.bindings().variant().title();
    let config = controller.config();
    let endpoints = format!("{} · {}", config.banking_base, config.orders_base);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{title}</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__endpoints">{endpoints}</span>
            </div>
        </div>
    }
}
