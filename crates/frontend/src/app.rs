use crate::controller::Controller;
use crate::layout::toasts::{ToastHost, ToastService};
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::shared::config::ConsoleConfig;
use crate::shared::prompt::BrowserPrompt;
use crate::shared::transport::GlooTransport;
use crate::shared::view_bindings::{PageVariant, ViewBindings};
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // Toasts outlive page switches, so they sit above the router.
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}

/// One console page. Builds the page's controller, provides it to the
/// views below and starts the initial load.
#[component]
pub fn ConsolePage(variant: PageVariant) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    let config = ConsoleConfig::from_location(variant);
    log::info!(
        "starting {} console (banking: {}, orders: {})",
        variant.title(),
        config.banking_base,
        config.orders_base
    );
    let controller = Controller::new(
        config,
        ViewBindings::for_variant(variant),
        Arc::new(GlooTransport),
        Arc::new(BrowserPrompt::new(toasts)),
    );
    provide_context(controller.clone());

    spawn_local(async move { controller.start().await });

    view! { <Shell /> }
}
