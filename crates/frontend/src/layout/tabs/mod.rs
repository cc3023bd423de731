//! Tab management
//!
//! - `page` wraps one tab's content and hides it while inactive
//! - `registry` maps a [`Tab`] to its view

pub mod page;
pub mod registry;

pub use page::TabPage;

use crate::controller::use_controller;
use crate::shared::components::ui::CountBadge;
use crate::shared::icons::tab_icon;
use crate::shared::view_bindings::{Bound, Role, Tab};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn TabButton(tab: Tab) -> impl IntoView {
    let controller = use_controller();
    let state = controller.state;
    let is_active = Memo::new(move |_| state.active_tab.get() == Some(tab));
    let count = Signal::derive(move || state.count(tab));

    let on_click = move |_| {
        let controller = controller.clone();
        spawn_local(async move { controller.switch_to(tab).await });
    };

    view! {
        <Bound role=Role::Tab(tab)>
            <button
                class="tab"
                class:active=is_active
                data-tab=tab.name()
                on:click=on_click
            >
                {tab_icon(tab)}
                <span>{tab.title()}</span>
                <CountBadge count=count />
            </button>
        </Bound>
    }
}

/// One button per tab the page binds, in display order.
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs = use_controller().bindings().tabs();
    view! {
        <nav class="tabs">
            {tabs.into_iter().map(|tab| view! { <TabButton tab=tab /> }).collect_view()}
        </nav>
    }
}

/// Every bound tab's page, mounted once; only the active one is visible.
#[component]
pub fn TabPages() -> impl IntoView {
    let tabs = use_controller().bindings().tabs();
    view! {
        <div class="tabs__pages">
            {tabs.into_iter().map(|tab| view! { <TabPage tab=tab /> }).collect_view()}
        </div>
    }
}
