use super::registry::render_tab_content;
use crate::controller::use_controller;
use crate::shared::view_bindings::Tab;
use leptos::prelude::*;

/// Wrapper for one tab's content. Hidden through the `tabs__item--hidden`
/// class while another tab is active or during a switch.
#[component]
pub fn TabPage(tab: Tab) -> impl IntoView {
    let active_tab = use_controller().state.active_tab;
    let is_active = move || active_tab.get() == Some(tab);

    log::debug!("tab page created: {}", tab.name());
    on_cleanup(move || log::debug!("tab page destroyed: {}", tab.name()));

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.name()
        >
            {render_tab_content(tab)}
        </div>
    }
}
