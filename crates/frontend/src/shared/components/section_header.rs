use crate::controller::use_controller;
use crate::shared::components::ui::Button;
use crate::shared::icons::refresh_icon;
use crate::shared::view_bindings::{Bound, Role, Tab};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Title row of a tab section with its action buttons on the right
#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <div class="section-header__text">
                <h2 class="section-header__title">{title}</h2>
                {move || subtitle.get().map(|s| view! {
                    <div class="section-header__subtitle">{s}</div>
                })}
            </div>
            <div class="section-header__actions">{children()}</div>
        </div>
    }
}

/// Reloads one tab's collection; rendered only where the page binds it.
#[component]
pub fn RefreshButton(tab: Tab) -> impl IntoView {
    let controller = use_controller();
    let on_click = Callback::new(move |_: leptos::ev::MouseEvent| {
        let controller = controller.clone();
        spawn_local(async move { controller.refresh(tab).await });
    });

    view! {
        <Bound role=Role::Refresh(tab)>
            <Button variant="secondary" on_click=on_click>
                {refresh_icon()}
                "Refresh"
            </Button>
        </Bound>
    }
}
