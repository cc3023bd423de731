use contracts::enums::StatusBadge as BadgeModel;
use leptos::prelude::*;

/// Coloured status label. The CSS class comes from the status code, the text
/// from its human label.
#[component]
pub fn StatusBadge(badge: BadgeModel) -> impl IntoView {
    let BadgeModel { class, label } = badge;
    view! {
        <span class=format!("status-badge {}", class)>{label}</span>
    }
}

/// Small counter pill, e.g. the number of low-stock items
#[component]
pub fn CountBadge(
    #[prop(into)] count: Signal<usize>,
    /// Adds the warning modifier when the count is above zero
    #[prop(optional)]
    warn_when_nonzero: bool,
) -> impl IntoView {
    let class = move || {
        if warn_when_nonzero && count.get() > 0 {
            "badge badge--warning"
        } else {
            "badge badge--neutral"
        }
    };
    view! { <span class=class>{move || count.get()}</span> }
}
