//! On-page console log.

use crate::controller::use_controller;
use crate::shared::components::ui::{Button, CountBadge};
use crate::shared::date_utils::format_log_time;
use crate::shared::view_bindings::{Bound, Role};
use contracts::shared::logger::{LogEntry, Severity};
use leptos::prelude::*;

fn entry_class(entry: &LogEntry) -> String {
    format!("log-entry {}", entry.severity.css_class())
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let controller = use_controller();
    let log = controller.state.log;
    let errors = Signal::derive(move || {
        log.entries()
            .iter()
            .filter(|e| e.severity == Severity::Error)
            .count()
    });
    let on_clear = Callback::new(move |_: leptos::ev::MouseEvent| controller.clear_logs());

    view! {
        <aside class="log-panel">
            <div class="log-panel__header">
                <h3 class="log-panel__title">"Log"</h3>
                <CountBadge count=errors warn_when_nonzero=true />
                <Bound role=Role::ClearLogsButton>
                    <Button variant="secondary" on_click=on_clear>"Clear"</Button>
                </Bound>
            </div>
            <div class="log-panel__entries">
                <For
                    each=move || log.entries()
                    key=|entry| entry.id
                    children=move |entry| {
                        view! {
                            <div class=entry_class(&entry)>
                                <span class="log-entry__time">{format_log_time(&entry.timestamp)}</span>
                                <span class="log-entry__message">{entry.message.clone()}</span>
                            </div>
                        }
                    }
                />
            </div>
        </aside>
    }
}
