use crate::controller::use_controller;
use crate::shared::components::section_header::{RefreshButton, SectionHeader};
use crate::shared::components::table::{build_rows, Cell, DataTable, TableRow};
use crate::shared::date_utils::format_datetime;
use crate::shared::view_bindings::Tab;
use contracts::domain::a004_notification::aggregate::Notification;
use leptos::prelude::*;

pub const COLUMNS: &[&str] = &["ID", "GUID", "Order", "Type", "Message", "Time"];

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationRow {
    pub id: Option<i64>,
    pub guid: Option<String>,
    pub order_id: Option<i64>,
    pub kind: Option<String>,
    pub message: Option<String>,
    pub created_at: Option<String>,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id,
            guid: n.guid.clone(),
            order_id: n.order_id,
            kind: n.kind.clone(),
            message: n.message.clone(),
            created_at: n.created_at.as_deref().map(format_datetime),
        }
    }
}

impl TableRow for NotificationRow {
    fn key(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id),
            Cell::text(self.guid.clone()),
            Cell::text(self.order_id),
            Cell::badge(self.kind.as_deref()),
            Cell::text(self.message.clone()),
            Cell::text(self.created_at.clone()),
        ]
    }
}

#[component]
pub fn NotificationList() -> impl IntoView {
    let state = use_controller().state;
    let notifications = state.notifications;
    let body = Signal::derive(move || {
        notifications.with(|n| build_rows::<Notification, NotificationRow>(n))
    });

    view! {
        <section class="panel">
            <SectionHeader title="Notifications" subtitle="Written by the backend after each commit or rollback">
                <RefreshButton tab=Tab::Notifications />
            </SectionHeader>
            <DataTable columns=COLUMNS body=body empty_text="No notifications" />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_notification_row() {
        let n: Notification = serde_json::from_value(json!({
            "id": 12,
            "orderId": 5,
            "type": "FAILURE",
            "message": "Payment declined, order rolled back"
        }))
        .unwrap();
        let cells: Vec<String> = NotificationRow::from(&n).cells().iter().map(Cell::display).collect();
        assert_eq!(
            cells,
            vec!["12", "-", "5", "Failure", "Payment declined, order rolled back", "-"]
        );
    }
}
