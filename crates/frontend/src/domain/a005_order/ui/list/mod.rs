use crate::controller::use_controller;
use crate::shared::components::section_header::{RefreshButton, SectionHeader};
use crate::shared::components::table::number_format::format_currency;
use crate::shared::components::table::{build_rows, Cell, DataTable, RowAction, TableRow};
use crate::shared::date_utils::format_datetime;
use crate::shared::view_bindings::Tab;
use contracts::domain::a005_order::aggregate::Order;
use contracts::enums::StatusCode;
use leptos::prelude::*;

pub const COLUMNS: &[&str] = &[
    "ID",
    "Customer",
    "Product",
    "Quantity",
    "Amount",
    "Status",
    "Ordered",
    "Actions",
];

#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub id: Option<i64>,
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<i64>,
    pub amount: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub actions: Vec<RowAction>,
}

impl From<&Order> for OrderRow {
    fn from(o: &Order) -> Self {
        Self {
            id: o.id,
            customer_name: o.customer_name.clone(),
            product_name: o.product_name.clone(),
            quantity: o.quantity,
            amount: o.amount.map(|a| format_currency(a, None)),
            status: o.status.clone(),
            created_at: o.created_at.as_deref().map(format_datetime),
            actions: order_actions(o),
        }
    }
}

/// Only orders that are CREATED or PAID can still be cancelled.
pub fn order_actions(order: &Order) -> Vec<RowAction> {
    match (order.id, order.status_code()) {
        (Some(id), Some(StatusCode::Created | StatusCode::Paid)) => {
            vec![RowAction::CancelOrder(id)]
        }
        _ => Vec::new(),
    }
}

impl TableRow for OrderRow {
    fn key(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id),
            Cell::text(self.customer_name.clone()),
            Cell::strong(self.product_name.clone()),
            Cell::text(self.quantity),
            Cell::strong(self.amount.clone()),
            Cell::badge(self.status.as_deref()),
            Cell::text(self.created_at.clone()),
            Cell::Actions(self.actions.clone()),
        ]
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let controller = use_controller();
    let orders = controller.state.orders;
    let body = Signal::derive(move || orders.with(|o| build_rows::<Order, OrderRow>(o)));

    view! {
        <section class="panel">
            <SectionHeader title="Orders">
                <RefreshButton tab=Tab::Orders />
            </SectionHeader>
            <DataTable
                columns=COLUMNS
                body=body
                empty_text="No orders yet"
                on_action=controller.row_actions()
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(status: &str) -> Order {
        serde_json::from_value(json!({"id": 1, "status": status})).unwrap()
    }

    #[test]
    fn test_cancel_only_for_created_or_paid() {
        assert_eq!(order_actions(&order("CREATED")), vec![RowAction::CancelOrder(1)]);
        assert_eq!(order_actions(&order("PAID")), vec![RowAction::CancelOrder(1)]);
        assert!(order_actions(&order("CANCELLED")).is_empty());
        assert!(order_actions(&order("FAILED")).is_empty());
        assert!(order_actions(&order("SHIPPED")).is_empty());
    }

    #[test]
    fn test_order_row_cells() {
        let o: Order = serde_json::from_value(json!({
            "id": 8,
            "customerName": "Yoon",
            "productName": "Keyboard",
            "quantity": 2,
            "amount": 89000,
            "status": "PAID"
        }))
        .unwrap();
        let cells: Vec<String> = OrderRow::from(&o).cells().iter().map(Cell::display).collect();
        assert_eq!(
            cells,
            vec!["8", "Yoon", "Keyboard", "2", "₩89,000", "Paid", "-", "Cancel"]
        );
    }
}
