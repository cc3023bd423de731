use crate::controller::use_controller;
use crate::shared::components::section_header::{RefreshButton, SectionHeader};
use crate::shared::components::table::{build_rows, Cell, DataTable, RowAction, TableRow};
use crate::shared::date_utils::format_datetime;
use crate::shared::view_bindings::Tab;
use contracts::domain::a002_customer::aggregate::Customer;
use contracts::enums::StatusCode;
use leptos::prelude::*;

pub const COLUMNS: &[&str] = &[
    "ID",
    "Customer number",
    "Name",
    "Phone",
    "Email",
    "Type",
    "Risk",
    "Status",
    "Registered",
    "Actions",
];

#[derive(Clone, Debug, PartialEq)]
pub struct CustomerRow {
    pub id: Option<i64>,
    pub customer_number: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub customer_type: Option<String>,
    pub risk_level: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub actions: Vec<RowAction>,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id,
            customer_number: c.customer_number.clone(),
            name: c.name.clone(),
            phone_number: c.phone_number.clone(),
            email: c.email.clone(),
            customer_type: c.customer_type.clone(),
            risk_level: c.risk_level.clone(),
            status: c.status.clone(),
            created_at: c.created_at.as_deref().map(format_datetime),
            actions: customer_actions(c),
        }
    }
}

/// Suspend is offered until the customer is suspended or closed.
pub fn customer_actions(customer: &Customer) -> Vec<RowAction> {
    match (customer.id, customer.status_code()) {
        (None, _) => Vec::new(),
        (Some(_), Some(StatusCode::Suspended | StatusCode::Closed)) => Vec::new(),
        (Some(id), _) => vec![RowAction::SuspendCustomer(id)],
    }
}

impl TableRow for CustomerRow {
    fn key(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id),
            Cell::strong(self.customer_number.clone()),
            Cell::text(self.name.clone()),
            Cell::text(self.phone_number.clone()),
            Cell::text(self.email.clone()),
            Cell::badge(self.customer_type.as_deref()),
            Cell::badge(self.risk_level.as_deref()),
            Cell::badge(self.status.as_deref()),
            Cell::text(self.created_at.clone()),
            Cell::Actions(self.actions.clone()),
        ]
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let controller = use_controller();
    let customers = controller.state.customers;
    let body =
        Signal::derive(move || customers.with(|c| build_rows::<Customer, CustomerRow>(c)));

    view! {
        <section class="panel">
            <SectionHeader title="Customers">
                <RefreshButton tab=Tab::Customers />
            </SectionHeader>
            <DataTable
                columns=COLUMNS
                body=body
                empty_text="No customers yet"
                on_action=controller.row_actions()
            />
        </section>
    }
}
