use crate::controller::use_controller;
use crate::shared::components::section_header::{RefreshButton, SectionHeader};
use crate::shared::components::table::{build_rows, Cell, DataTable, RowAction, TableRow};
use crate::shared::components::ui::Input;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::view_bindings::Tab;
use contracts::domain::a007_shipment::aggregate::Shipment;
use contracts::enums::StatusCode;
use leptos::prelude::*;

pub const COLUMNS: &[&str] = &[
    "ID",
    "Order",
    "Tracking number",
    "Carrier",
    "Status",
    "Address",
    "Estimated delivery",
    "Shipped",
    "Delivered",
    "Actions",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentRow {
    pub id: Option<i64>,
    pub order_id: Option<i64>,
    pub tracking_number: Option<String>,
    pub carrier: Option<String>,
    pub status: Option<String>,
    pub shipping_address: Option<String>,
    pub estimated_delivery: Option<String>,
    pub shipped_at: Option<String>,
    pub delivered_at: Option<String>,
    pub actions: Vec<RowAction>,
}

impl From<&Shipment> for ShipmentRow {
    fn from(s: &Shipment) -> Self {
        Self {
            id: s.id,
            order_id: s.order_id,
            tracking_number: s.tracking_number.clone(),
            carrier: s.carrier.clone(),
            status: s.status.clone(),
            shipping_address: s.shipping_address.clone(),
            estimated_delivery: s.estimated_delivery.as_deref().map(format_date),
            shipped_at: s.shipped_at.as_deref().map(format_datetime),
            delivered_at: s.delivered_at.as_deref().map(format_datetime),
            actions: shipment_actions(s),
        }
    }
}

/// PREPARING shipments can be handed to the carrier; SHIPPED and IN_TRANSIT
/// ones can be marked delivered.
pub fn shipment_actions(shipment: &Shipment) -> Vec<RowAction> {
    match (shipment.id, shipment.status_code()) {
        (Some(id), Some(StatusCode::Preparing)) => vec![RowAction::StartShipping(id)],
        (Some(id), Some(StatusCode::Shipped | StatusCode::InTransit)) => {
            vec![RowAction::MarkDelivered(id)]
        }
        _ => Vec::new(),
    }
}

impl TableRow for ShipmentRow {
    fn key(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id),
            Cell::text(self.order_id),
            Cell::strong(self.tracking_number.clone()),
            Cell::text(self.carrier.clone()),
            Cell::badge(self.status.as_deref()),
            Cell::text(self.shipping_address.clone()),
            Cell::text(self.estimated_delivery.clone()),
            Cell::text(self.shipped_at.clone()),
            Cell::text(self.delivered_at.clone()),
            Cell::Actions(self.actions.clone()),
        ]
    }
}

#[component]
pub fn ShipmentList() -> impl IntoView {
    let controller = use_controller();
    let shipments = controller.state.shipments;
    let carrier = controller.state.carrier;
    let body = Signal::derive(move || shipments.with(|s| build_rows::<Shipment, ShipmentRow>(s)));
    let default_carrier = controller.config().default_carrier.clone();
    let on_action = controller.row_actions();

    view! {
        <section class="panel">
            <SectionHeader title="Shipments" subtitle="Shipments of orders created or looked up in this session">
                <Input
                    label="Carrier"
                    value=carrier
                    on_input=Callback::new(move |v: String| carrier.set(v))
                    placeholder=default_carrier
                />
                <RefreshButton tab=Tab::Shipments />
            </SectionHeader>
            <DataTable
                columns=COLUMNS
                body=body
                empty_text="No shipments to show"
                on_action=on_action
            />
        </section>
    }
}
