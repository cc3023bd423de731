use crate::controller::use_controller;
use crate::shared::components::section_header::{RefreshButton, SectionHeader};
use crate::shared::components::table::number_format::format_number_int;
use crate::shared::components::table::{build_rows, Cell, DataTable, TableRow};
use crate::shared::components::ui::Button;
use crate::shared::date_utils::format_datetime;
use crate::shared::view_bindings::{Bound, Role, Tab};
use contracts::domain::a006_inventory::aggregate::InventoryItem;
use contracts::enums::StatusCode;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const COLUMNS: &[&str] = &[
    "ID",
    "Product",
    "Current stock",
    "Reserved",
    "Available",
    "Minimum",
    "Stock level",
    "Updated",
];

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryRow {
    pub id: Option<i64>,
    pub product_name: Option<String>,
    pub current_stock: Option<i64>,
    pub reserved_stock: Option<i64>,
    pub available: Option<i64>,
    pub min_stock_level: Option<i64>,
    pub low: bool,
    pub updated_at: Option<String>,
}

impl From<&InventoryItem> for InventoryRow {
    fn from(i: &InventoryItem) -> Self {
        Self {
            id: i.id,
            product_name: i.product_name.clone(),
            current_stock: i.current_stock,
            reserved_stock: i.reserved_stock,
            available: i.available(),
            min_stock_level: i.min_stock_level,
            low: i.is_low(),
            updated_at: i.updated_at.as_deref().map(format_datetime),
        }
    }
}

fn stock(units: i64) -> String {
    format_number_int(units as f64)
}

impl TableRow for InventoryRow {
    fn key(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn cells(&self) -> Vec<Cell> {
        let level = if self.low { StatusCode::Low } else { StatusCode::High };
        vec![
            Cell::text(self.id),
            Cell::strong(self.product_name.clone()),
            Cell::text(self.current_stock.map(stock)),
            Cell::text(self.reserved_stock.map(stock)),
            Cell::strong(self.available.map(stock)),
            Cell::text(self.min_stock_level.map(stock)),
            Cell::badge(Some(level.code())),
            Cell::text(self.updated_at.clone()),
        ]
    }
}

/// Narrows the table to products at or below their minimum level.
#[component]
pub fn LowStockButton() -> impl IntoView {
    let controller = use_controller();
    let on_click = Callback::new(move |_: leptos::ev::MouseEvent| {
        let controller = controller.clone();
        spawn_local(async move { controller.filter_low_stock().await });
    });

    view! {
        <Bound role=Role::LowStockButton>
            <Button variant="secondary" on_click=on_click>"Low stock only"</Button>
        </Bound>
    }
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let state = use_controller().state;
    let inventory = state.inventory;
    let low_stock_only = state.low_stock_only;
    let body = Signal::derive(move || {
        inventory.with(|i| build_rows::<InventoryItem, InventoryRow>(i))
    });
    let subtitle = Signal::derive(move || {
        let text = if low_stock_only.get() {
            "Showing products at or below their minimum level"
        } else {
            "All products"
        };
        Some(text.to_string())
    });

    view! {
        <section class="panel">
            <SectionHeader title="Inventory" subtitle=subtitle>
                <LowStockButton />
                <RefreshButton tab=Tab::Inventory />
            </SectionHeader>
            <DataTable columns=COLUMNS body=body empty_text="No products in inventory" />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_badge() {
        let item = InventoryItem {
            id: Some(4),
            product_name: Some("Monitor".into()),
            current_stock: Some(1200),
            reserved_stock: Some(1),
            min_stock_level: Some(1500),
            ..Default::default()
        };
        let cells: Vec<String> = InventoryRow::from(&item).cells().iter().map(Cell::display).collect();
        assert_eq!(cells, vec!["4", "Monitor", "1,200", "1", "1,199", "1,500", "Low", "-"]);
    }

    #[test]
    fn test_missing_stock_shows_placeholders() {
        let row = InventoryRow::from(&InventoryItem::default());
        assert!(!row.low);
        assert_eq!(row.cells()[4], Cell::Strong("-".into()));
    }
}
