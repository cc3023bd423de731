use super::forms::{InventoryForm, OrderForm, OrderUpdateForm, ShipmentForm, ShipmentLookupForm};
use super::{ActionError, Controller};
use crate::shared::api_utils::RequestOptions;
use crate::shared::components::table::number_format::format_currency;
use crate::shared::components::table::{RowAction, PLACEHOLDER};
use crate::shared::transport::RequestError;
use crate::shared::view_bindings::Tab;
use contracts::domain::a005_order::aggregate::Order;
use contracts::domain::a006_inventory::aggregate::InventoryItem;
use contracts::domain::a007_shipment::aggregate::{ShipDto, Shipment};
use futures::future::join_all;
use leptos::prelude::*;

impl Controller {
    pub async fn load_orders(&self) -> Result<(), RequestError> {
        self.state.log.info("Loading orders...");
        let orders: Vec<Order> = self.orders.make_request("", RequestOptions::get()).await?;
        let count = orders.len();
        self.state.orders.set(orders);
        self.state
            .log
            .success(format!("Orders loaded ({} orders)", count));
        Ok(())
    }

    pub async fn load_inventory(&self) -> Result<(), RequestError> {
        self.state.log.info("Loading inventory...");
        let items: Vec<InventoryItem> = self
            .orders
            .make_request("/inventory", RequestOptions::get())
            .await?;
        let count = items.len();
        self.state.inventory.set(items);
        self.state.low_stock_only.set(false);
        self.state
            .log
            .success(format!("Inventory loaded ({} products)", count));
        Ok(())
    }

    /// Replaces the inventory table with the products at or below their
    /// minimum level.
    pub async fn show_low_stock(&self) -> Result<(), RequestError> {
        self.state.log.info("Loading low-stock products...");
        let items: Vec<InventoryItem> = self
            .orders
            .make_request("/inventory/low-stock", RequestOptions::get())
            .await?;
        let count = items.len();
        self.state.inventory.set(items);
        self.state.low_stock_only.set(true);
        if count == 0 {
            self.state.log.success("No products are low on stock");
        } else {
            self.state
                .log
                .warning(format!("{} products are low on stock", count));
        }
        Ok(())
    }

    /// Low-stock button. Like a refresh, a failure only raises an alert.
    pub async fn filter_low_stock(&self) {
        if let Err(err) = self.show_low_stock().await {
            self.prompt
                .alert(&format!("Could not load low-stock products: {}", err));
        }
    }

    /// Fetches the shipment of every followed order concurrently. Shipments
    /// that loaded are shown even when another one failed.
    pub async fn load_shipments(&self) -> Result<(), RequestError> {
        let order_ids = self.state.shipment_orders.get_untracked();
        self.state.log.info(format!(
            "Loading shipments for {} orders...",
            order_ids.len()
        ));

        let fetches = order_ids.iter().map(|id| async move {
            let path = format!("/{}/shipment", id);
            self.orders
                .make_request::<Shipment>(&path, RequestOptions::get())
                .await
        });
        let mut shipments = Vec::with_capacity(order_ids.len());
        let mut first_error = None;
        for result in join_all(fetches).await {
            match result {
                Ok(shipment) => shipments.push(shipment),
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }

        let count = shipments.len();
        self.state.shipments.set(shipments);
        match first_error {
            Some(err) => Err(err),
            None => {
                self.state
                    .log
                    .success(format!("Shipments loaded ({} shipments)", count));
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    pub async fn create_order(&self) -> Result<(), ActionError> {
        let outcome = async {
            let dto = self.state.forms.order.get_untracked().validate()?;
            self.state.log.info(format!(
                "Creating order: {} x{} for {} ({})",
                dto.product_name,
                dto.quantity,
                dto.customer_name,
                format_currency(dto.amount as f64, None)
            ));
            if dto.force_payment_failure {
                self.state
                    .log
                    .warning("Payment failure requested; expecting a rollback");
            }

            let reply = self
                .submit(&self.orders, "", RequestOptions::post().json(&dto)?)
                .await?;

            self.show_success(reply.message_or("Order created"));
            self.state.forms.order.set(OrderForm::default());
            self.reload(Tab::Orders).await;
            self.reload(Tab::Inventory).await;
            Ok::<(), ActionError>(())
        }
        .await;
        self.report("Order creation", outcome)
    }

    pub async fn update_order(&self) -> Result<(), ActionError> {
        let outcome = async {
            let (id, dto) = self.state.forms.order_update.get_untracked().validate()?;
            self.state.log.info(format!(
                "Updating order {}: customer {}, amount {}",
                id,
                dto.customer_name,
                format_currency(dto.amount as f64, None)
            ));

            let reply = self
                .submit(
                    &self.orders,
                    &format!("/{}", id),
                    RequestOptions::put().json(&dto)?,
                )
                .await?;

            self.show_success(reply.message_or("Order updated"));
            self.state.forms.order_update.set(OrderUpdateForm::default());
            self.reload(Tab::Orders).await;
            Ok::<(), ActionError>(())
        }
        .await;
        self.report("Order update", outcome)
    }

    pub async fn cancel_order(&self, id: i64) -> Result<(), ActionError> {
        if !self.confirmed(RowAction::CancelOrder(id)) {
            return Ok(());
        }
        let outcome = async {
            self.state.log.info(format!("Cancelling order {}", id));
            let reply = self
                .submit(
                    &self.orders,
                    &format!("/{}/cancel", id),
                    RequestOptions::post(),
                )
                .await?;
            self.show_success(reply.message_or("Order cancelled"));
            self.reload(Tab::Orders).await;
            self.reload(Tab::Inventory).await;
            Ok::<(), ActionError>(())
        }
        .await;
        self.report("Order cancellation", outcome)
    }

    // ------------------------------------------------------------------
    // Inventory
    // ------------------------------------------------------------------

    pub async fn add_inventory(&self) -> Result<(), ActionError> {
        let outcome = async {
            let dto = self.state.forms.inventory.get_untracked().validate()?;
            self.state.log.info(format!(
                "Adding product {} (stock {}, minimum {})",
                dto.product_name, dto.current_stock, dto.min_stock_level
            ));

            let reply = self
                .submit(&self.orders, "/inventory", RequestOptions::post().json(&dto)?)
                .await?;

            self.show_success(reply.message_or("Product added to inventory"));
            self.state.forms.inventory.set(InventoryForm::default());
            self.reload(Tab::Inventory).await;
            Ok::<(), ActionError>(())
        }
        .await;
        self.report("Adding inventory", outcome)
    }

    // ------------------------------------------------------------------
    // Shipments
    // ------------------------------------------------------------------

    pub async fn create_shipment(&self) -> Result<(), ActionError> {
        let outcome = async {
            let (order_id, dto) = self.state.forms.shipment.get_untracked().validate()?;
            self.state
                .log
                .info(format!("Creating shipment for order {}", order_id));

            let reply = self
                .submit(
                    &self.orders,
                    &format!("/{}/shipment", order_id),
                    RequestOptions::post().json(&dto)?,
                )
                .await?;

            self.state.track_shipment_order(order_id);
            let tracking = reply
                .field("trackingNumber")
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            self.show_success(reply.message_or(&format!("Shipment created: {}", tracking)));
            self.state.forms.shipment.set(ShipmentForm::default());
            self.reload(Tab::Shipments).await;
            self.reload(Tab::Orders).await;
            Ok::<(), ActionError>(())
        }
        .await;
        self.report("Shipment creation", outcome)
    }

    /// Shows the shipment of one order and follows it from then on.
    pub async fn lookup_shipment(&self) -> Result<(), ActionError> {
        let outcome = async {
            let order_id = self.state.forms.shipment_lookup.get_untracked().validate()?;
            self.state
                .log
                .info(format!("Looking up shipment of order {}", order_id));

            let shipment: Shipment = self
                .orders
                .make_request(&format!("/{}/shipment", order_id), RequestOptions::get())
                .await?;

            self.state.track_shipment_order(order_id);
            self.state.log.success(format!(
                "Shipment found: {}",
                shipment
                    .tracking_number
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER.to_string())
            ));
            self.state.shipments.set(vec![shipment]);
            self.state
                .forms
                .shipment_lookup
                .set(ShipmentLookupForm::default());
            Ok::<(), ActionError>(())
        }
        .await;
        self.report("Shipment lookup", outcome)
    }

    pub async fn start_shipping(&self, shipment_id: i64) -> Result<(), ActionError> {
        let outcome = async {
            let carrier = Some(self.state.carrier.get_untracked())
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| self.config.default_carrier.clone());
            self.state.log.info(format!(
                "Shipping shipment {} with {}",
                shipment_id, carrier
            ));

            let reply = self
                .submit(
                    &self.orders,
                    &format!("/shipment/{}/ship", shipment_id),
                    RequestOptions::post().json(&ShipDto { carrier })?,
                )
                .await?;

            self.show_success(reply.message_or("Shipping started"));
            self.reload(Tab::Shipments).await;
            Ok::<(), ActionError>(())
        }
        .await;
        self.report("Starting shipment", outcome)
    }

    pub async fn deliver_shipment(&self, shipment_id: i64) -> Result<(), ActionError> {
        if !self.confirmed(RowAction::MarkDelivered(shipment_id)) {
            return Ok(());
        }
        let outcome = async {
            self.state
                .log
                .info(format!("Marking shipment {} as delivered", shipment_id));
            let reply = self
                .submit(
                    &self.orders,
                    &format!("/shipment/{}/deliver", shipment_id),
                    RequestOptions::post(),
                )
                .await?;
            self.show_success(reply.message_or("Shipment delivered"));
            self.reload(Tab::Shipments).await;
            Ok::<(), ActionError>(())
        }
        .await;
        self.report("Marking delivery", outcome)
    }
}
