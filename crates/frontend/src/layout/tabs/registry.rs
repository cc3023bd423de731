//! Tab content registry: the one place mapping a [`Tab`] to its forms and list.

use crate::domain::a001_account::ui::form::NewAccountForm;
use crate::domain::a001_account::ui::list::AccountList;
use crate::domain::a002_customer::ui::form::NewCustomerForm;
use crate::domain::a002_customer::ui::list::CustomerList;
use crate::domain::a003_transaction::ui::form::{DepositPanel, TransferPanel};
use crate::domain::a003_transaction::ui::list::TransactionList;
use crate::domain::a004_notification::ui::list::NotificationList;
use crate::domain::a005_order::ui::form::{NewOrderForm, UpdateOrderForm};
use crate::domain::a005_order::ui::list::OrderList;
use crate::domain::a006_inventory::ui::form::NewInventoryForm;
use crate::domain::a006_inventory::ui::list::InventoryList;
use crate::domain::a007_shipment::ui::form::ShipmentForms;
use crate::domain::a007_shipment::ui::list::ShipmentList;
use crate::shared::view_bindings::{Bound, Role, Tab};
use leptos::prelude::*;

pub fn render_tab_content(tab: Tab) -> AnyView {
    match tab {
        Tab::Accounts => view! {
            <Bound role=Role::AccountForm><NewAccountForm /></Bound>
            <AccountList />
        }
        .into_any(),
        Tab::Customers => view! {
            <Bound role=Role::CustomerForm><NewCustomerForm /></Bound>
            <CustomerList />
        }
        .into_any(),
        Tab::Transactions => view! {
            <div class="form-row">
                <Bound role=Role::DepositForm><DepositPanel /></Bound>
                <Bound role=Role::TransferForm><TransferPanel /></Bound>
            </div>
            <TransactionList />
        }
        .into_any(),
        Tab::Notifications => view! { <NotificationList /> }.into_any(),
        Tab::Orders => view! {
            <div class="form-row">
                <Bound role=Role::OrderForm><NewOrderForm /></Bound>
                <Bound role=Role::OrderUpdateForm><UpdateOrderForm /></Bound>
            </div>
            <OrderList />
        }
        .into_any(),
        Tab::Inventory => view! {
            <Bound role=Role::InventoryForm><NewInventoryForm /></Bound>
            <InventoryList />
        }
        .into_any(),
        Tab::Shipments => view! {
            <ShipmentForms />
            <ShipmentList />
        }
        .into_any(),
    }
}
