use super::forms::{
    AccountForm, CustomerForm, DepositForm, InventoryForm, OrderForm, OrderUpdateForm,
    ShipmentForm, ShipmentLookupForm, TransferForm,
};
use crate::shared::log_feed::ConsoleLog;
use crate::shared::view_bindings::Tab;
use contracts::domain::a001_account::aggregate::Account;
use contracts::domain::a002_customer::aggregate::Customer;
use contracts::domain::a003_transaction::aggregate::Transaction;
use contracts::domain::a004_notification::aggregate::Notification;
use contracts::domain::a005_order::aggregate::Order;
use contracts::domain::a006_inventory::aggregate::InventoryItem;
use contracts::domain::a007_shipment::aggregate::Shipment;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct FormState {
    pub account: RwSignal<AccountForm>,
    pub customer: RwSignal<CustomerForm>,
    pub deposit: RwSignal<DepositForm>,
    pub transfer: RwSignal<TransferForm>,
    pub order: RwSignal<OrderForm>,
    pub order_update: RwSignal<OrderUpdateForm>,
    pub inventory: RwSignal<InventoryForm>,
    pub shipment: RwSignal<ShipmentForm>,
    pub shipment_lookup: RwSignal<ShipmentLookupForm>,
}

impl FormState {
    fn new() -> Self {
        Self {
            account: RwSignal::new(AccountForm::default()),
            customer: RwSignal::new(CustomerForm::default()),
            deposit: RwSignal::new(DepositForm::default()),
            transfer: RwSignal::new(TransferForm::default()),
            order: RwSignal::new(OrderForm::default()),
            order_update: RwSignal::new(OrderUpdateForm::default()),
            inventory: RwSignal::new(InventoryForm::default()),
            shipment: RwSignal::new(ShipmentForm::default()),
            shipment_lookup: RwSignal::new(ShipmentLookupForm::default()),
        }
    }
}

/// Everything the views render. Collections are replaced wholesale on
/// every load.
#[derive(Clone, Copy)]
pub struct ConsoleState {
    pub log: ConsoleLog,
    pub accounts: RwSignal<Vec<Account>>,
    pub customers: RwSignal<Vec<Customer>>,
    pub transactions: RwSignal<Vec<Transaction>>,
    pub notifications: RwSignal<Vec<Notification>>,
    pub orders: RwSignal<Vec<Order>>,
    pub inventory: RwSignal<Vec<InventoryItem>>,
    /// Inventory table currently shows the low-stock subset
    pub low_stock_only: RwSignal<bool>,
    pub shipments: RwSignal<Vec<Shipment>>,
    /// Orders whose shipments the shipment tab follows
    pub shipment_orders: RwSignal<Vec<i64>>,
    pub active_tab: RwSignal<Option<Tab>>,
    pub carrier: RwSignal<String>,
    pub forms: FormState,
}

impl ConsoleState {
    pub fn new(log_capacity: usize, carrier: &str) -> Self {
        Self {
            log: ConsoleLog::new(log_capacity),
            accounts: RwSignal::new(Vec::new()),
            customers: RwSignal::new(Vec::new()),
            transactions: RwSignal::new(Vec::new()),
            notifications: RwSignal::new(Vec::new()),
            orders: RwSignal::new(Vec::new()),
            inventory: RwSignal::new(Vec::new()),
            low_stock_only: RwSignal::new(false),
            shipments: RwSignal::new(Vec::new()),
            shipment_orders: RwSignal::new(Vec::new()),
            active_tab: RwSignal::new(None),
            carrier: RwSignal::new(carrier.to_string()),
            forms: FormState::new(),
        }
    }

    /// Rows currently held for `tab`; tracked, for tab badges.
    pub fn count(&self, tab: Tab) -> usize {
        match tab {
            Tab::Accounts => self.accounts.with(Vec::len),
            Tab::Customers => self.customers.with(Vec::len),
            Tab::Transactions => self.transactions.with(Vec::len),
            Tab::Notifications => self.notifications.with(Vec::len),
            Tab::Orders => self.orders.with(Vec::len),
            Tab::Inventory => self.inventory.with(Vec::len),
            Tab::Shipments => self.shipments.with(Vec::len),
        }
    }

    /// Start following `order_id` in the shipment tab.
    pub fn track_shipment_order(&self, order_id: i64) {
        self.shipment_orders.update(|ids| {
            if !ids.contains(&order_id) {
                ids.push(order_id);
            }
        });
    }
}
