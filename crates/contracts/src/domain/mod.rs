pub mod a001_account;
pub mod a002_customer;
pub mod a003_transaction;
pub mod a004_notification;
pub mod a005_order;
pub mod a006_inventory;
pub mod a007_shipment;
pub mod common;
