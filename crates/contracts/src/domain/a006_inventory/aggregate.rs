use crate::domain::common::lenient;
use serde::{Deserialize, Serialize};

/// Stock row from `GET /api/orders/inventory`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub current_stock: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub reserved_stock: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub min_stock_level: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub updated_at: Option<String>,
}

impl InventoryItem {
    /// Stock not yet reserved by open orders
    pub fn available(&self) -> Option<i64> {
        Some(self.current_stock? - self.reserved_stock.unwrap_or(0))
    }

    pub fn is_low(&self) -> bool {
        match (self.current_stock, self.min_stock_level) {
            (Some(current), Some(min)) => current <= min,
            _ => false,
        }
    }
}

/// Body of `POST /api/orders/inventory`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryDto {
    pub product_name: String,
    pub current_stock: i64,
    pub min_stock_level: i64,
}
