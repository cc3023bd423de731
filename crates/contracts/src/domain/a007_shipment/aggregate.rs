use crate::domain::common::lenient;
use crate::enums::StatusCode;
use serde::{Deserialize, Serialize};

/// Shipment from `GET /api/orders/{orderId}/shipment`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub order_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub tracking_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub carrier: Option<String>,
    /// PREPARING, SHIPPED, IN_TRANSIT, DELIVERED, CANCELLED
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub shipping_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub estimated_delivery: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub shipped_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub delivered_at: Option<String>,
}

impl Shipment {
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status.as_deref().and_then(StatusCode::from_code)
    }
}

/// Body of `POST /api/orders/{orderId}/shipment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentDto {
    pub shipping_address: String,
}

/// Body of `POST /api/orders/shipment/{id}/ship`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipDto {
    pub carrier: String,
}
