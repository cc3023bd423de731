use crate::domain::common::lenient;
use crate::enums::StatusCode;
use serde::{Deserialize, Serialize};

/// Order as returned by `GET /api/orders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub amount: Option<f64>,
    /// CREATED, PAID, CANCELLED, FAILED
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub created_at: Option<String>,
}

impl Order {
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status.as_deref().and_then(StatusCode::from_code)
    }
}

/// Body of `POST /api/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i64,
    pub amount: i64,
    /// Asks the demo backend to fail the payment step.
    pub force_payment_failure: bool,
}

/// Body of `PUT /api/orders/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderDto {
    pub customer_name: String,
    pub amount: i64,
}
