use crate::domain::common::lenient;
use crate::enums::StatusCode;
use serde::{Deserialize, Serialize};

/// Bank customer as returned by `GET /api/banking/customers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub customer_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub phone_number: Option<String>,
    /// INDIVIDUAL, BUSINESS
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub customer_type: Option<String>,
    /// LOW, MEDIUM, HIGH
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub risk_level: Option<String>,
    /// ACTIVE, INACTIVE, SUSPENDED, CLOSED
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub created_at: Option<String>,
}

impl Customer {
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status.as_deref().and_then(StatusCode::from_code)
    }
}

/// Body of `POST /api/banking/customers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub customer_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
