use crate::domain::common::lenient;
use crate::enums::StatusCode;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Bank account as returned by `GET /api/banking/accounts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub account_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub account_holder_name: Option<String>,
    /// CHECKING, SAVINGS, CREDIT
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub account_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub balance: Option<f64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub created_at: Option<String>,
}

impl Account {
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status.as_deref().and_then(StatusCode::from_code)
    }

    pub fn is_active(&self) -> bool {
        self.status_code() == Some(StatusCode::Active)
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /api/banking/accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountDto {
    pub customer_id: i64,
    pub account_type: String,
    pub currency: String,
    pub account_holder_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_deposit: Option<f64>,
    /// Asks the demo backend to fail after writing, to exercise rollback.
    pub force_failure: bool,
}
