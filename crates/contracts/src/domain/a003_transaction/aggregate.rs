use crate::domain::common::lenient;
use serde::{Deserialize, Serialize};

/// Ledger entry as returned by `GET /api/banking/transactions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub guid: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub from_account_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub to_account_id: Option<i64>,
    /// DEPOSIT, WITHDRAWAL, TRANSFER, FEE, INTEREST
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub transaction_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub reference_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub created_at: Option<String>,
}

/// Body of `POST /api/banking/deposit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositDto {
    pub account_id: i64,
    pub amount: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub force_failure: bool,
}

/// Body of `POST /api/banking/transfer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDto {
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub force_failure: bool,
}
