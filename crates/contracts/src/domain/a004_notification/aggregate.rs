use crate::domain::common::lenient;
use serde::{Deserialize, Serialize};

/// Notification log row from `GET /api/banking/notifications`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub guid: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub order_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub message: Option<String>,
    /// SUCCESS, FAILURE
    #[serde(rename = "type", default, deserialize_with = "lenient::deserialize")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub created_at: Option<String>,
}
