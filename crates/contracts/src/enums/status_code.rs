use serde::{Deserialize, Serialize};

/// Class applied to any badge whose code has no dedicated styling.
pub const DEFAULT_STATUS_CLASS: &str = "status-pending";

/// Every status-like code the back-ends are known to send: entity statuses,
/// transaction and account types, customer types, risk levels and
/// notification types all share one badge vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Active,
    Frozen,
    Closed,
    Suspended,
    Inactive,
    Completed,
    Pending,
    Failed,
    Cancelled,
    Deposit,
    Withdrawal,
    Transfer,
    Fee,
    Interest,
    Checking,
    Savings,
    Credit,
    Business,
    Individual,
    Low,
    Medium,
    High,
    Created,
    Paid,
    Preparing,
    Shipped,
    InTransit,
    Delivered,
    Success,
    Failure,
}

impl StatusCode {
    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            StatusCode::Active => "ACTIVE",
            StatusCode::Frozen => "FROZEN",
            StatusCode::Closed => "CLOSED",
            StatusCode::Suspended => "SUSPENDED",
            StatusCode::Inactive => "INACTIVE",
            StatusCode::Completed => "COMPLETED",
            StatusCode::Pending => "PENDING",
            StatusCode::Failed => "FAILED",
            StatusCode::Cancelled => "CANCELLED",
            StatusCode::Deposit => "DEPOSIT",
            StatusCode::Withdrawal => "WITHDRAWAL",
            StatusCode::Transfer => "TRANSFER",
            StatusCode::Fee => "FEE",
            StatusCode::Interest => "INTEREST",
            StatusCode::Checking => "CHECKING",
            StatusCode::Savings => "SAVINGS",
            StatusCode::Credit => "CREDIT",
            StatusCode::Business => "BUSINESS",
            StatusCode::Individual => "INDIVIDUAL",
            StatusCode::Low => "LOW",
            StatusCode::Medium => "MEDIUM",
            StatusCode::High => "HIGH",
            StatusCode::Created => "CREATED",
            StatusCode::Paid => "PAID",
            StatusCode::Preparing => "PREPARING",
            StatusCode::Shipped => "SHIPPED",
            StatusCode::InTransit => "IN_TRANSIT",
            StatusCode::Delivered => "DELIVERED",
            StatusCode::Success => "SUCCESS",
            StatusCode::Failure => "FAILURE",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            StatusCode::Active => "Active",
            StatusCode::Frozen => "Frozen",
            StatusCode::Closed => "Closed",
            StatusCode::Suspended => "Suspended",
            StatusCode::Inactive => "Inactive",
            StatusCode::Completed => "Completed",
            StatusCode::Pending => "Processing",
            StatusCode::Failed => "Failed",
            StatusCode::Cancelled => "Cancelled",
            StatusCode::Deposit => "Deposit",
            StatusCode::Withdrawal => "Withdrawal",
            StatusCode::Transfer => "Transfer",
            StatusCode::Fee => "Fee",
            StatusCode::Interest => "Interest",
            StatusCode::Checking => "Checking",
            StatusCode::Savings => "Savings",
            StatusCode::Credit => "Credit",
            StatusCode::Business => "Business",
            StatusCode::Individual => "Individual",
            StatusCode::Low => "Low",
            StatusCode::Medium => "Medium",
            StatusCode::High => "High",
            StatusCode::Created => "Created",
            StatusCode::Paid => "Paid",
            StatusCode::Preparing => "Preparing",
            StatusCode::Shipped => "Shipped",
            StatusCode::InTransit => "In transit",
            StatusCode::Delivered => "Delivered",
            StatusCode::Success => "Success",
            StatusCode::Failure => "Failure",
        }
    }

    /// Presentation class. Types, risk levels and other unstyled codes
    /// share the default class.
    pub fn class(&self) -> &'static str {
        match self {
            StatusCode::Active | StatusCode::Paid | StatusCode::Shipped | StatusCode::InTransit => {
                "status-active"
            }
            StatusCode::Frozen => "status-frozen",
            StatusCode::Closed | StatusCode::Inactive | StatusCode::Cancelled => "status-closed",
            StatusCode::Suspended => "status-suspended",
            StatusCode::Completed | StatusCode::Delivered | StatusCode::Success => {
                "status-completed"
            }
            StatusCode::Failed | StatusCode::Failure => "status-failed",
            _ => DEFAULT_STATUS_CLASS,
        }
    }

    /// All known codes
    pub fn all() -> &'static [StatusCode] {
        &[
            StatusCode::Active,
            StatusCode::Frozen,
            StatusCode::Closed,
            StatusCode::Suspended,
            StatusCode::Inactive,
            StatusCode::Completed,
            StatusCode::Pending,
            StatusCode::Failed,
            StatusCode::Cancelled,
            StatusCode::Deposit,
            StatusCode::Withdrawal,
            StatusCode::Transfer,
            StatusCode::Fee,
            StatusCode::Interest,
            StatusCode::Checking,
            StatusCode::Savings,
            StatusCode::Credit,
            StatusCode::Business,
            StatusCode::Individual,
            StatusCode::Low,
            StatusCode::Medium,
            StatusCode::High,
            StatusCode::Created,
            StatusCode::Paid,
            StatusCode::Preparing,
            StatusCode::Shipped,
            StatusCode::InTransit,
            StatusCode::Delivered,
            StatusCode::Success,
            StatusCode::Failure,
        ]
    }

    /// Parse a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        StatusCode::all().iter().copied().find(|s| s.code() == code)
    }
}

/// Rendered `{class, label}` pair for a status cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub class: String,
    pub label: String,
}

impl StatusBadge {
    /// Unknown codes keep the raw code as label and fall back to the
    /// default class, so new backend states still render.
    pub fn for_code(code: &str) -> Self {
        match StatusCode::from_code(code) {
            Some(status) => Self {
                class: status.class().to_string(),
                label: status.label().to_string(),
            },
            None => Self {
                class: DEFAULT_STATUS_CLASS.to_string(),
                label: code.to_string(),
            },
        }
    }
}
