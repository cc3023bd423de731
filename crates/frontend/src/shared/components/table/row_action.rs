/// Per-row button. Carries the target id; which buttons a row gets is
/// decided by the row type from the entity's current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    FreezeAccount(i64),
    ActivateAccount(i64),
    SuspendCustomer(i64),
    CancelOrder(i64),
    StartShipping(i64),
    MarkDelivered(i64),
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::FreezeAccount(_) => "Freeze",
            RowAction::ActivateAccount(_) => "Activate",
            RowAction::SuspendCustomer(_) => "Suspend",
            RowAction::CancelOrder(_) => "Cancel",
            RowAction::StartShipping(_) => "Start shipping",
            RowAction::MarkDelivered(_) => "Mark delivered",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RowAction::FreezeAccount(_) => "btn-small btn-freeze",
            RowAction::ActivateAccount(_) => "btn-small btn-activate",
            RowAction::SuspendCustomer(_) | RowAction::CancelOrder(_) => "btn-small btn-cancel",
            RowAction::StartShipping(_) => "btn-small btn-ship",
            RowAction::MarkDelivered(_) => "btn-small btn-deliver",
        }
    }

    /// Question asked before the action runs; `None` runs it straight away.
    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            RowAction::FreezeAccount(_) => Some("Freeze this account?"),
            RowAction::ActivateAccount(_) => Some("Activate this account?"),
            RowAction::SuspendCustomer(_) => Some("Suspend this customer?"),
            RowAction::CancelOrder(_) => Some("Cancel this order?"),
            RowAction::MarkDelivered(_) => Some("Mark this shipment as delivered?"),
            RowAction::StartShipping(_) => None,
        }
    }
}
