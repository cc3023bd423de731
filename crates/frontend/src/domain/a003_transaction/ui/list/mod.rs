use crate::controller::use_controller;
use crate::shared::components::section_header::{RefreshButton, SectionHeader};
use crate::shared::components::table::number_format::format_currency;
use crate::shared::components::table::{build_rows, Cell, DataTable, TableRow};
use crate::shared::date_utils::format_datetime;
use crate::shared::view_bindings::Tab;
use contracts::domain::a003_transaction::aggregate::Transaction;
use leptos::prelude::*;

pub const COLUMNS: &[&str] = &[
    "ID",
    "GUID",
    "From",
    "To",
    "Type",
    "Amount",
    "Currency",
    "Status",
    "Reference",
    "Description",
    "Time",
];

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    pub id: Option<i64>,
    pub guid: Option<String>,
    pub from_account_id: Option<i64>,
    pub to_account_id: Option<i64>,
    pub transaction_type: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub reference_number: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id,
            guid: t.guid.clone(),
            from_account_id: t.from_account_id,
            to_account_id: t.to_account_id,
            transaction_type: t.transaction_type.clone(),
            amount: t.amount.map(|a| format_currency(a, t.currency.as_deref())),
            currency: t.currency.clone(),
            status: t.status.clone(),
            reference_number: t.reference_number.clone(),
            description: t.description.clone().filter(|d| !d.is_empty()),
            created_at: t.created_at.as_deref().map(format_datetime),
        }
    }
}

impl TableRow for TransactionRow {
    fn key(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id),
            Cell::strong(self.guid.clone()),
            Cell::text(self.from_account_id),
            Cell::text(self.to_account_id),
            Cell::badge(self.transaction_type.as_deref()),
            Cell::strong(self.amount.clone()),
            Cell::text(self.currency.clone()),
            Cell::badge(self.status.as_deref()),
            Cell::text(self.reference_number.clone()),
            Cell::text(self.description.clone()),
            Cell::text(self.created_at.clone()),
        ]
    }
}

#[component]
pub fn TransactionList() -> impl IntoView {
    let controller = use_controller();
    let transactions = controller.state.transactions;
    let body = Signal::derive(move || {
        transactions.with(|t| build_rows::<Transaction, TransactionRow>(t))
    });

    view! {
        <section class="panel">
            <SectionHeader title="Transactions">
                <RefreshButton tab=Tab::Transactions />
            </SectionHeader>
            <DataTable columns=COLUMNS body=body empty_text="No transactions yet" />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deposit_row_has_no_source_account() {
        let deposit: Transaction = serde_json::from_value(json!({
            "id": 3,
            "guid": "tx-3",
            "toAccountId": 2,
            "transactionType": "DEPOSIT",
            "amount": 50000,
            "currency": "KRW",
            "status": "COMPLETED",
            "createdAt": "2024-03-01T09:15:00"
        }))
        .unwrap();

        let cells: Vec<String> = TransactionRow::from(&deposit)
            .cells()
            .iter()
            .map(Cell::display)
            .collect();

        assert_eq!(
            cells,
            vec![
                "3",
                "tx-3",
                "-",
                "2",
                "Deposit",
                "₩50,000",
                "KRW",
                "Completed",
                "-",
                "-",
                "2024-03-01 09:15:00"
            ]
        );
    }
}
